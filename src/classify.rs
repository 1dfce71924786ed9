//! Module classification: which region of the symbol does a cell belong to.
//!
//! The three 7x7 finder patterns ("eyes") occupy fixed corners of every QR
//! symbol; everything else inside the matrix is body data, and everything
//! outside it is quiet zone. Classification is independent of darkness: a
//! light module inside an eye block still classifies as eye, it just never
//! gets a foreground shape.

use crate::encode::ModuleMatrix;

/// Side length of a finder pattern block, in modules.
pub const FINDER_SIZE: i32 = 7;

/// Offset of the solid 3x3 core within a finder block.
const EYE_CORE_OFFSET: i32 = 2;

/// Side length of the solid core within a finder block.
const EYE_CORE_SIZE: i32 = 3;

/// The region a single module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleClass {
    /// A data module outside the finder patterns.
    Body,
    /// The outer ring of a 7x7 finder pattern.
    EyeOuter,
    /// The solid 3x3 core of a finder pattern.
    EyeInner,
    /// The border margin outside the matrix; always background.
    Quiet,
}

/// Top-left anchors of the three finder patterns for a symbol of the given
/// dimension: top-left, top-right, bottom-left. The bottom-right corner
/// never holds a finder pattern.
pub fn finder_anchors(size: i32) -> [(i32, i32); 3] {
    [(0, 0), (size - FINDER_SIZE, 0), (0, size - FINDER_SIZE)]
}

/// The classified companion grid of a [`ModuleMatrix`].
///
/// Built once per request and read-only thereafter. Every in-matrix cell is
/// assigned exactly one class; [`class_at`] is total over all coordinates,
/// answering [`ModuleClass::Quiet`] for any cell outside the matrix.
///
/// [`class_at`]: ClassifiedMatrix::class_at
#[derive(Debug, Clone)]
pub struct ClassifiedMatrix {
    size: i32,
    classes: Vec<ModuleClass>,
}

impl ClassifiedMatrix {
    /// Classifies every cell of the matrix against the given finder anchors.
    pub fn classify(matrix: &ModuleMatrix, anchors: &[(i32, i32); 3]) -> Self {
        let size = matrix.size();
        let mut classes = vec![ModuleClass::Body; (size * size) as usize];
        for &(ax, ay) in anchors {
            for dy in 0..FINDER_SIZE {
                for dx in 0..FINDER_SIZE {
                    let core = (EYE_CORE_OFFSET..EYE_CORE_OFFSET + EYE_CORE_SIZE).contains(&dx)
                        && (EYE_CORE_OFFSET..EYE_CORE_OFFSET + EYE_CORE_SIZE).contains(&dy);
                    let idx = ((ay + dy) * size + (ax + dx)) as usize;
                    classes[idx] = if core {
                        ModuleClass::EyeInner
                    } else {
                        ModuleClass::EyeOuter
                    };
                }
            }
        }
        Self { size, classes }
    }

    /// The class of the cell at the given coordinates. Total: coordinates
    /// outside the matrix are quiet zone.
    pub fn class_at(&self, x: i32, y: i32) -> ModuleClass {
        if (0..self.size).contains(&x) && (0..self.size).contains(&y) {
            self.classes[(y * self.size + x) as usize]
        } else {
            ModuleClass::Quiet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode, ErrorCorrection};

    fn classified(n: i32) -> ClassifiedMatrix {
        let matrix = ModuleMatrix::new(n, vec![false; (n * n) as usize]);
        ClassifiedMatrix::classify(&matrix, &finder_anchors(n))
    }

    #[test]
    fn every_cell_gets_exactly_one_class() {
        let grid = classified(25);
        let mut body = 0;
        let mut outer = 0;
        let mut inner = 0;
        for y in 0..25 {
            for x in 0..25 {
                match grid.class_at(x, y) {
                    ModuleClass::Body => body += 1,
                    ModuleClass::EyeOuter => outer += 1,
                    ModuleClass::EyeInner => inner += 1,
                    ModuleClass::Quiet => panic!("quiet inside matrix at ({x},{y})"),
                }
            }
        }
        // Three disjoint 7x7 eyes, each with a 3x3 core.
        assert_eq!(inner, 3 * 9);
        assert_eq!(outer, 3 * (49 - 9));
        assert_eq!(body, 25 * 25 - 3 * 49);
    }

    #[test]
    fn eye_cores_are_concentric() {
        let grid = classified(21);
        for (ax, ay) in finder_anchors(21) {
            assert_eq!(grid.class_at(ax, ay), ModuleClass::EyeOuter);
            assert_eq!(grid.class_at(ax + 3, ay + 3), ModuleClass::EyeInner);
            assert_eq!(grid.class_at(ax + 2, ay + 2), ModuleClass::EyeInner);
            assert_eq!(grid.class_at(ax + 1, ay + 1), ModuleClass::EyeOuter);
            assert_eq!(grid.class_at(ax + 5, ay + 5), ModuleClass::EyeOuter);
        }
    }

    #[test]
    fn anchors_sit_in_three_corners() {
        assert_eq!(finder_anchors(21), [(0, 0), (14, 0), (0, 14)]);
        // Bottom-right corner is body, not an eye.
        let grid = classified(21);
        assert_eq!(grid.class_at(20, 20), ModuleClass::Body);
    }

    #[test]
    fn outside_matrix_is_quiet() {
        let grid = classified(21);
        assert_eq!(grid.class_at(-1, 0), ModuleClass::Quiet);
        assert_eq!(grid.class_at(0, 21), ModuleClass::Quiet);
        assert_eq!(grid.class_at(100, 100), ModuleClass::Quiet);
    }

    #[test]
    fn classification_matches_real_symbol_geometry() {
        let matrix = encode("HELLO", ErrorCorrection::M).unwrap();
        let grid = ClassifiedMatrix::classify(&matrix, &finder_anchors(matrix.size()));
        // The finder core of a real symbol is solid dark.
        for (ax, ay) in finder_anchors(matrix.size()) {
            for dy in 2..5 {
                for dx in 2..5 {
                    assert_eq!(grid.class_at(ax + dx, ay + dy), ModuleClass::EyeInner);
                    assert!(matrix.is_dark(ax + dx, ay + dy));
                }
            }
        }
    }
}
