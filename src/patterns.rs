use crate::life::LifeGrid;

/// `(dx, dy)` offsets of the glider, relative to the anchor cell.
const GLIDER: &[(i64, i64)] = &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)];

/// The classic 13x13 pulsar, 48 cells, relative to its center.
const PULSAR: &[(i64, i64)] = &[
    // top arms
    (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
    (-4, -6), (-4, -1), (-4, 1), (-4, 6),
    (-3, -6), (-3, -1), (-3, 1), (-3, 6),
    (-2, -6), (-2, -1), (-2, 1), (-2, 6),
    (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
    // bottom arms, mirrored
    (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
    (2, -6), (2, -1), (2, 1), (2, 6),
    (3, -6), (3, -1), (3, 1), (3, 6),
    (4, -6), (4, -1), (4, 1), (4, 6),
    (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pattern {
    Glider,
    Pulsar,
}

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "Glider",
            Pattern::Pulsar => "Pulsar",
        }
    }

    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Glider => GLIDER,
            Pattern::Pulsar => PULSAR,
        }
    }

    /// Copy of `grid` with the pattern's cells set alive around `(cx, cy)`.
    ///
    /// Only the listed offsets are written, and only to alive; everything
    /// else keeps its state. Offsets landing outside the field are clipped,
    /// so stamping near an edge truncates the pattern instead of failing.
    pub fn stamp(self, grid: &LifeGrid, cx: usize, cy: usize) -> LifeGrid {
        let n = grid.size() as i64;
        let mut result = grid.clone();
        for &(dx, dy) in self.offsets() {
            let x = cx as i64 + dx;
            let y = cy as i64 + dy;
            if x >= 0 && y >= 0 && x < n && y < n {
                result.set(x as usize, y as usize, true);
            }
        }
        result
    }
}
