/// Square field of cells with row-major flat storage.
///
/// The field is bounded: edges are hard boundaries, cells outside it are
/// permanently dead. Every transition builds a fresh grid from the current
/// snapshot, so a grid handed out to a renderer is never mutated under it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LifeGrid {
    cells: Vec<bool>,
    size: usize,
}

impl LifeGrid {
    pub fn blank(size: usize) -> Self {
        assert!(size >= 1);
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    /// Each cell is independently alive with probability `fill_rate`.
    /// Pass a seed to make the fill reproducible in tests.
    pub fn random(size: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(size);
        for y in 0..size {
            for x in 0..size {
                result.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        result
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.size]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.size] = state;
    }

    /// Copy of the grid with the cell at `(x, y)` flipped.
    pub fn toggled(&self, x: usize, y: usize) -> Self {
        let mut result = self.clone();
        result.set(x, y, !self.get(x, y));
        result
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the up to 8 neighbors of `(x, y)`.
    /// Offsets falling outside the field count as dead.
    pub fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && (nx as usize) < self.size && (ny as usize) < self.size {
                    count += self.get(nx as usize, ny as usize) as usize;
                }
            }
        }
        count
    }

    /// One application of B3/S23 to the whole field.
    ///
    /// Every cell's next state is computed from this (pre-transition) grid
    /// only, so the result is independent of traversal order.
    pub fn next_generation(&self) -> Self {
        let mut next = Self::blank(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                let neibs = self.count_neighbors(x, y);
                let alive = if self.get(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                next.set(x, y, alive);
            }
        }
        next
    }
}
