use crate::life::LifeGrid;
use crate::patterns::Pattern;

/// The current grid plus the generation counter.
///
/// This is the surface the GUI drives: stepping replaces the grid wholesale
/// and bumps the counter, clear/randomize reset it, toggling and stamping
/// leave it alone. Run-state policy (what is allowed while the simulation
/// is running) belongs to the caller, not here.
pub struct Universe {
    grid: LifeGrid,
    generation: u64,
}

impl Universe {
    pub fn new(size: usize) -> Self {
        Self {
            grid: LifeGrid::blank(size),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        self.grid = self.grid.toggled(x, y);
    }

    pub fn clear(&mut self) {
        self.grid = LifeGrid::blank(self.grid.size());
        self.generation = 0;
    }

    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.grid = LifeGrid::random(self.grid.size(), seed, fill_rate);
        self.generation = 0;
    }

    /// Stamp a pattern anchored at the grid center.
    pub fn stamp(&mut self, pattern: Pattern) {
        let c = self.grid.size() / 2;
        self.stamp_at(pattern, c, c);
    }

    pub fn stamp_at(&mut self, pattern: Pattern, cx: usize, cy: usize) {
        self.grid = pattern.stamp(&self.grid, cx, cy);
    }
}
