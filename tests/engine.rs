use lifegrid::{LifeGrid, Pattern, Universe};

const N: usize = 50;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn live_cells(grid: &LifeGrid) -> Vec<(usize, usize)> {
    let mut result = vec![];
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            if grid.get(x, y) {
                result.push((x, y));
            }
        }
    }
    result
}

#[test]
fn test_dimensions_are_stable() {
    let mut universe = Universe::new(N);
    universe.randomize(Some(SEED), FILL_RATE);
    universe.step();
    universe.toggle(0, 0);
    universe.stamp(Pattern::Pulsar);
    universe.stamp_at(Pattern::Glider, 0, N - 1);
    universe.clear();
    universe.step();
    assert_eq!(universe.size(), N);
    assert_eq!(universe.grid().cells().len(), N * N);
}

#[test]
fn test_neighbor_count() {
    let mut grid = LifeGrid::blank(3);
    for y in 0..3 {
        for x in 0..3 {
            grid.set(x, y, true);
        }
    }
    assert_eq!(grid.count_neighbors(1, 1), 8);
    // corner: only the 3 in-bounds neighbors are counted
    assert_eq!(grid.count_neighbors(0, 0), 3);
    assert_eq!(grid.count_neighbors(2, 0), 3);
    assert_eq!(grid.count_neighbors(1, 0), 5);
}

#[test]
fn test_block_is_still_life() {
    let mut grid = LifeGrid::blank(6);
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        grid.set(x, y, true);
    }
    assert_eq!(grid.next_generation(), grid);
}

#[test]
fn test_blinker_oscillates() {
    let mut grid = LifeGrid::blank(7);
    for x in 2..5 {
        grid.set(x, 3, true);
    }

    let step1 = grid.next_generation();
    assert_eq!(live_cells(&step1), vec![(3, 2), (3, 3), (3, 4)]);

    let step2 = step1.next_generation();
    assert_eq!(step2, grid);
}

#[test]
fn test_glider_translates() {
    let mut universe = Universe::new(N);
    universe.stamp(Pattern::Glider);
    let before = live_cells(universe.grid());
    assert_eq!(before.len(), 5);

    for _ in 0..4 {
        universe.step();
    }
    assert_eq!(universe.generation(), 4);

    let expected = before
        .iter()
        .map(|&(x, y)| (x + 1, y + 1))
        .collect::<Vec<_>>();
    assert_eq!(live_cells(universe.grid()), expected);
}

#[test]
fn test_step_is_deterministic() {
    let grid = LifeGrid::random(N, Some(SEED), FILL_RATE);
    assert_eq!(grid, LifeGrid::random(N, Some(SEED), FILL_RATE));
    assert_eq!(grid.next_generation(), grid.next_generation());
    // the input snapshot is untouched by stepping
    assert_eq!(grid, LifeGrid::random(N, Some(SEED), FILL_RATE));
}

#[test]
fn test_reset_semantics() {
    let mut universe = Universe::new(N);
    universe.randomize(Some(SEED), FILL_RATE);
    assert_eq!(universe.generation(), 0);

    universe.step();
    universe.step();
    assert_eq!(universe.generation(), 2);

    // toggling and stamping leave the counter alone
    universe.toggle(0, 0);
    universe.stamp(Pattern::Glider);
    assert_eq!(universe.generation(), 2);

    universe.clear();
    assert_eq!(universe.generation(), 0);
    assert_eq!(universe.grid().population(), 0);

    universe.step();
    assert_eq!(universe.generation(), 1);

    universe.randomize(Some(SEED), FILL_RATE);
    assert_eq!(universe.generation(), 0);
}

#[test]
fn test_stamp_clips_at_boundary() {
    let mut universe = Universe::new(N);
    universe.stamp_at(Pattern::Glider, 0, 0);

    // only the offsets landing inside [0, N) survive
    assert_eq!(live_cells(universe.grid()), vec![(1, 0), (0, 1), (1, 1)]);

    let in_bounds = Pattern::Pulsar
        .offsets()
        .iter()
        .filter(|&&(dx, dy)| dx >= 0 && dy >= 0)
        .count();
    let mut universe = Universe::new(N);
    universe.stamp_at(Pattern::Pulsar, 0, 0);
    assert_eq!(universe.grid().population(), in_bounds);
}

#[test]
fn test_stamp_overwrites_only_listed_cells() {
    let mut universe = Universe::new(N);
    universe.toggle(0, 0);
    universe.stamp(Pattern::Pulsar);

    // pulsar has 48 cells; the toggled corner is left untouched
    assert_eq!(universe.grid().population(), 49);
    assert!(universe.grid().get(0, 0));

    // stamping again is idempotent: cells are only ever set alive
    universe.stamp(Pattern::Pulsar);
    assert_eq!(universe.grid().population(), 49);
}

#[test]
fn test_pulsar_is_period_three() {
    let mut universe = Universe::new(N);
    universe.stamp(Pattern::Pulsar);
    let start = universe.grid().clone();

    universe.step();
    assert_ne!(*universe.grid(), start);
    universe.step();
    assert_ne!(*universe.grid(), start);
    universe.step();
    assert_eq!(*universe.grid(), start);
}

#[test]
fn test_toggle_flips_one_cell() {
    let grid = LifeGrid::random(N, Some(SEED), FILL_RATE);
    let toggled = grid.toggled(7, 11);
    for y in 0..N {
        for x in 0..N {
            if (x, y) == (7, 11) {
                assert_eq!(toggled.get(x, y), !grid.get(x, y));
            } else {
                assert_eq!(toggled.get(x, y), grid.get(x, y));
            }
        }
    }
}
