//! Known patterns with well-defined behaviour on the torus.

use std::collections::BTreeSet;

use torus_life::{patterns, Grid};

fn live(grid: &Grid) -> BTreeSet<(i32, i32)> {
    grid.live_cells().collect()
}

fn grid_with(width: i32, height: i32, name: &str, x: i32, y: i32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    patterns::find(name).unwrap().place(&mut grid, x, y);
    grid
}

// ============================================================================
// Spaceships
// ============================================================================

#[test]
fn glider_moves_one_diagonal_every_four_steps() {
    let mut grid = grid_with(10, 10, "Glider", 2, 2);
    let start = live(&grid);

    for _ in 0..4 {
        grid.step();
    }

    let expected: BTreeSet<_> = start.iter().map(|&(x, y)| ((x + 1) % 10, (y + 1) % 10)).collect();
    assert_eq!(live(&grid), expected);
}

#[test]
fn glider_crosses_the_seam_and_comes_home() {
    // 40 steps on a 10x10 torus = 10 diagonal moves = one full lap.
    let mut grid = grid_with(10, 10, "Glider", 7, 7);
    let start = live(&grid);
    for _ in 0..40 {
        grid.step();
    }
    assert_eq!(live(&grid), start);
}

// ============================================================================
// Still lifes and oscillators
// ============================================================================

#[test]
fn block_never_changes() {
    let mut grid = grid_with(4, 4, "Block", 1, 1);
    let start = live(&grid);
    let hash = grid.hash();
    for _ in 0..25 {
        grid.step();
        assert_eq!(live(&grid), start);
    }
    assert_eq!(grid.hash(), hash);
}

#[test]
fn blinker_has_period_two() {
    let mut grid = grid_with(8, 8, "Blinker", 2, 4);
    let start = live(&grid);
    let hash = grid.hash();

    grid.step();
    let vertical: BTreeSet<_> = [(3, 3), (3, 4), (3, 5)].into_iter().collect();
    assert_eq!(live(&grid), vertical);
    assert_ne!(grid.hash(), hash);

    grid.step();
    assert_eq!(live(&grid), start);
    assert_eq!(grid.hash(), hash);
}

#[test]
fn pulsar_has_period_three() {
    let mut grid = grid_with(20, 20, "Pulsar", 3, 3);
    let start = live(&grid);
    for _ in 0..3 {
        grid.step();
    }
    assert_eq!(live(&grid), start);
}

// ============================================================================
// Small tori
// ============================================================================

#[test]
fn one_by_one_counts_itself_as_all_neighbors() {
    let mut grid = Grid::new(1, 1).unwrap();
    assert_eq!(grid.count_neighbors(0, 0), 0);
    grid.set(0, 0, true);
    assert_eq!(grid.count_neighbors(0, 0), 8);
    assert_eq!(grid.count_neighbors(-5, 17), 8);
}

#[test]
fn three_by_three_sees_every_other_cell_once() {
    let mut grid = Grid::new(3, 3).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            grid.set(x, y, true);
        }
    }
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(grid.count_neighbors(x, y), 8);
        }
    }
    grid.step();
    assert!(grid.is_empty());
}

#[test]
fn two_wide_grid_double_counts_side_neighbors() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.set(1, 1, true);
    // x-1 and x+1 from column 0 both land on column 1.
    assert_eq!(grid.count_neighbors(0, 1), 2);
}

// ============================================================================
// Emptiness
// ============================================================================

#[test]
fn cleared_grid_is_empty_and_hashes_like_a_fresh_one() {
    let fresh = Grid::new(16, 9).unwrap();
    let mut grid = grid_with(16, 9, "R-pentomino", 4, 2);
    assert!(!grid.is_empty());
    grid.step();
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.hash(), fresh.hash());
}
