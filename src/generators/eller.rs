use std::collections::HashMap;

use rand::{Rng, seq::SliceRandom};

use crate::{
    maze::{Coord, Grid},
    union_find::UnionFind,
};

/// Eller's algorithm, carving one row at a time.
///
/// On every row but the last, adjacent cells in different sets are joined with probability
/// `horizontal_merge_prob`. Each set present in the row then opens downwards through at
/// least one random member, and through every other member with probability
/// `vertical_merge_prob`. The last row joins every adjacent pair still in different sets,
/// which connects the whole maze.
///
/// Random draws, per row except the last: one Bernoulli(`horizontal_merge_prob`) for each
/// adjacent pair in different sets, left to right; then for each set in order of first
/// appearance, one shuffle of its members followed by one Bernoulli(`vertical_merge_prob`)
/// for every member but the last after shuffling, which always opens down. The last row
/// draws nothing.
pub fn ellers<R: Rng + ?Sized>(
    grid: &mut Grid,
    horizontal_merge_prob: f64,
    vertical_merge_prob: f64,
    rng: &mut R,
) {
    if grid.is_empty() {
        return;
    }

    grid.fill_walls();

    let rows = grid.rows();
    let cols = grid.cols();
    let mut uf: UnionFind<Coord> = UnionFind::with_capacity(grid.len());

    for row in 0..rows - 1 {
        // Sets present in this row, keyed by representative, in order of first appearance
        let mut group_slots: HashMap<Coord, usize> = HashMap::new();
        let mut groups: Vec<Vec<Coord>> = Vec::new();

        for col in 0..cols {
            let cell = (row, col);
            if col + 1 < cols {
                let next = (row, col + 1);
                if !uf.connected(cell, next) && rng.random_bool(horizontal_merge_prob) {
                    uf.union(cell, next);
                    grid.break_wall(cell, next);
                }
            }
            let root = uf.find(cell);
            let slot = *group_slots.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(cell);
        }

        for mut group in groups {
            group.shuffle(rng);
            let Some(anchor) = group.pop() else {
                continue;
            };
            // At least one cell per set must open downwards
            open_down(grid, &mut uf, anchor);
            for cell in group {
                if rng.random_bool(vertical_merge_prob) {
                    open_down(grid, &mut uf, cell);
                }
            }
        }
    }

    let last = rows - 1;
    for col in 0..cols - 1 {
        let (cell, next) = ((last, col), (last, col + 1));
        if uf.union(cell, next) {
            grid.break_wall(cell, next);
        }
    }
}

fn open_down(grid: &mut Grid, uf: &mut UnionFind<Coord>, cell: Coord) {
    let below = (cell.0 + 1, cell.1);
    uf.union(cell, below);
    grid.break_wall(cell, below);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_ellers_spanning_tree() {
        for seed in 0..10 {
            let mut grid = Grid::new(10, 12);
            ellers(&mut grid, 0.5, 0.5, &mut StdRng::seed_from_u64(seed));
            assert!(grid.is_consistent());
            assert_eq!(grid.broken_wall_count(), 119);
            assert_eq!(grid.reachable_count((9, 11)), 120);
        }
    }

    #[test]
    fn test_ellers_extreme_probabilities() {
        // Never merging horizontally leaves every column as its own set until the last row
        let mut grid = Grid::new(4, 5);
        ellers(&mut grid, 0.0, 0.0, &mut StdRng::seed_from_u64(1));
        assert!((0..3).all(|row| (0..4).all(|col| grid.has_wall((row, col), (row, col + 1)))));
        assert!((0..4).all(|col| !grid.has_wall((3, col), (3, col + 1))));
        assert_eq!(grid.reachable_count((0, 0)), 20);

        // Always merging horizontally turns each row into a corridor with one way down
        let mut grid = Grid::new(4, 5);
        ellers(&mut grid, 1.0, 0.0, &mut StdRng::seed_from_u64(1));
        for row in 0..3 {
            let downs = (0..5)
                .filter(|&col| !grid.has_wall((row, col), (row + 1, col)))
                .count();
            assert_eq!(downs, 1);
        }
        assert_eq!(grid.broken_wall_count(), 19);
    }
}
