use std::collections::VecDeque;

use rand::Rng;

use crate::{config::DequeEnd, maze::Grid};

/// Carves a maze by randomly mixing depth-first and breadth-first expansion.
///
/// Cells waiting to be expanded live in a deque. Each step looks at the `carve_end` of the
/// deque: if that cell has unvisited neighbours, one of them is carved into and pushed to the
/// back with probability `split` (front otherwise); if not, the cell is popped.
///
/// Random draws, in order: start row, start column, then for every carving step one neighbour
/// index followed by one Bernoulli(`split`) draw for the push end.
pub fn randomized_dfs_bfs<R: Rng + ?Sized>(
    grid: &mut Grid,
    split: f64,
    carve_end: DequeEnd,
    rng: &mut R,
) {
    if grid.is_empty() {
        return;
    }

    grid.fill_walls();

    let start = (
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    );
    let mut visited = vec![false; grid.len()];
    visited[grid.ravel_index(start)] = true;

    let mut to_visit = VecDeque::from([start]);
    loop {
        let current = match carve_end {
            DequeEnd::Back => to_visit.back(),
            DequeEnd::Front => to_visit.front(),
        };
        let Some(&cell) = current else {
            break;
        };

        let unvisited = grid
            .neighbors(cell)
            .filter(|&c| !visited[grid.ravel_index(c)])
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Nothing left to carve from here
            match carve_end {
                DequeEnd::Back => to_visit.pop_back(),
                DequeEnd::Front => to_visit.pop_front(),
            };
            continue;
        }

        let neighbor = unvisited[rng.random_range(0..unvisited.len())];
        visited[grid.ravel_index(neighbor)] = true;
        if rng.random_bool(split) {
            to_visit.push_back(neighbor);
        } else {
            to_visit.push_front(neighbor);
        }
        grid.break_wall(cell, neighbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pure_dfs_and_pure_bfs_span_the_grid() {
        for (split, end) in [
            (1.0, DequeEnd::Back),
            (0.0, DequeEnd::Back),
            (1.0, DequeEnd::Front),
            (0.0, DequeEnd::Front),
        ] {
            let mut grid = Grid::new(8, 11);
            randomized_dfs_bfs(&mut grid, split, end, &mut StdRng::seed_from_u64(1));
            assert_eq!(grid.broken_wall_count(), grid.len() - 1);
            assert_eq!(grid.reachable_count((7, 10)), grid.len());
        }
    }
}
