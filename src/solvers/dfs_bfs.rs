use std::collections::VecDeque;

use super::mark_path;
use crate::maze::{Coord, Grid};

/// Which end of the search deque is popped next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Pop the newest cell: depth-first.
    Dfs,
    /// Pop the oldest cell: breadth-first, yielding a shortest path.
    #[default]
    Bfs,
}

/// Searches through broken walls from `start` until `goal` is popped, then marks the path
/// found by following predecessors back from the goal.
pub fn solve_dfs_bfs(grid: &mut Grid, start: Coord, goal: Coord, mode: SearchMode) -> bool {
    if grid.is_empty() {
        return false;
    }

    let mut predecessors: Vec<Option<Coord>> = vec![None; grid.len()];
    let mut discovered = vec![false; grid.len()];
    discovered[grid.ravel_index(start)] = true;

    let mut to_visit = VecDeque::from([start]);
    loop {
        let next = match mode {
            SearchMode::Dfs => to_visit.pop_back(),
            SearchMode::Bfs => to_visit.pop_front(),
        };
        let Some(current) = next else {
            break;
        };
        if current == goal {
            break;
        }
        for neighbor in grid.open_neighbors(current) {
            let idx = grid.ravel_index(neighbor);
            if !discovered[idx] {
                discovered[idx] = true;
                predecessors[idx] = Some(current);
                to_visit.push_back(neighbor);
            }
        }
    }

    mark_path(grid, &predecessors, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 3x3 grid with a loop around the centre:
    /// the outer ring is open, the centre is reachable only from (1, 0).
    fn ring() -> Grid {
        let mut grid = Grid::new(3, 3);
        let ring = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)];
        for pair in ring.windows(2) {
            grid.break_wall(pair[0], pair[1]);
        }
        grid.break_wall((1, 0), (0, 0));
        grid.break_wall((1, 0), (1, 1));
        grid
    }

    #[test]
    fn test_bfs_finds_shortest_route_around_loop() {
        let mut grid = ring();
        assert!(solve_dfs_bfs(&mut grid, (0, 0), (2, 2), SearchMode::Bfs));
        assert_eq!(grid.visited_count(), 5);
    }

    #[test]
    fn test_dfs_finds_a_route() {
        let mut grid = ring();
        assert!(solve_dfs_bfs(&mut grid, (1, 1), (0, 2), SearchMode::Dfs));
        assert!(grid[(1, 1)].visited && grid[(1, 0)].visited && grid[(0, 2)].visited);
        assert!(grid.visited_count() >= 5);
    }
}
