use super::dijkstra::best_first;
use crate::maze::{Coord, Grid};

/// Manhattan distance, an admissible and consistent heuristic on a unit-weight grid.
fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

/// A* search: Dijkstra ordered by travelled cost plus Manhattan distance to the goal.
pub fn solve_a_star(grid: &mut Grid, start: Coord, goal: Coord) -> bool {
    best_first(grid, start, goal, |coord| manhattan(coord, goal))
}
