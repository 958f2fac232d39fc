use crate::maze::{Coord, Grid};

/// Dead-end filling: prunes every branch that can not lie between `start` and `goal`.
///
/// Each dead end (a cell with a single passage, other than `start` and `goal`) is filled,
/// and filling continues along the corridor while the next cell has a single unfilled
/// passage left. A junction stops the fill until its other branches are filled too.
/// Whatever remains unfilled is marked as the solution.
///
/// Only correct when the maze has exactly one path between any two cells; on a maze with
/// loops the remaining cells include every cycle.
pub fn solve_dead_end_filling(grid: &mut Grid, start: Coord, goal: Coord) -> bool {
    if grid.is_empty() {
        return false;
    }

    let is_endpoint = |coord: Coord| coord == start || coord == goal;
    let mut dead_ends = grid
        .coords()
        .filter(|&c| grid[c].walls.count() == 3 && !is_endpoint(c))
        .collect::<Vec<_>>();

    let mut filled = vec![false; grid.len()];

    while let Some(dead_end) = dead_ends.pop() {
        let mut current = dead_end;
        let mut passages = unfilled_passages(grid, &filled, current);
        filled[grid.ravel_index(current)] = true;
        while let [next] = passages.as_slice() {
            filled[grid.ravel_index(current)] = true;
            current = *next;
            if is_endpoint(current) {
                break;
            }
            passages = unfilled_passages(grid, &filled, current);
        }
    }

    let mut goal_reached = false;
    for coord in grid.coords() {
        if !filled[grid.ravel_index(coord)] {
            grid.set_visited(coord, true);
            goal_reached |= coord == goal;
        }
    }
    goal_reached
}

/// Passages out of `coord` leading to cells that are not filled yet.
fn unfilled_passages(grid: &Grid, filled: &[bool], coord: Coord) -> Vec<Coord> {
    grid.open_neighbors(coord)
        .filter(|&c| !filled[grid.ravel_index(c)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A comb: a corridor along row 0 with a tooth hanging down from every column.
    fn comb(cols: u8) -> Grid {
        let mut grid = Grid::new(3, cols);
        for col in 0..cols {
            if col + 1 < cols {
                grid.break_wall((0, col), (0, col + 1));
            }
            grid.break_wall((0, col), (1, col));
            grid.break_wall((1, col), (2, col));
        }
        grid
    }

    #[test]
    fn test_fills_every_tooth() {
        let mut grid = comb(5);
        assert!(solve_dead_end_filling(&mut grid, (0, 0), (0, 4)));
        let marked = grid.coords().filter(|&c| grid[c].visited).collect::<Vec<_>>();
        assert_eq!(marked, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_keeps_route_into_a_tooth() {
        let mut grid = comb(4);
        assert!(solve_dead_end_filling(&mut grid, (2, 0), (2, 3)));
        let marked = grid.coords().filter(|&c| grid[c].visited).collect::<Vec<_>>();
        assert_eq!(
            marked,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 0),
                (1, 3),
                (2, 0),
                (2, 3)
            ]
        );
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1);
        assert!(solve_dead_end_filling(&mut grid, (0, 0), (0, 0)));
        assert_eq!(grid.visited_count(), 1);
    }
}
