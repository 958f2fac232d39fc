use rand::Rng;

use super::frontier::RandomSet;
use crate::maze::{Coord, Grid};

/// Randomized Prim's algorithm.
///
/// The maze grows from one random cell. Cells bordering the maze form the frontier; a random
/// frontier cell is joined to a random neighbour already in the maze, and its own outside
/// neighbours join the frontier.
///
/// Random draws, in order: start row, start column, then per frontier cell one frontier index
/// followed by one in-maze neighbour index.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    if grid.is_empty() {
        return;
    }

    grid.fill_walls();

    let mut part_of_maze = vec![false; grid.len()];
    let start: Coord = (
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    );
    part_of_maze[grid.ravel_index(start)] = true;

    let mut frontiers = RandomSet::for_grid(grid);
    grid.neighbors(start).for_each(|coord| {
        frontiers.insert(coord);
    });

    while let Some(frontier) = frontiers.remove_random(rng) {
        // Neighbours of the frontier cell that are already carved into the maze
        let in_maze = grid
            .neighbors(frontier)
            .filter(|&c| part_of_maze[grid.ravel_index(c)])
            .collect::<Vec<_>>();
        let neighbor = in_maze[rng.random_range(0..in_maze.len())];
        grid.break_wall(frontier, neighbor);
        part_of_maze[grid.ravel_index(frontier)] = true;

        grid.neighbors(frontier)
            .filter(|&c| !part_of_maze[grid.ravel_index(c)])
            .for_each(|c| {
                frontiers.insert(c);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomized_prim() {
        let mut grid = Grid::new(7, 7);
        randomized_prim(&mut grid, &mut StdRng::seed_from_u64(0));
        assert!(grid.is_consistent());
        assert_eq!(grid.broken_wall_count(), 48);
        assert_eq!(grid.reachable_count((3, 3)), 49);
    }

    #[test]
    fn test_every_cell_is_carved_once() {
        // Every cell but the start is joined through exactly one broken wall when it leaves
        // the frontier, so no cell ends up fully walled in.
        let mut grid = Grid::new(5, 9);
        randomized_prim(&mut grid, &mut StdRng::seed_from_u64(17));
        assert!(grid.coords().all(|c| grid[c].walls.count() < 4));
    }
}
