use rand::Rng;

use crate::maze::Grid;

/// Wilson's algorithm: a uniform spanning tree built from loop-erased random walks.
///
/// One random cell seeds the maze. Then, repeatedly, a walk starts from the first cell (in
/// row-major order) not yet in the maze and wanders randomly until it hits the maze. Each
/// cell on the walk remembers only the direction it was last left in, so revisiting a cell
/// erases the loop made since. Replaying those successors from the walk start carves a
/// loop-free branch into the maze.
///
/// Random draws, in order: start row, start column, then one neighbour index per walk step.
pub fn wilson<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    if grid.is_empty() {
        return;
    }

    grid.fill_walls();

    let mut in_maze = vec![false; grid.len()];
    let start = (
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    );
    in_maze[grid.ravel_index(start)] = true;

    // Successor of each cell on the current walk. Entries left over from earlier walks are
    // never followed: replay only reaches cells the current walk has left.
    let mut successor = vec![None; grid.len()];
    // Cells only ever join the maze, so the first cell outside it never moves backwards
    let mut cursor = 0;

    while let Some(offset) = in_maze[cursor..].iter().position(|&joined| !joined) {
        cursor += offset;
        let walk_start = grid.unravel_index(cursor);

        let mut current = walk_start;
        while !in_maze[grid.ravel_index(current)] {
            let neighbors = grid.neighbors(current).collect::<Vec<_>>();
            let next = neighbors[rng.random_range(0..neighbors.len())];
            successor[grid.ravel_index(current)] = Some(next);
            current = next;
        }

        let mut current = walk_start;
        while !in_maze[grid.ravel_index(current)] {
            let idx = grid.ravel_index(current);
            in_maze[idx] = true;
            let Some(next) = successor[idx] else {
                unreachable!("Every cell on the walk has a successor");
            };
            grid.break_wall(current, next);
            current = next;
        }
    }
}
