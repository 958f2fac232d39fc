use rand::Rng;

use crate::{
    error::{MazeError, Result},
    maze::Grid,
};

/// Breaks extra walls to add alternate routes to a generated maze.
///
/// Runs `trials` attempts (⌊0.1·rows·cols⌋ when `None`). Each attempt picks a random cell
/// and, if it still has walls towards some neighbours, breaks one of them at random. An
/// attempt on a cell without inner walls left is spent without effect.
///
/// Random draws per attempt: cell row, cell column, then one neighbour index if any walled
/// neighbour exists.
///
/// Returns the number of walls actually broken.
pub fn add_multiple_paths<R: Rng + ?Sized>(
    grid: &mut Grid,
    trials: Option<usize>,
    rng: &mut R,
) -> Result<usize> {
    let cells = grid.len();
    let trials = trials.unwrap_or(cells / 10);
    if trials > cells {
        return Err(MazeError::TooManyTrials { trials, cells });
    }
    if grid.is_empty() {
        return Ok(0);
    }

    let mut broken = 0;
    for _ in 0..trials {
        let cell = (
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        let walled = grid.walled_neighbors(cell).collect::<Vec<_>>();
        if walled.is_empty() {
            continue;
        }
        let neighbor = walled[rng.random_range(0..walled.len())];
        grid.break_wall(cell, neighbor);
        broken += 1;
    }

    tracing::debug!(
        "[generate] {} of {} extra-path trials broke a wall",
        broken,
        trials
    );
    Ok(broken)
}
