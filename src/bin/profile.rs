use std::time::Instant;

use mazecarve::{Generator, Maze, MazeConfig, Solver};

/// Times every generator and solver on the largest maze.
///
/// Usage: `profile [iterations]`, one iteration by default. Timings are logged at info level.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    for generator in Generator::ALL {
        for iter in 0..num_iters {
            let config = MazeConfig::new(u8::MAX, u8::MAX, generator).with_seed(iter as u64);
            let started = Instant::now();
            let mut maze = Maze::with_config(&config)?;
            tracing::info!(
                "[profile] {} generation #{} took {:?}",
                generator,
                iter,
                started.elapsed()
            );

            for solver in Solver::ALL {
                let started = Instant::now();
                maze.solve_corners(solver)?;
                tracing::info!(
                    "[profile] {} on {} maze #{} took {:?}",
                    solver,
                    generator,
                    iter,
                    started.elapsed()
                );
            }
        }
    }
    Ok(())
}
