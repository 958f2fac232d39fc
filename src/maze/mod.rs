mod board;
pub mod cell;
mod grid;

use rand::rngs::StdRng;

pub use board::{Board, Symbol};
pub use cell::{Cell, Coord, Direction, Walls};
pub use grid::Grid;

use crate::{
    config::MazeConfig,
    error::{MazeError, Result},
    generators::{Generator, add_multiple_paths, generate_maze, get_rng},
    solvers::{Solver, solve_maze},
};

/// A generated maze together with its random source and solution overlay.
pub struct Maze {
    grid: Grid,
    generator: Generator,
    /// Whether extra walls were broken after generation, so cells may be joined by several paths
    has_multiple_paths: bool,
    rng: StdRng,
}

impl Maze {
    /// Generates a `rows` x `cols` maze with default options and an OS-seeded random source.
    pub fn new(
        rows: u8,
        cols: u8,
        generator: Generator,
        allow_multiple_paths: bool,
    ) -> Result<Self> {
        let config = MazeConfig {
            allow_multiple_paths,
            ..MazeConfig::new(rows, cols, generator)
        };
        Maze::with_config(&config)
    }

    /// Generates a maze as described by `config`.
    ///
    /// The random source is used by the generator first and by the extra-path pass after.
    pub fn with_config(config: &MazeConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.rows, config.cols);
        let mut rng = get_rng(config.seed);
        generate_maze(&mut grid, config.generator, &config.options, &mut rng);

        let has_multiple_paths = if config.allow_multiple_paths {
            add_multiple_paths(&mut grid, config.trials, &mut rng)? > 0
        } else {
            false
        };

        tracing::info!(
            "[maze] generated {}x{} maze with {} (multiple paths: {})",
            config.rows,
            config.cols,
            config.generator,
            has_multiple_paths
        );

        Ok(Maze {
            grid,
            generator: config.generator,
            has_multiple_paths,
            rng,
        })
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn has_multiple_paths(&self) -> bool {
        self.has_multiple_paths
    }

    /// Top-left cell, the default entry.
    pub fn entry(&self) -> Coord {
        (0, 0)
    }

    /// Bottom-right cell, the default exit.
    pub fn exit(&self) -> Coord {
        (self.rows() - 1, self.cols() - 1)
    }

    fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.grid.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: coord.0,
                col: coord.1,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Whether a wall separates two adjacent cells. For front ends validating moves.
    ///
    /// # Panics
    /// If the cells are in bounds but not adjacent.
    pub fn has_wall(&self, from: Coord, to: Coord) -> Result<bool> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        Ok(self.grid.has_wall(from, to))
    }

    /// Replaces the displayed solution with a path from `entry` to `exit`.
    ///
    /// Returns whether the exit was reached. Dead-end filling is refused on mazes with
    /// multiple paths, where what it leaves behind is not a path.
    pub fn solve(&mut self, solver: Solver, entry: Coord, exit: Coord) -> Result<bool> {
        self.check_bounds(entry)?;
        self.check_bounds(exit)?;
        if solver.requires_perfect_maze() && self.has_multiple_paths {
            return Err(MazeError::CyclicMaze);
        }
        Ok(solve_maze(&mut self.grid, solver, entry, exit))
    }

    /// Solves from the top-left cell to the bottom-right cell.
    pub fn solve_corners(&mut self, solver: Solver) -> Result<bool> {
        self.solve(solver, self.entry(), self.exit())
    }

    /// Clears the displayed solution. Does nothing if none is displayed.
    pub fn unsolve(&mut self) {
        self.grid.clear_visited();
    }

    /// Breaks `trials` more random walls using the maze's random source.
    ///
    /// Returns the number of walls broken.
    pub fn add_multiple_paths(&mut self, trials: Option<usize>) -> Result<usize> {
        let broken = add_multiple_paths(&mut self.grid, trials, &mut self.rng)?;
        self.has_multiple_paths |= broken > 0;
        Ok(broken)
    }

    /// The printable projection of the current walls and solution.
    pub fn board(&self) -> Board {
        Board::from_grid(&self.grid)
    }
}
