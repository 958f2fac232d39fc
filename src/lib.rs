pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod union_find;

pub use config::{DequeEnd, GeneratorOptions, MazeConfig};
pub use error::{MazeError, Result};
pub use generators::Generator;
pub use maze::{Board, Coord, Grid, Maze, Symbol};
pub use solvers::Solver;
pub use union_find::UnionFind;

/// Generates a maze with default options; see [`Maze::new`].
pub fn new_maze(
    rows: u8,
    cols: u8,
    generator: Generator,
    allow_multiple_paths: bool,
) -> Result<Maze> {
    Maze::new(rows, cols, generator, allow_multiple_paths)
}
