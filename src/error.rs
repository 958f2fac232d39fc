use thiserror::Error;

/// Errors reported to callers for invalid maze configuration or requests.
///
/// Corrupted internal state (asymmetric walls) is not represented here: it panics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("invalid maze dimensions {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimensions { rows: u8, cols: u8 },

    #[error("unknown maze generation algorithm `{0}`")]
    UnknownGenerator(String),

    #[error("unknown maze solving algorithm `{0}`")]
    UnknownSolver(String),

    /// A coordinate given by the caller lies outside the maze.
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} maze")]
    OutOfBounds { row: u8, col: u8, rows: u8, cols: u8 },

    /// More augmentation trials were requested than the maze has cells.
    #[error("{trials} extra-path trials exceed the {cells} cells of the maze")]
    TooManyTrials { trials: usize, cells: usize },

    #[error("probability `{name}` must lie within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Dead-end filling only yields the solution on a maze without extra paths.
    #[error("dead-end filling cannot solve a maze with multiple paths")]
    CyclicMaze,
}

pub type Result<T> = std::result::Result<T, MazeError>;
