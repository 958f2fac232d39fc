use crate::{
    error::{MazeError, Result},
    generators::Generator,
};

/// Which end of the carving deque the hybrid DFS/BFS generator expands from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DequeEnd {
    /// Expand the most recently pushed-back cell (depth-first flavour).
    #[default]
    Back,
    /// Expand the oldest cell at the front (breadth-first flavour).
    Front,
}

/// Tuning knobs for the generation algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Probability that the hybrid DFS/BFS generator pushes a new cell to the back of its deque.
    pub dfs_bfs_split: f64,
    /// The deque end the hybrid DFS/BFS generator inspects on every step.
    pub carve_end: DequeEnd,
    /// Probability that Eller's algorithm joins two horizontally adjacent sets.
    pub horizontal_merge_prob: f64,
    /// Probability that Eller's algorithm opens an extra downward passage.
    pub vertical_merge_prob: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            dfs_bfs_split: 0.5,
            carve_end: DequeEnd::Back,
            horizontal_merge_prob: 0.5,
            vertical_merge_prob: 0.5,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> Result<()> {
        [
            ("dfs_bfs_split", self.dfs_bfs_split),
            ("horizontal_merge_prob", self.horizontal_merge_prob),
            ("vertical_merge_prob", self.vertical_merge_prob),
        ]
        .into_iter()
        .try_for_each(|(name, value)| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(MazeError::InvalidProbability { name, value })
            }
        })
    }
}

/// Everything needed to build a [`crate::Maze`].
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: u8,
    pub cols: u8,
    pub generator: Generator,
    /// Break extra walls after generation to create alternate routes.
    pub allow_multiple_paths: bool,
    /// Number of extra-path attempts. Defaults to a tenth of the cell count.
    pub trials: Option<usize>,
    /// Seed for the maze's random source. Seeded from the OS when absent.
    pub seed: Option<u64>,
    pub options: GeneratorOptions,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            generator: Generator::DfsBfs,
            allow_multiple_paths: false,
            trials: None,
            seed: None,
            options: GeneratorOptions::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(rows: u8, cols: u8, generator: Generator) -> Self {
        Self {
            rows,
            cols,
            generator,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_multiple_paths(mut self, trials: Option<usize>) -> Self {
        self.allow_multiple_paths = true;
        self.trials = trials;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Extra-path attempts that will run: the override, or ⌊0.1·rows·cols⌋.
    pub fn effective_trials(&self) -> usize {
        self.trials.unwrap_or(self.cell_count() / 10)
    }

    /// Rejects configurations that can not produce a maze.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.allow_multiple_paths && self.effective_trials() > self.cell_count() {
            return Err(MazeError::TooManyTrials {
                trials: self.effective_trials(),
                cells: self.cell_count(),
            });
        }
        self.options.validate()
    }
}
