use rand::{SeedableRng, rngs::StdRng};

mod dfs_bfs;
mod eller;
mod frontier;
mod kruskal;
mod multi_path;
mod prim;
mod wilson;

pub use dfs_bfs::randomized_dfs_bfs;
pub use eller::ellers;
pub use kruskal::randomized_kruskal;
pub use multi_path::add_multiple_paths;
pub use prim::randomized_prim;
pub use wilson::wilson;

use crate::{config::GeneratorOptions, error::MazeError, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    DfsBfs,
    Wilson,
    Kruskal,
    Prim,
    Eller,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::DfsBfs,
        Generator::Wilson,
        Generator::Kruskal,
        Generator::Prim,
        Generator::Eller,
    ];

    /// The short name accepted by [`std::str::FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Generator::DfsBfs => "dfs_bfs",
            Generator::Wilson => "wilson",
            Generator::Kruskal => "kruskal",
            Generator::Prim => "prim",
            Generator::Eller => "eller",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::DfsBfs => write!(f, "Randomized DFS/BFS Hybrid"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs_bfs" | "backtracking" => Ok(Generator::DfsBfs),
            "wilson" => Ok(Generator::Wilson),
            "kruskal" => Ok(Generator::Kruskal),
            "prim" => Ok(Generator::Prim),
            "eller" | "ellers" => Ok(Generator::Eller),
            _ => Err(MazeError::UnknownGenerator(s.to_string())),
        }
    }
}

/// Carves a spanning tree into `grid` with the selected algorithm.
///
/// Every generator first stands all walls back up, so any previous state is discarded.
pub fn generate_maze(
    grid: &mut Grid,
    generator: Generator,
    options: &GeneratorOptions,
    rng: &mut StdRng,
) {
    match generator {
        Generator::DfsBfs => randomized_dfs_bfs(grid, options.dfs_bfs_split, options.carve_end, rng),
        Generator::Wilson => wilson(grid, rng),
        Generator::Kruskal => randomized_kruskal(grid, rng),
        Generator::Prim => randomized_prim(grid, rng),
        Generator::Eller => ellers(
            grid,
            options.horizontal_merge_prob,
            options.vertical_merge_prob,
            rng,
        ),
    }
    tracing::debug!(
        "[generate] {} carved {} passages in a {}x{} grid",
        generator,
        grid.broken_wall_count(),
        grid.rows(),
        grid.cols()
    );
}
