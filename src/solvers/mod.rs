mod a_star;
mod dead_end;
mod dfs_bfs;
mod dijkstra;

pub use a_star::solve_a_star;
pub use dead_end::solve_dead_end_filling;
pub use dfs_bfs::{SearchMode, solve_dfs_bfs};
pub use dijkstra::solve_dijkstra;

use crate::{
    error::MazeError,
    maze::{Coord, Grid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
    DeadEndFilling,
}

impl Solver {
    pub const ALL: [Solver; 5] = [
        Solver::Dfs,
        Solver::Bfs,
        Solver::Dijkstra,
        Solver::AStar,
        Solver::DeadEndFilling,
    ];

    /// The short name accepted by [`std::str::FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Dfs => "dfs",
            Solver::Bfs => "bfs",
            Solver::Dijkstra => "dijkstra",
            Solver::AStar => "a_star",
            Solver::DeadEndFilling => "dead_end_filling",
        }
    }

    /// Whether the solver is only correct on mazes with a single path between cells.
    pub fn requires_perfect_maze(&self) -> bool {
        matches!(self, Solver::DeadEndFilling)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::DeadEndFilling => write!(f, "Dead-End Filling"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Solver::Dfs),
            "bfs" | "dfs_bfs" => Ok(Solver::Bfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "a_star" | "astar" => Ok(Solver::AStar),
            "dead_end_filling" => Ok(Solver::DeadEndFilling),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

/// Marks a path from `start` to `goal` on the solution overlay.
///
/// The overlay is cleared first, so at most one solution is ever displayed.
/// Both coordinates must be in bounds. Returns whether the goal was reached.
pub fn solve_maze(grid: &mut Grid, solver: Solver, start: Coord, goal: Coord) -> bool {
    grid.clear_visited();
    let goal_reached = match solver {
        Solver::Dfs => solve_dfs_bfs(grid, start, goal, SearchMode::Dfs),
        Solver::Bfs => solve_dfs_bfs(grid, start, goal, SearchMode::Bfs),
        Solver::Dijkstra => solve_dijkstra(grid, start, goal),
        Solver::AStar => solve_a_star(grid, start, goal),
        Solver::DeadEndFilling => solve_dead_end_filling(grid, start, goal),
    };
    tracing::debug!(
        "[solve] {} from {:?} to {:?}: goal reached = {}, {} cells marked",
        solver,
        start,
        goal,
        goal_reached,
        grid.visited_count()
    );
    goal_reached
}

/// Walks the predecessor chain back from `goal` and marks every cell on it, `start` included.
///
/// `predecessors` is indexed like the grid's cells. Returns `false`, marking nothing, if
/// the goal was never reached.
fn mark_path(grid: &mut Grid, predecessors: &[Option<Coord>], start: Coord, goal: Coord) -> bool {
    if goal != start && predecessors[grid.ravel_index(goal)].is_none() {
        return false;
    }
    let mut current = goal;
    grid.set_visited(current, true);
    while current != start {
        let Some(parent) = predecessors[grid.ravel_index(current)] else {
            unreachable!("Predecessor chain from {:?} is broken", goal);
        };
        current = parent;
        grid.set_visited(current, true);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GeneratorOptions,
        generators::{Generator, add_multiple_paths, generate_maze, get_rng},
    };

    fn generated(generator: Generator, rows: u8, cols: u8, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols);
        generate_maze(
            &mut grid,
            generator,
            &GeneratorOptions::default(),
            &mut get_rng(Some(seed)),
        );
        grid
    }

    fn solved_cells(grid: &Grid) -> Vec<Coord> {
        grid.coords().filter(|&c| grid[c].visited).collect()
    }

    #[test]
    fn test_all_solvers_agree_on_perfect_mazes() {
        for generator in Generator::ALL {
            for seed in 0..4 {
                let mut grid = generated(generator, 11, 17, seed);
                let goal = (10, 16);
                assert!(solve_maze(&mut grid, Solver::Bfs, (0, 0), goal));
                let expected = solved_cells(&grid);
                for solver in Solver::ALL {
                    assert!(solve_maze(&mut grid, solver, (0, 0), goal));
                    assert_eq!(
                        solved_cells(&grid),
                        expected,
                        "{} disagrees on a {} maze",
                        solver,
                        generator
                    );
                }
            }
        }
    }

    #[test]
    fn test_shortest_path_lengths_agree_with_multiple_paths() {
        for generator in Generator::ALL {
            for seed in 0..4 {
                let mut grid = generated(generator, 14, 9, seed);
                add_multiple_paths(&mut grid, Some(40), &mut get_rng(Some(seed + 100))).unwrap();
                let lengths = [Solver::Bfs, Solver::Dijkstra, Solver::AStar].map(|solver| {
                    assert!(solve_maze(&mut grid, solver, (0, 0), (13, 8)));
                    grid.visited_count()
                });
                assert_eq!(lengths[0], lengths[1]);
                assert_eq!(lengths[1], lengths[2]);
                // A DFS path is a simple path, so never shorter than the shortest one
                assert!(solve_maze(&mut grid, Solver::Dfs, (0, 0), (13, 8)));
                assert!(grid.visited_count() >= lengths[0]);
            }
        }
    }

    #[test]
    fn test_solving_marks_entry_and_exit() {
        let mut grid = generated(Generator::Wilson, 6, 6, 1);
        for solver in Solver::ALL {
            assert!(solve_maze(&mut grid, solver, (2, 3), (5, 0)));
            assert!(grid[(2, 3)].visited);
            assert!(grid[(5, 0)].visited);
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let mut grid = generated(Generator::Prim, 4, 4, 2);
        for solver in Solver::ALL {
            assert!(solve_maze(&mut grid, solver, (1, 1), (1, 1)));
            assert_eq!(solved_cells(&grid), vec![(1, 1)]);
        }
    }

    #[test]
    fn test_unreachable_goal_marks_nothing() {
        // A fully walled grid has no passages at all
        let mut grid = Grid::new(3, 3);
        for solver in [Solver::Dfs, Solver::Bfs, Solver::Dijkstra, Solver::AStar] {
            assert!(!solve_maze(&mut grid, solver, (0, 0), (2, 2)));
            assert_eq!(grid.visited_count(), 0);
        }
    }

    #[test]
    fn test_solver_names_parse() {
        for solver in Solver::ALL {
            assert_eq!(solver.name().parse::<Solver>(), Ok(solver));
        }
        assert_eq!("dfs_bfs".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!(
            "wall_follower".parse::<Solver>(),
            Err(MazeError::UnknownSolver("wall_follower".to_string()))
        );
    }
}
