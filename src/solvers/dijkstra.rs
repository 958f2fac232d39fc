use std::{cmp::Reverse, collections::BinaryHeap};

use super::mark_path;
use crate::maze::{Coord, Grid};

/// A cell waiting in the priority queue.
///
/// Ordered by estimated total cost, then by cost travelled so far, then by coordinate so
/// that equal-priority cells always pop in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct TrackedCell {
    /// Travelled cost plus estimated remaining cost
    pub priority: usize,
    /// Cost to reach this cell from the start
    pub traveling_cost: usize,
    /// Coordinates of the cell in the maze
    pub coord: Coord,
}

/// Best-first search with unit edge weights, shared by Dijkstra and A*.
///
/// `heuristic` estimates the remaining cost from a cell to the goal; a constant zero gives
/// Dijkstra's algorithm. Distances and predecessors only change on strict improvement.
pub(super) fn best_first<H>(grid: &mut Grid, start: Coord, goal: Coord, heuristic: H) -> bool
where
    H: Fn(Coord) -> usize,
{
    if grid.is_empty() {
        return false;
    }

    let mut costs = vec![usize::MAX; grid.len()];
    let mut predecessors: Vec<Option<Coord>> = vec![None; grid.len()];
    costs[grid.ravel_index(start)] = 0;

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq = BinaryHeap::from([Reverse(TrackedCell {
        priority: heuristic(start),
        traveling_cost: 0,
        coord: start,
    })]);

    while let Some(Reverse(current)) = pq.pop() {
        if current.coord == goal {
            break;
        }
        // Skip entries superseded by a cheaper route
        if current.traveling_cost > costs[grid.ravel_index(current.coord)] {
            continue;
        }

        let new_cost = current.traveling_cost + 1;
        for neighbor in grid.open_neighbors(current.coord) {
            let idx = grid.ravel_index(neighbor);
            if new_cost < costs[idx] {
                costs[idx] = new_cost;
                predecessors[idx] = Some(current.coord);
                pq.push(Reverse(TrackedCell {
                    priority: new_cost + heuristic(neighbor),
                    traveling_cost: new_cost,
                    coord: neighbor,
                }));
            }
        }
    }

    mark_path(grid, &predecessors, start, goal)
}

/// Dijkstra's algorithm with every passage costing one step.
pub fn solve_dijkstra(grid: &mut Grid, start: Coord, goal: Coord) -> bool {
    best_first(grid, start, goal, |_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_cell_ordering() {
        let cheap = TrackedCell {
            priority: 3,
            traveling_cost: 1,
            coord: (5, 5),
        };
        let tie_on_priority = TrackedCell {
            priority: 3,
            traveling_cost: 2,
            coord: (0, 0),
        };
        let expensive = TrackedCell {
            priority: 4,
            traveling_cost: 0,
            coord: (0, 0),
        };
        let mut pq = BinaryHeap::from([
            Reverse(expensive),
            Reverse(tie_on_priority),
            Reverse(cheap),
        ]);
        assert_eq!(pq.pop().map(|r| r.0), Some(cheap));
        assert_eq!(pq.pop().map(|r| r.0), Some(tie_on_priority));
        assert_eq!(pq.pop().map(|r| r.0), Some(expensive));
    }

    #[test]
    fn test_dijkstra_on_open_grid() {
        // With every inner wall broken the shortest path is a Manhattan path
        let mut grid = Grid::new(4, 6);
        for coord in grid.coords().collect::<Vec<_>>() {
            for neighbor in grid.neighbors(coord).collect::<Vec<_>>() {
                grid.break_wall(coord, neighbor);
            }
        }
        assert!(solve_dijkstra(&mut grid, (0, 0), (3, 5)));
        assert_eq!(grid.visited_count(), 3 + 5 + 1);
    }
}
