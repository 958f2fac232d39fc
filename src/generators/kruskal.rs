use rand::{Rng, seq::SliceRandom};

use crate::{
    maze::{Coord, Grid},
    union_find::UnionFind,
};

/// Wall edge between two adjacent cells
#[derive(Debug, Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Randomized Kruskal's algorithm.
///
/// Every inner wall is visited once in a random order and broken only if the cells on either
/// side are not yet connected, so no loop is ever closed.
///
/// Random draws: a single shuffle of the edge list, which lists for each cell in row-major
/// order its down edge then its right edge.
pub fn randomized_kruskal<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    if grid.is_empty() {
        return;
    }

    let rows = grid.rows();
    let cols = grid.cols();

    grid.fill_walls();

    let mut uf = UnionFind::with_capacity(grid.len());

    // Collect all possible edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = grid
        .coords()
        .flat_map(|(row, col)| {
            [
                (row + 1 < rows).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row + 1, col),
                }),
                (col + 1 < cols).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row, col + 1),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    for edge in edges {
        // Only break the wall if the cells are not connected yet
        if uf.union(edge.cell1, edge.cell2) {
            grid.break_wall(edge.cell1, edge.cell2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_kruskal_spanning_tree() {
        let mut grid = Grid::new(9, 14);
        randomized_kruskal(&mut grid, &mut StdRng::seed_from_u64(5));
        assert!(grid.is_consistent());
        assert_eq!(grid.broken_wall_count(), 9 * 14 - 1);
        assert_eq!(grid.reachable_count((0, 13)), 9 * 14);
    }

    #[test]
    fn test_kruskal_3x3_is_deterministic_for_a_seed() {
        let mut first = Grid::new(3, 3);
        let mut second = Grid::new(3, 3);
        randomized_kruskal(&mut first, &mut StdRng::seed_from_u64(2024));
        randomized_kruskal(&mut second, &mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
        assert_eq!(first.broken_wall_count(), 8);
    }
}
