use std::collections::VecDeque;

use super::cell::{Cell, Coord, Direction};

/// An M×N array of cells with symmetric walls between neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u8,
    cols: u8,
}

impl Grid {
    /// Creates a grid where every wall is standing and no cell is visited.
    pub fn new(rows: u8, cols: u8) -> Self {
        let cells = vec![Cell::default(); rows as usize * cols as usize].into_boxed_slice();
        Grid { cells, rows, cols }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    pub(crate) fn unravel_index(&self, index: usize) -> Coord {
        let cols = self.cols as usize;
        ((index / cols) as u8, (index % cols) as u8)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Stands every wall back up and clears the solution overlay.
    pub fn fill_walls(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::default());
    }

    /// Clears the solution overlay, keeping the walls.
    pub fn clear_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    pub fn set_visited(&mut self, coord: Coord, visited: bool) {
        let idx = self.ravel_index(coord);
        self.cells[idx].visited = visited;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    fn assert_adjacent(&self, from: Coord, to: Coord) {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            panic!("Coordinates {:?} and {:?} must both be in bounds", from, to);
        }
        if from.0.abs_diff(to.0) + from.1.abs_diff(to.1) != 1 {
            panic!("Cells {:?} and {:?} are not adjacent", from, to);
        }
    }

    /// Removes the wall between two adjacent cells, on both sides.
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If the cells are not adjacent
    pub fn break_wall(&mut self, from: Coord, to: Coord) {
        self.assert_adjacent(from, to);
        let direction = Direction::between(from, to);
        let (from_idx, to_idx) = (self.ravel_index(from), self.ravel_index(to));
        self.cells[from_idx].walls.set(direction, false);
        self.cells[to_idx].walls.set(direction.opposite(), false);
    }

    /// Checks whether a wall stands between two adjacent cells.
    ///
    /// # Panics
    /// * If the cells are not adjacent
    /// * If the two sides of the wall disagree, which means the grid is corrupt
    pub fn has_wall(&self, from: Coord, to: Coord) -> bool {
        self.assert_adjacent(from, to);
        let direction = Direction::between(from, to);
        let near = self[from].walls.get(direction);
        let far = self[to].walls.get(direction.opposite());
        assert_eq!(
            near, far,
            "Wall between {:?} and {:?} is not symmetric",
            from, to
        );
        near
    }

    /// In-bounds cells one step away, in the order down, up, right, left.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        let neighbors: Vec<Coord> = if self.is_in_bounds(coord) {
            let (row, col) = coord;
            vec![
                // NOTE: Underflow wraps to u8::MAX and overflow saturates to u8::MAX, both of
                // which are filtered out below since the largest dimension is u8::MAX.
                (row.saturating_add(1), col),
                (row.wrapping_sub(1), col),
                (row, col.saturating_add(1)),
                (row, col.wrapping_sub(1)),
            ]
        } else {
            vec![]
        };
        neighbors
            .into_iter()
            .filter(move |&(row, col)| row < rows && col < cols)
    }

    /// Neighbours reachable from `coord` without crossing a wall.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .filter(move |&neighbor| !self.has_wall(coord, neighbor))
    }

    /// Neighbours still separated from `coord` by a wall.
    pub fn walled_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .filter(move |&neighbor| self.has_wall(coord, neighbor))
    }

    /// Number of inner walls that have been broken.
    pub fn broken_wall_count(&self) -> usize {
        self.coords()
            .map(|(row, col)| {
                let walls = self[(row, col)].walls;
                let down = row + 1 < self.rows && !walls.down;
                let right = col + 1 < self.cols && !walls.right;
                down as usize + right as usize
            })
            .sum()
    }

    /// Number of cells reachable from `start` through broken walls, `start` included.
    pub fn reachable_count(&self, start: Coord) -> usize {
        if !self.is_in_bounds(start) {
            return 0;
        }
        let mut seen = vec![false; self.len()];
        seen[self.ravel_index(start)] = true;
        let mut queue = VecDeque::from([start]);
        let mut count = 0;
        while let Some(current) = queue.pop_front() {
            count += 1;
            for neighbor in self.open_neighbors(current) {
                let idx = self.ravel_index(neighbor);
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        count
    }

    /// Checks that every shared wall agrees on both sides and that the outer boundary is closed.
    pub fn is_consistent(&self) -> bool {
        self.coords().all(|(row, col)| {
            let walls = self[(row, col)].walls;
            let down_ok = if row + 1 < self.rows {
                walls.down == self[(row + 1, col)].walls.up
            } else {
                walls.down
            };
            let right_ok = if col + 1 < self.cols {
                walls.right == self[(row, col + 1)].walls.left
            } else {
                walls.right
            };
            let outer_ok = (row > 0 || walls.up) && (col > 0 || walls.left);
            down_ok && right_ok && outer_ok
        })
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_walled() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.coords().all(|c| grid[c].walls.count() == 4));
        assert_eq!(grid.broken_wall_count(), 0);
        assert_eq!(grid.reachable_count((0, 0)), 1);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_break_wall_is_symmetric() {
        let mut grid = Grid::new(3, 3);
        grid.break_wall((1, 1), (2, 1));
        assert!(!grid[(1, 1)].walls.down);
        assert!(!grid[(2, 1)].walls.up);
        grid.break_wall((1, 1), (1, 0));
        assert!(!grid[(1, 1)].walls.left);
        assert!(!grid[(1, 0)].walls.right);
        assert!(!grid.has_wall((2, 1), (1, 1)));
        assert!(!grid.has_wall((1, 0), (1, 1)));
        assert!(grid.has_wall((1, 1), (0, 1)));
        assert!(grid.is_consistent());
        assert_eq!(grid.broken_wall_count(), 2);
        assert_eq!(grid.reachable_count((2, 1)), 3);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_break_wall_rejects_non_adjacent() {
        let mut grid = Grid::new(3, 3);
        grid.break_wall((0, 0), (1, 1));
    }

    #[test]
    fn test_neighbors() {
        let grid = Grid::new(3, 3);
        let center = grid.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(center, vec![(2, 1), (0, 1), (1, 2), (1, 0)]);
        let corner = grid.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        assert_eq!(grid.neighbors((3, 3)).count(), 0);
    }

    #[test]
    fn test_neighbors_at_max_dimension() {
        let grid = Grid::new(u8::MAX, 1);
        let last = grid.neighbors((u8::MAX - 1, 0)).collect::<Vec<_>>();
        assert_eq!(last, vec![(u8::MAX - 2, 0)]);
    }

    #[test]
    fn test_ravel_roundtrip() {
        let grid = Grid::new(4, 7);
        for coord in grid.coords() {
            assert_eq!(grid.unravel_index(grid.ravel_index(coord)), coord);
        }
    }

    #[test]
    fn test_fill_walls_resets_cells() {
        let mut grid = Grid::new(2, 2);
        grid.break_wall((0, 0), (0, 1));
        grid.set_visited((0, 0), true);
        assert_eq!(grid.visited_count(), 1);
        grid.fill_walls();
        assert_eq!(grid, Grid::new(2, 2));
    }
}
