use super::grid::Grid;

/// What a renderer should draw at one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Wall,
    /// Part of the displayed solution.
    Path,
    Empty,
}

/// Doubled-resolution projection of a [`Grid`]: `(2 * rows + 1) x (2 * cols + 1)` symbols.
///
/// Positions with two even indices are wall corners, positions with two odd indices are
/// cells, and mixed positions are the walls between two cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    symbols: Box<[Symbol]>,
    height: usize,
    width: usize,
}

impl Board {
    /// Projects the current walls and solution overlay of `grid`.
    ///
    /// # Panics
    /// If a wall is not symmetric between the two cells it separates, or a boundary wall
    /// has been broken.
    pub fn from_grid(grid: &Grid) -> Self {
        let (rows, cols) = (grid.rows() as usize, grid.cols() as usize);
        let height = rows * 2 + 1;
        let width = cols * 2 + 1;
        let mut symbols = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                let symbol = match (i % 2, j % 2) {
                    (0, 0) => Symbol::Wall,
                    (1, 1) => cell_symbol(grid[cell_coord(i / 2, j / 2)].visited),
                    // Horizontal wall between the cell above and the cell below
                    (0, _) => {
                        let col = j / 2;
                        let above = i.checked_sub(1).map(|r| cell_coord(r / 2, col));
                        let below = (i / 2 < rows).then(|| cell_coord(i / 2, col));
                        let above_wall = above.is_none_or(|c| grid[c].walls.down);
                        let below_wall = below.is_none_or(|c| grid[c].walls.up);
                        assert_eq!(
                            above_wall, below_wall,
                            "Horizontal wall at board position ({}, {}) is not symmetric",
                            i, j
                        );
                        edge_symbol(grid, above_wall, above.zip(below))
                    }
                    // Vertical wall between the cell on the left and the cell on the right
                    _ => {
                        let row = i / 2;
                        let left = j.checked_sub(1).map(|c| cell_coord(row, c / 2));
                        let right = (j / 2 < cols).then(|| cell_coord(row, j / 2));
                        let left_wall = left.is_none_or(|c| grid[c].walls.right);
                        let right_wall = right.is_none_or(|c| grid[c].walls.left);
                        assert_eq!(
                            left_wall, right_wall,
                            "Vertical wall at board position ({}, {}) is not symmetric",
                            i, j
                        );
                        edge_symbol(grid, left_wall, left.zip(right))
                    }
                };
                symbols.push(symbol);
            }
        }
        Board {
            symbols: symbols.into_boxed_slice(),
            height,
            width,
        }
    }

    /// Number of board rows, `2 * rows + 1`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of board columns, `2 * cols + 1`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.symbols.chunks(self.width)
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }
}

impl std::ops::Index<(usize, usize)> for Board {
    type Output = Symbol;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (i, j) = index;
        assert!(
            i < self.height && j < self.width,
            "Board position ({}, {}) is out of bounds",
            i,
            j
        );
        &self.symbols[i * self.width + j]
    }
}

fn cell_coord(row: usize, col: usize) -> (u8, u8) {
    (row as u8, col as u8)
}

fn cell_symbol(visited: bool) -> Symbol {
    if visited { Symbol::Path } else { Symbol::Empty }
}

/// An open wall is drawn as path only when the cells on both sides are on the solution.
fn edge_symbol(grid: &Grid, wall: bool, cells: Option<((u8, u8), (u8, u8))>) -> Symbol {
    match (wall, cells) {
        (true, _) | (false, None) => Symbol::Wall,
        (false, Some((a, b))) => cell_symbol(grid[a].visited && grid[b].visited),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walled_grid_projection() {
        let grid = Grid::new(2, 3);
        let board = Board::from_grid(&grid);
        assert_eq!(board.height(), 5);
        assert_eq!(board.width(), 7);
        assert_eq!(board.count(Symbol::Empty), 6);
        assert_eq!(board.count(Symbol::Path), 0);
        assert_eq!(board.count(Symbol::Wall), 35 - 6);
        assert_eq!(board[(1, 1)], Symbol::Empty);
        assert_eq!(board[(1, 2)], Symbol::Wall);
    }

    #[test]
    fn test_broken_walls_and_path() {
        let mut grid = Grid::new(2, 2);
        grid.break_wall((0, 0), (0, 1));
        grid.break_wall((0, 1), (1, 1));
        grid.set_visited((0, 0), true);
        grid.set_visited((0, 1), true);
        let board = Board::from_grid(&grid);
        // Between (0, 0) and (0, 1): both visited
        assert_eq!(board[(1, 2)], Symbol::Path);
        // Between (0, 1) and (1, 1): only one side visited
        assert_eq!(board[(2, 3)], Symbol::Empty);
        assert_eq!(board[(3, 3)], Symbol::Empty);
        assert_eq!(board[(1, 3)], Symbol::Path);
        // Still walled between (0, 0) and (1, 0)
        assert_eq!(board[(2, 1)], Symbol::Wall);
        assert_eq!(board.rows().count(), 5);
        assert!(board.rows().all(|row| row.len() == 5));
        // Corners and the outer frame are always walls
        assert!((0..5).all(|k| board[(0, k)] == Symbol::Wall && board[(4, k)] == Symbol::Wall));
        assert!((0..5).all(|k| board[(k, 0)] == Symbol::Wall && board[(k, 4)] == Symbol::Wall));
    }
}
