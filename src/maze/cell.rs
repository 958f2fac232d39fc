use std::fmt;

/// A cell coordinate as `(row, col)`.
pub type Coord = (u8, u8);

/// The four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The side of the neighbour that faces back towards us.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Infers the direction of `to` as seen from `from`.
    ///
    /// Rows are compared first: down if `to` is in a later row, up if in an earlier one,
    /// otherwise right if `to` is in a later column and left in every other case.
    /// Only meaningful for adjacent coordinates.
    pub fn between(from: Coord, to: Coord) -> Direction {
        if to.0 > from.0 {
            Direction::Down
        } else if to.0 < from.0 {
            Direction::Up
        } else if to.1 > from.1 {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Wall flags of a single cell. `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Walls {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }
}

impl Walls {
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, standing: bool) {
        match direction {
            Direction::Up => self.up = standing,
            Direction::Down => self.down = standing,
            Direction::Left => self.left = standing,
            Direction::Right => self.right = standing,
        }
    }

    /// Number of walls still standing around the cell.
    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .into_iter()
            .filter(|&w| w)
            .count()
    }
}

/// A maze cell: four walls plus the flag marking it as part of the displayed solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}

impl fmt::Display for Cell {
    /// Prints the wall flags as `up down left right` bits, e.g. `1101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &self.walls;
        write!(
            f,
            "{}{}{}{}",
            w.up as u8, w.down as u8, w.left as u8, w.right as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Direction::Down);
        assert_eq!(Direction::between((1, 1), (0, 1)), Direction::Up);
        assert_eq!(Direction::between((1, 1), (1, 2)), Direction::Right);
        assert_eq!(Direction::between((1, 1), (1, 0)), Direction::Left);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_walls() {
        let mut cell = Cell::default();
        assert_eq!(cell.walls.count(), 4);
        assert!(!cell.visited);
        cell.walls.set(Direction::Left, false);
        assert!(!cell.walls.get(Direction::Left));
        assert_eq!(cell.walls.count(), 3);
        assert_eq!(cell.to_string(), "1101");
    }
}
