use rand::Rng;

use crate::maze::{Coord, Grid};

/// A set of cells supporting O(1) insert, membership and uniform random removal.
///
/// Members live in a vector; a dense position table indexed by cell maps each member to its
/// slot so removal can swap the last member into the hole.
pub struct RandomSet {
    members: Vec<Coord>,
    positions: Vec<Option<usize>>,
    cols: usize,
}

impl RandomSet {
    pub fn for_grid(grid: &Grid) -> Self {
        RandomSet {
            members: Vec::new(),
            positions: vec![None; grid.len()],
            cols: grid.cols() as usize,
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols + coord.1 as usize
    }

    #[cfg(test)]
    pub fn contains(&self, coord: Coord) -> bool {
        self.positions[self.index(coord)].is_some()
    }

    /// Returns `true` if the cell was not already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let idx = self.index(coord);
        if self.positions[idx].is_some() {
            return false;
        }
        self.positions[idx] = Some(self.members.len());
        self.members.push(coord);
        true
    }

    /// Removes and returns a uniformly chosen member, drawing one index from `rng`.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.members.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..self.members.len());
        let coord = self.members.swap_remove(slot);
        let idx = self.index(coord);
        self.positions[idx] = None;
        if let Some(&moved) = self.members.get(slot) {
            let moved_idx = self.index(moved);
            self.positions[moved_idx] = Some(slot);
        }
        Some(coord)
    }
}
