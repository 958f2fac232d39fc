use std::{collections::HashMap, hash::Hash};

/// Disjoint sets over arbitrary keys, with path compression and union by size.
///
/// Keys are interned into dense slots on first sight, so every unseen key starts out as
/// its own singleton set. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct UnionFind<K> {
    slots: HashMap<K, usize>,
    keys: Vec<K>,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl<K: Copy + Eq + Hash> UnionFind<K> {
    pub fn new() -> Self {
        UnionFind {
            slots: HashMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        UnionFind {
            slots: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
        }
    }

    /// Number of keys seen so far.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn slot(&mut self, key: K) -> usize {
        if let Some(&slot) = self.slots.get(&key) {
            return slot;
        }
        let slot = self.keys.len();
        self.slots.insert(key, slot);
        self.keys.push(key);
        self.parent.push(slot);
        self.size.push(1);
        slot
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point everything on the way directly at the root
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Returns the representative of the set containing `key`.
    pub fn find(&mut self, key: K) -> K {
        let slot = self.slot(key);
        let root = self.find_slot(slot);
        self.keys[root]
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already the same set.
    ///
    /// The smaller set is attached under the larger one; on a tie `a`'s root goes under `b`'s.
    pub fn union(&mut self, a: K, b: K) -> bool {
        let (slot_a, slot_b) = (self.slot(a), self.slot(b));
        let root_a = self.find_slot(slot_a);
        let root_b = self.find_slot(slot_b);
        if root_a == root_b {
            return false;
        }
        let (child, root) = if self.size[root_a] > self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        true
    }

    pub fn connected(&mut self, a: K, b: K) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of keys in the set containing `key`.
    pub fn set_size(&mut self, key: K) -> usize {
        let slot = self.slot(key);
        let root = self.find_slot(slot);
        self.size[root]
    }
}
