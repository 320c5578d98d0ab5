use std::collections::HashMap;

/// Binary min-heap over dense vertex keys with a position map for
/// decrease-key, as the truncated base case requires.
///
/// `insert` doubles as decrease-key: pushing a key already present lowers its
/// priority when the new one is smaller and is a no-op otherwise, so each key
/// occupies at most one slot.
#[derive(Debug)]
pub struct IndexedMinHeap<P> {
    entries: Vec<(usize, P)>,
    positions: HashMap<usize, usize>,
}

impl<P> IndexedMinHeap<P>
where
    P: PartialOrd + Copy,
{
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: usize) -> bool {
        self.positions.contains_key(&key)
    }

    pub fn priority(&self, key: usize) -> Option<P> {
        self.positions.get(&key).map(|&i| self.entries[i].1)
    }

    /// Insert `key` or lower its priority. Returns whether the heap changed.
    pub fn insert(&mut self, key: usize, priority: P) -> bool {
        if let Some(i) = self.positions.get(&key).copied() {
            if priority < self.entries[i].1 {
                self.entries[i].1 = priority;
                self.sift_up(i);
                return true;
            }
            return false;
        }
        self.entries.push((key, priority));
        let i = self.entries.len() - 1;
        self.positions.insert(key, i);
        self.sift_up(i);
        true
    }

    pub fn peek(&self) -> Option<(usize, P)> {
        self.entries.first().copied()
    }

    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let (key, priority) = self.entries.pop().expect("heap is non-empty");
        self.positions.remove(&key);
        if !self.entries.is_empty() {
            self.positions.insert(self.entries[0].0, 0);
            self.sift_down(0);
        }
        Some((key, priority))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].1 < self.entries[parent].1 {
                self.swap_entries(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < self.entries.len() && self.entries[child].1 < self.entries[smallest].1 {
                    smallest = child;
                }
            }
            if smallest == i {
                break;
            }
            self.swap_entries(i, smallest);
            i = smallest;
        }
    }

    fn swap_entries(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.positions.insert(self.entries[i].0, i);
        self.positions.insert(self.entries[j].0, j);
    }
}

impl<P> Default for IndexedMinHeap<P>
where
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
