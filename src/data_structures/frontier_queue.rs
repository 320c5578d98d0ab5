use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Debug;

use num_traits::{Float, Zero};

/// One value-sorted run of `(key, value)` entries.
#[derive(Debug, Clone)]
struct Block<W> {
    entries: VecDeque<(usize, W)>,
}

impl<W: Copy> Block<W> {
    fn empty() -> Self {
        Block {
            entries: VecDeque::new(),
        }
    }

    fn first_value(&self) -> Option<W> {
        self.entries.front().map(|&(_, v)| v)
    }
}

/// Block-structured priority container driving the BMSSP main loop.
///
/// Holds `(vertex, tentative distance)` entries strictly below a global
/// bound `B`, retaining only the smallest value per vertex, and supports
/// three operations with the amortized costs the outer analysis needs:
///
/// - [`insert`](FrontierQueue::insert): route by value into the `D1` block
///   sequence through the ordered map over block upper bounds, splitting at
///   the median when a block outgrows the capacity `M`
/// - [`batch_prepend`](FrontierQueue::batch_prepend): push a run of entries
///   smaller than anything stored into fresh blocks at the front of `D0`
/// - [`pull`](FrontierQueue::pull): remove the up-to-`M` smallest entries
///   and report the smallest value left behind as the next boundary
///
/// `D1` lives inside the balanced map itself: blocks are keyed by their
/// exclusive-ish upper bound, so key order is block order and a split is two
/// map edits instead of a reindex. A block with bound `u` holds values in
/// `(previous bound, u]`; the terminal block is keyed by `B`.
#[derive(Debug)]
pub struct FrontierQueue<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Capacity `M` of a block.
    block_size: usize,
    /// Global exclusive bound `B`; entries with `value >= bound` are dropped.
    bound: W,
    /// Batch-prepended runs, globally value-ordered, smallest first.
    d0: VecDeque<Block<W>>,
    /// Insert blocks, keyed and ordered by upper bound.
    d1: BTreeMap<W, Block<W>>,
    /// Smallest value currently stored per key.
    key_min: HashMap<usize, W>,
}

impl<W> FrontierQueue<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub fn new(block_size: usize, bound: W) -> Self {
        debug_assert!(bound > W::zero());
        let mut d1 = BTreeMap::new();
        d1.insert(bound, Block::empty());
        FrontierQueue {
            block_size: block_size.max(1),
            bound,
            d0: VecDeque::new(),
            d1,
            key_min: HashMap::new(),
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.key_min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_min.is_empty()
    }

    /// Smallest value currently stored for `key`.
    pub fn get(&self, key: usize) -> Option<W> {
        self.key_min.get(&key).copied()
    }

    /// Inserts `key` with `value`, keeping only the per-key minimum.
    ///
    /// Values at or above the bound are rejected; an insert that does not
    /// improve the recorded minimum is a no-op. An improving insert removes
    /// the stale occurrence before filing the new one, so the stored
    /// multiset always matches the per-key minimum map.
    pub fn insert(&mut self, key: usize, value: W) {
        if value >= self.bound {
            return;
        }
        match self.key_min.get(&key).copied() {
            Some(old) if old <= value => return,
            Some(old) => self.remove_stale(key, old),
            None => {}
        }
        self.key_min.insert(key, value);

        let (&ub, block) = self
            .d1
            .range_mut(value..)
            .next()
            .expect("terminal bound block exists");
        let pos = block.entries.partition_point(|&(_, v)| v < value);
        block.entries.insert(pos, (key, value));
        if block.entries.len() > self.block_size {
            self.split(ub);
        }
    }

    /// Prepends a batch whose values the caller guarantees to be strictly
    /// smaller than anything currently stored.
    ///
    /// The batch is deduplicated per key, filtered against the recorded
    /// minima and the bound, then chunked into value-sorted blocks pushed to
    /// the front of `D0` preserving global value order.
    pub fn batch_prepend(&mut self, entries: Vec<(usize, W)>) {
        let mut batch_min: HashMap<usize, W> = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            if value >= self.bound {
                continue;
            }
            match batch_min.get(&key) {
                Some(&seen) if seen <= value => {}
                _ => {
                    batch_min.insert(key, value);
                }
            }
        }

        let mut fresh: Vec<(usize, W)> = Vec::with_capacity(batch_min.len());
        for (key, value) in batch_min {
            match self.key_min.get(&key).copied() {
                Some(old) if old <= value => continue,
                Some(old) => self.remove_stale(key, old),
                None => {}
            }
            self.key_min.insert(key, value);
            fresh.push((key, value));
        }
        if fresh.is_empty() {
            return;
        }
        fresh.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

        let mut blocks: VecDeque<Block<W>> = fresh
            .chunks(self.block_size)
            .map(|chunk| Block {
                entries: chunk.iter().copied().collect(),
            })
            .collect();
        blocks.extend(self.d0.drain(..));
        self.d0 = blocks;
    }

    /// Removes the up-to-`M` smallest entries and returns them with the next
    /// boundary: the smallest value still stored, or the global bound when
    /// the container drained.
    ///
    /// `D0` is drained ahead of `D1` on ties, matching the prepend contract.
    /// Entries tied with the would-be boundary are pulled as well, so the
    /// returned boundary is strictly above every pulled value and a sub-call
    /// bounded by it can always settle what it was handed.
    pub fn pull(&mut self) -> (Vec<(usize, W)>, W) {
        let mut pulled = Vec::with_capacity(self.block_size.min(self.len()));
        while pulled.len() < self.block_size {
            match self.pop_min() {
                Some(entry) => pulled.push(entry),
                None => break,
            }
        }
        if let Some(&(_, last)) = pulled.last() {
            while self.peek_min_value() == Some(last) {
                let entry = self.pop_min().expect("peeked entry exists");
                pulled.push(entry);
            }
        }

        let boundary = self.peek_min_value().unwrap_or(self.bound);
        (pulled, boundary)
    }

    /// Smallest value stored, without removing it.
    fn peek_min_value(&mut self) -> Option<W> {
        self.discard_exhausted_blocks();
        let d0_min = self.d0.front().and_then(Block::first_value);
        let d1_min = self
            .d1
            .values()
            .find_map(|b| b.first_value());
        match (d0_min, d1_min) {
            (None, None) => None,
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (Some(a), Some(b)) => Some(Ord::min(a, b)),
        }
    }

    /// Removes and returns the smallest entry, preferring `D0` on ties.
    fn pop_min(&mut self) -> Option<(usize, W)> {
        self.discard_exhausted_blocks();
        let d0_min = self.d0.front().and_then(Block::first_value);
        let d1_front = self
            .d1
            .iter()
            .find(|(_, b)| !b.entries.is_empty())
            .map(|(&ub, b)| (ub, b.first_value().expect("block is non-empty")));

        let entry = match (d0_min, d1_front) {
            (None, None) => return None,
            (Some(_), None) => self
                .d0
                .front_mut()
                .and_then(|b| b.entries.pop_front())
                .expect("front block has an entry"),
            (Some(a), Some((_, b))) if a <= b => self
                .d0
                .front_mut()
                .and_then(|b| b.entries.pop_front())
                .expect("front block has an entry"),
            (_, Some((ub, _))) => {
                let block = self.d1.get_mut(&ub).expect("block exists");
                let entry = block.entries.pop_front().expect("block is non-empty");
                if block.entries.is_empty() && ub != self.bound {
                    self.d1.remove(&ub);
                }
                entry
            }
        };
        self.key_min.remove(&entry.0);
        Some(entry)
    }

    /// Drops a superseded occurrence of `key` recorded at `old_value`.
    ///
    /// The bound map locates the candidate `D1` block; ties at a split
    /// boundary or a batch-prepended origin fall back to a linear scan.
    fn remove_stale(&mut self, key: usize, old_value: W) {
        if let Some((_, block)) = self.d1.range_mut(old_value..).next() {
            if let Some(pos) = block.entries.iter().position(|&(k, _)| k == key) {
                block.entries.remove(pos);
                return;
            }
        }
        for block in self.d1.values_mut() {
            if let Some(pos) = block.entries.iter().position(|&(k, _)| k == key) {
                block.entries.remove(pos);
                return;
            }
        }
        for block in self.d0.iter_mut() {
            if let Some(pos) = block.entries.iter().position(|&(k, _)| k == key) {
                block.entries.remove(pos);
                return;
            }
        }
        debug_assert!(false, "stale entry for key {key} not found in any block");
    }

    /// Splits the oversized block keyed by `ub` around its median value. The
    /// lower half is re-keyed under the median; the upper half stays under
    /// the old bound. Values sit in `(previous bound, bound]`, so the median
    /// never collides with a neighbouring key.
    fn split(&mut self, ub: W) {
        let block = self.d1.get_mut(&ub).expect("split target exists");
        let mid = block.entries.len() / 2;
        let split_value = block.entries[mid].1;
        if split_value == ub {
            // A run of values tied with the bound cannot be separated; the
            // block stays oversized until the tie breaks.
            return;
        }
        let upper = block.entries.split_off(mid);
        let lower = self.d1.remove(&ub).expect("split target exists");
        self.d1.insert(split_value, lower);
        self.d1.insert(ub, Block { entries: upper });
    }

    /// Removes drained `D0` blocks and drained non-terminal `D1` blocks so
    /// the fronts point at real entries.
    fn discard_exhausted_blocks(&mut self) {
        while self.d0.front().is_some_and(|b| b.entries.is_empty()) {
            self.d0.pop_front();
        }
        while let Some((&ub, block)) = self.d1.iter().next() {
            if block.entries.is_empty() && ub != self.bound {
                self.d1.remove(&ub);
            } else {
                break;
            }
        }
    }
}
