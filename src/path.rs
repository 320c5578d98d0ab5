//! Distance lookups, path reconstruction from the predecessor map, and a
//! lexicographic comparison helper for equal-length paths.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::ShortestPaths;

/// Distance recorded for `v`, infinity when absent from the map.
pub fn get_distance<W>(distances: &HashMap<usize, W>, v: usize) -> W
where
    W: Float + Zero + Debug + Copy,
{
    distances.get(&v).copied().unwrap_or_else(W::infinity)
}

/// Batch variant of [`get_distance`].
pub fn get_distances<W>(distances: &HashMap<usize, W>, targets: &[usize]) -> Vec<W>
where
    W: Float + Zero + Debug + Copy,
{
    targets.iter().map(|&v| get_distance(distances, v)).collect()
}

/// Follows predecessors from `target` back to `source` and returns the path
/// in source-to-target order.
///
/// Returns an empty path when the walk revisits a vertex (a cycle in the
/// predecessor map) or when the chain does not end at `source`.
pub fn reconstruct_path(
    target: usize,
    predecessors: &HashMap<usize, usize>,
    source: usize,
) -> Vec<usize> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut v = target;
    loop {
        if !seen.insert(v) {
            return Vec::new();
        }
        path.push(v);
        match predecessors.get(&v) {
            Some(&p) => v = p,
            None => break,
        }
    }
    path.reverse();
    if path.first() != Some(&source) {
        return Vec::new();
    }
    path
}

/// [`reconstruct_path`] for several targets at once.
pub fn reconstruct_paths(
    targets: &[usize],
    predecessors: &HashMap<usize, usize>,
    source: usize,
) -> HashMap<usize, Vec<usize>> {
    targets
        .iter()
        .map(|&v| (v, reconstruct_path(v, predecessors, source)))
        .collect()
}

/// Total order over the shortest paths to `a` and `b`: by distance, then by
/// hop count, then lexicographically over the predecessor chains walked
/// from the target backwards.
///
/// The solver itself only guarantees last-writer-wins ties; this helper
/// exists for callers that need a canonical order on equal-length paths.
pub fn compare_paths<W>(a: usize, b: usize, result: &ShortestPaths<W>) -> Ordering
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let da = result.distance(a);
    let db = result.distance(b);
    if da != db {
        return da.cmp(&db);
    }
    let chain_a = pred_chain(a, &result.predecessors);
    let chain_b = pred_chain(b, &result.predecessors);
    chain_a
        .len()
        .cmp(&chain_b.len())
        .then_with(|| chain_a.cmp(&chain_b))
}

/// Predecessor chain starting at `v`, cycle-guarded.
fn pred_chain(v: usize, predecessors: &HashMap<usize, usize>) -> Vec<usize> {
    let mut chain = vec![v];
    let mut seen: HashSet<usize> = HashSet::from([v]);
    let mut cur = v;
    while let Some(&p) = predecessors.get(&cur) {
        if !seen.insert(p) {
            break;
        }
        chain.push(p);
        cur = p;
    }
    chain
}
