use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use num_traits::{Float, Zero};
use tracing::trace;

use crate::algorithm::state::DistState;
use crate::graph::Graph;

/// Frontier reduction result: `pivots ⊆ frontier` worth recursing on, and
/// the `witnessed` superset of the frontier touched by the sweeps.
#[derive(Debug)]
pub struct PivotResult {
    pub pivots: Vec<usize>,
    pub witnessed: Vec<usize>,
}

/// Per-vertex label local to one invocation's sweeps.
#[derive(Debug, Clone, Copy)]
struct SweepLabel<W> {
    dist: W,
    parent: Option<usize>,
}

/// Runs `k` Bellman-Ford rounds below `bound` from `frontier` and keeps as
/// pivots the frontier vertices whose relaxation forest carries at least `k`
/// descendants.
///
/// If the witnessed set outgrows `k·|frontier|` mid-sweep the reduction is
/// pointless and the whole frontier is returned as the pivot set. On a
/// normal exit, sweep improvements (distance and parent) are folded back
/// into the shared state. Worklists preserve insertion order so relaxation
/// order, and with it tie-breaking, stays deterministic.
pub fn run<W, G>(
    graph: &G,
    bound: W,
    frontier: &[usize],
    k: usize,
    state: &mut DistState<W>,
) -> PivotResult
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut local: HashMap<usize, SweepLabel<W>> = HashMap::with_capacity(frontier.len() * 2);
    let mut witnessed: Vec<usize> = Vec::with_capacity(frontier.len() * 2);
    let mut in_witnessed: HashSet<usize> = HashSet::with_capacity(frontier.len() * 2);

    let mut seeds: Vec<usize> = Vec::with_capacity(frontier.len());
    for &s in frontier {
        if !graph.has_vertex(s) || !in_witnessed.insert(s) {
            continue;
        }
        local.insert(
            s,
            SweepLabel {
                dist: state.get(s),
                parent: None,
            },
        );
        witnessed.push(s);
        seeds.push(s);
    }

    let growth_cap = k.saturating_mul(seeds.len());
    let mut current = seeds.clone();

    for _ in 0..k {
        let mut next: Vec<usize> = Vec::new();
        for &u in &current {
            let du = local[&u].dist;
            for &(v, w) in graph.outgoing_edges(u) {
                if v == u {
                    continue;
                }
                let alt = du + w;
                if alt >= bound {
                    continue;
                }
                let improves = match local.get(&v) {
                    Some(label) => alt < label.dist,
                    None => true,
                };
                if improves {
                    local.insert(
                        v,
                        SweepLabel {
                            dist: alt,
                            parent: Some(u),
                        },
                    );
                    if in_witnessed.insert(v) {
                        witnessed.push(v);
                        next.push(v);
                    }
                }
            }
        }

        if witnessed.len() > growth_cap {
            // Reduction failed: fall back to the whole frontier. Sweep-local
            // improvements are dropped with the sweep.
            trace!(
                witnessed = witnessed.len(),
                cap = growth_cap,
                "pivot sweep overflow, frontier kept whole"
            );
            #[cfg(feature = "profiling")]
            crate::profiling::record(crate::profiling::Phase::FindPivots, witnessed.len() as u64);
            return PivotResult {
                pivots: seeds,
                witnessed,
            };
        }
        if next.is_empty() {
            break;
        }
        current = next;
    }

    // Forest over strictly-improving parent edges; roots are the witnessed
    // vertices that no sweep improved, hence frontier members.
    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut has_parent: HashSet<usize> = HashSet::new();
    for &v in &witnessed {
        if let Some(p) = local[&v].parent {
            children.entry(p).or_default().push(v);
            has_parent.insert(v);
        }
    }

    let mut pivots: Vec<usize> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for &root in &witnessed {
        if has_parent.contains(&root) {
            continue;
        }
        let mut size = 0usize;
        stack.push(root);
        while let Some(x) = stack.pop() {
            size += 1;
            if let Some(kids) = children.get(&x) {
                stack.extend(kids);
            }
        }
        if size >= k {
            pivots.push(root);
        }
    }
    if pivots.is_empty() {
        pivots = seeds;
    }

    for &v in &witnessed {
        let label = local[&v];
        if label.dist < state.get(v) {
            state.set(v, label.dist);
            if let Some(p) = label.parent {
                state.set_pred(v, p);
            }
        }
    }

    #[cfg(feature = "profiling")]
    crate::profiling::record(crate::profiling::Phase::FindPivots, witnessed.len() as u64);

    PivotResult { pivots, witnessed }
}
