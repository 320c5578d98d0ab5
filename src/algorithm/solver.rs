use std::fmt::Debug;

use num_traits::{Float, Zero};
use tracing::debug;

use crate::algorithm::bmssp::Bmssp;
use crate::algorithm::state::DistState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::graph::transform::{to_constant_degree, DegreeMapping, MAX_DEGREE};
use crate::graph::Graph;
use crate::params::top_level;
use crate::Result;

/// Configurable front end for the bounded recursion.
///
/// By default the input graph is used as-is; enabling degree reduction first
/// rewrites high-degree vertices into zero-weight cycles so the recursion
/// runs within its per-vertex complexity budget, then maps the result back.
#[derive(Debug, Clone, Copy, Default)]
pub struct SsspSolver {
    reduce_degree: bool,
    params: Option<(usize, usize)>,
}

impl SsspSolver {
    pub fn new() -> Self {
        SsspSolver::default()
    }

    /// Toggle the constant-degree preprocessing step.
    pub fn with_degree_reduction(mut self, enabled: bool) -> Self {
        self.reduce_degree = enabled;
        self
    }

    /// Override the derived `k`/`t` parameters (clamped to at least 1).
    /// Small values of `t` force deeper recursion on small graphs.
    pub fn with_params(mut self, k: usize, t: usize) -> Self {
        self.params = Some((k.max(1), t.max(1)));
        self
    }

    /// Shortest paths from `source` to every reachable vertex.
    ///
    /// An absent source yields empty maps; unreached vertices are omitted.
    pub fn solve<W, G>(&self, graph: &G, source: usize) -> ShortestPaths<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return ShortestPaths::empty(source);
        }

        let wants_rewrite = self.reduce_degree
            && (0..graph.num_vertices())
                .any(|v| graph.in_degree(v) > MAX_DEGREE || graph.out_degree(v) > MAX_DEGREE);
        if wants_rewrite {
            let (reduced, mapping) = to_constant_degree(graph);
            let reduced_source = mapping.from_original[source][0];
            let state = self.run_recursion(&reduced, reduced_source);
            collect_mapped(&state, &mapping, source)
        } else {
            let state = self.run_recursion(graph, source);
            collect(&state, source)
        }
    }

    fn run_recursion<W, G>(&self, graph: &G, source: usize) -> DistState<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let n = graph.num_vertices();
        let engine = match self.params {
            Some((k, t)) => Bmssp::with_params(k, t),
            None => Bmssp::new(n),
        };
        let level = top_level(n, engine.t());
        debug!(
            n,
            m = graph.num_edges(),
            k = engine.k(),
            t = engine.t(),
            top_level = level,
            "running bounded recursion"
        );

        let mut state = DistState::new(n);
        state.set(source, W::zero());
        engine.run(graph, level, W::infinity(), &[source], &mut state);
        state
    }
}

/// One-shot convenience wrapper around [`SsspSolver`] with defaults.
pub fn solve_sssp<W, G>(graph: &G, source: usize) -> ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    SsspSolver::new().solve(graph, source)
}

impl<W, G> ShortestPathAlgorithm<W, G> for SsspSolver
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "bmssp"
    }

    fn solve(&self, graph: &G, source: usize) -> Result<ShortestPaths<W>> {
        Ok(SsspSolver::solve(self, graph, source))
    }
}

fn collect<W>(state: &DistState<W>, source: usize) -> ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    let mut result = ShortestPaths::empty(source);
    for v in 0..state.len() {
        let d = state.get(v);
        if d < W::infinity() {
            result.distances.insert(v, d);
            if v != source {
                if let Some(p) = state.pred(v) {
                    result.predecessors.insert(v, p);
                }
            }
        }
    }
    result
}

/// Projects distances computed on the degree-reduced graph back onto the
/// original vertices.
fn collect_mapped<W>(
    state: &DistState<W>,
    mapping: &DegreeMapping,
    source: usize,
) -> ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    let mut result = ShortestPaths::empty(source);
    for (original, reps) in mapping.from_original.iter().enumerate() {
        let mut best: Option<(W, usize)> = None;
        for &tv in reps {
            let d = state.get(tv);
            if d < W::infinity() && best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, tv));
            }
        }
        let Some((d, tv)) = best else { continue };
        result.distances.insert(original, d);
        if original == source {
            continue;
        }

        // Walk predecessors past intra-cycle hops until the chain crosses a
        // real edge into this vertex's cycle.
        let mut cur = tv;
        let mut hops = 0usize;
        let pred = loop {
            match state.pred(cur) {
                None => break None,
                Some(p) => {
                    let p_original = mapping.to_original[p];
                    if p_original != original {
                        break Some(p_original);
                    }
                    cur = p;
                    hops += 1;
                    if hops > reps.len() {
                        break None;
                    }
                }
            }
        };
        if let Some(p) = pred {
            result.predecessors.insert(original, p);
        }
    }
    result
}
