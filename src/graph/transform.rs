use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, GrowableGraph};

/// Degree cap guaranteed by [`to_constant_degree`].
pub const MAX_DEGREE: usize = 2;

/// Vertex correspondence between an original graph and its constant-degree
/// rewrite.
#[derive(Debug, Clone)]
pub struct DegreeMapping {
    /// Transformed vertex id -> original vertex id.
    pub to_original: Vec<usize>,
    /// Original vertex id -> the transformed vertices representing it
    /// (a single identity entry for untouched vertices, the cycle otherwise).
    pub from_original: Vec<Vec<usize>>,
}

impl DegreeMapping {
    fn identity(n: usize) -> Self {
        DegreeMapping {
            to_original: (0..n).collect(),
            from_original: (0..n).map(|v| vec![v]).collect(),
        }
    }
}

/// Rewrites `graph` so every vertex has in- and out-degree at most 2 while
/// preserving shortest-path distances.
///
/// Each vertex whose in- or out-degree exceeds the cap is replaced by a
/// cycle of `max(in_deg, out_deg, 3)` vertices connected by zero-weight
/// edges; its original edges are distributed around the cycle with modular
/// counters. Low-degree vertices keep their ids. The result stays within
/// `O(m)` vertices and edges of the input.
pub fn to_constant_degree<W, G>(graph: &G) -> (DirectedGraph<W>, DegreeMapping)
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.num_vertices();

    let needs_rewrite = (0..n)
        .any(|v| graph.in_degree(v) > MAX_DEGREE || graph.out_degree(v) > MAX_DEGREE);
    if !needs_rewrite {
        let mut copy = DirectedGraph::with_vertices(n);
        for u in 0..n {
            for &(v, w) in graph.outgoing_edges(u) {
                copy.add_edge(u, v, w).expect("source edge is valid");
            }
        }
        return (copy, DegreeMapping::identity(n));
    }

    let mut out = DirectedGraph::with_vertices(n);
    let mut mapping = DegreeMapping::identity(n);

    for v in 0..n {
        let in_deg = graph.in_degree(v);
        let out_deg = graph.out_degree(v);
        if in_deg <= MAX_DEGREE && out_deg <= MAX_DEGREE {
            continue;
        }

        // One cycle vertex per edge slot; minimum 3 keeps cycle-internal
        // degree at 2 even with both neighbours distinct.
        let cycle_len = in_deg.max(out_deg).max(3);
        let cycle: Vec<usize> = (0..cycle_len).map(|_| out.add_vertex()).collect();
        mapping.to_original.resize(out.num_vertices(), v);
        for i in 0..cycle_len {
            out.add_edge(cycle[i], cycle[(i + 1) % cycle_len], W::zero())
                .expect("cycle edge is valid");
        }
        mapping.from_original[v] = cycle;
    }

    // Distribute original edges: successive out-edges of a rewritten vertex
    // leave successive cycle vertices, successive in-edges arrive at
    // successive cycle vertices.
    let mut out_cursor = vec![0usize; n];
    let mut in_cursor = vec![0usize; n];
    for u in 0..n {
        for &(v, w) in graph.outgoing_edges(u) {
            let src_set = &mapping.from_original[u];
            let dst_set = &mapping.from_original[v];
            let src = if src_set.len() == 1 {
                src_set[0]
            } else {
                let s = src_set[out_cursor[u] % src_set.len()];
                out_cursor[u] += 1;
                s
            };
            let dst = if dst_set.len() == 1 {
                dst_set[0]
            } else {
                let d = dst_set[in_cursor[v] % dst_set.len()];
                in_cursor[v] += 1;
                d
            };
            out.add_edge(src, dst, w).expect("mapped edge is valid");
        }
    }

    (out, mapping)
}
