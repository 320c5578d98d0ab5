use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::Result;

/// Read interface for a directed multigraph with non-negative weights.
///
/// Vertex ids are dense integers in `[0, num_vertices)`. Edge iteration is
/// exposed as slices so the hot relaxation loops compile to plain indexed
/// walks; abstraction over the graph stays a generic parameter, never a
/// trait object.
pub trait Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn has_vertex(&self, v: usize) -> bool {
        v < self.num_vertices()
    }

    /// Outgoing `(target, weight)` pairs of `v`, in insertion order.
    fn outgoing_edges(&self, v: usize) -> &[(usize, W)];

    /// Incoming `(source, weight)` pairs of `v`, in insertion order.
    fn incoming_edges(&self, v: usize) -> &[(usize, W)];

    fn out_degree(&self, v: usize) -> usize {
        self.outgoing_edges(v).len()
    }

    fn in_degree(&self, v: usize) -> usize {
        self.incoming_edges(v).len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.outgoing_edges(from).iter().any(|&(v, _)| v == to)
    }

    /// Weight of the cheapest edge `from -> to`, if any exists.
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .iter()
            .filter(|&&(v, _)| v == to)
            .map(|&(_, w)| w)
            .fold(None, |acc, w| match acc {
                Some(best) if best <= w => Some(best),
                _ => Some(w),
            })
    }
}

/// Construction interface used by graph builders and the degree transform.
pub trait GrowableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Appends a fresh vertex and returns its id.
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge. Fails on out-of-range endpoints or a negative
    /// weight; parallel edges and self-loops are permitted.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
