use std::fmt::Debug;

use num_traits::{Float, ToPrimitive, Zero};

use crate::graph::traits::{Graph, GrowableGraph};
use crate::{Error, Result};

/// Adjacency-list directed multigraph over dense vertex ids.
///
/// Both edge directions are stored so degree queries and the constant-degree
/// transform can inspect incoming edges without a scan.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    outgoing: Vec<Vec<(usize, W)>>,
    incoming: Vec<Vec<(usize, W)>>,
    num_edges: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        DirectedGraph {
            outgoing: Vec::new(),
            incoming: Vec::new(),
            num_edges: 0,
        }
    }

    pub fn with_vertices(n: usize) -> Self {
        DirectedGraph {
            outgoing: vec![Vec::new(); n],
            incoming: vec![Vec::new(); n],
            num_edges: 0,
        }
    }

    /// True when some vertex has in- or out-degree above `max_degree`,
    /// i.e. the graph would benefit from the constant-degree transform.
    pub fn exceeds_degree(&self, max_degree: usize) -> bool {
        (0..self.num_vertices())
            .any(|v| self.out_degree(v) > max_degree || self.in_degree(v) > max_degree)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn outgoing_edges(&self, v: usize) -> &[(usize, W)] {
        self.outgoing.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    fn incoming_edges(&self, v: usize) -> &[(usize, W)] {
        self.incoming.get(v).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<W> GrowableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.outgoing[from].push((to, weight));
        self.incoming[to].push((from, weight));
        self.num_edges += 1;
        Ok(())
    }
}
