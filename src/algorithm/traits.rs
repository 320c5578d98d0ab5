use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Shortest-path tree rooted at `source`.
///
/// Vertices the source cannot reach are simply absent from `distances`; the
/// source itself never carries a predecessor entry.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub source: usize,
    pub distances: HashMap<usize, W>,
    pub predecessors: HashMap<usize, usize>,
}

impl<W> ShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn empty(source: usize) -> Self {
        ShortestPaths {
            source,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Distance to `v`, infinity when unreached.
    pub fn distance(&self, v: usize) -> W {
        self.distances.get(&v).copied().unwrap_or_else(W::infinity)
    }

    pub fn is_reached(&self, v: usize) -> bool {
        self.distances.contains_key(&v)
    }
}

/// Seam shared by the solver and the reference Dijkstra so tests and
/// benchmarks can swap them freely.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn solve(&self, graph: &G, source: usize) -> Result<ShortestPaths<W>>;

    fn name(&self) -> &'static str;
}
