use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::graph::Graph;
use crate::Result;

/// Textbook Dijkstra, used as the correctness oracle for the bounded
/// recursion and as the baseline in benchmarks.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, graph: &G, source: usize) -> Result<ShortestPaths<W>> {
        let mut result = ShortestPaths::empty(source);
        if !graph.has_vertex(source) {
            return Ok(result);
        }

        result.distances.insert(source, W::zero());
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((W::zero(), source)));

        while let Some(Reverse((du, u))) = heap.pop() {
            if du > result.distance(u) {
                continue;
            }
            for &(v, w) in graph.outgoing_edges(u) {
                let alt = du + w;
                if alt < result.distance(v) {
                    result.distances.insert(v, alt);
                    result.predecessors.insert(v, u);
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        Ok(result)
    }
}
