use std::fmt::Debug;

use num_traits::{Float, Zero};

/// Shared relaxation state threaded through the whole recursion: tentative
/// distances and one predecessor per vertex.
///
/// Distance updates are monotone non-increasing; a vertex whose estimate has
/// reached the true shortest distance stays there.
#[derive(Debug, Clone)]
pub struct DistState<W>
where
    W: Float + Zero + Debug + Copy,
{
    dist: Vec<W>,
    pred: Vec<Option<usize>>,
}

impl<W> DistState<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// All estimates start at infinity with no predecessors.
    pub fn new(n: usize) -> Self {
        DistState {
            dist: vec![W::infinity(); n],
            pred: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn get(&self, v: usize) -> W {
        self.dist[v]
    }

    pub fn pred(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// Lowers the estimate of `v`. Increasing an estimate violates the
    /// monotonicity invariant and is rejected in debug builds.
    pub fn set(&mut self, v: usize, d: W) {
        debug_assert!(d <= self.dist[v], "distance estimate must not increase");
        self.dist[v] = d;
    }

    pub fn set_pred(&mut self, v: usize, u: usize) {
        self.pred[v] = Some(u);
    }

    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }
}
