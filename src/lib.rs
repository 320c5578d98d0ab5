//! Deterministic O(m log^(2/3) n) single-source shortest paths.
//!
//! This crate implements the bounded multi-source shortest path (BMSSP)
//! recursion from "Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths" (Duan et al., 2025) for directed graphs with non-negative
//! real edge weights.
//!
//! The recursion is driven by three procedures plus one container:
//!
//! - [`algorithm::base_case`]: truncated bounded Dijkstra at recursion level 0
//! - [`algorithm::find_pivots`]: Bellman-Ford style frontier reduction
//! - [`algorithm::bmssp`]: the recursive divide-and-conquer driver
//! - [`data_structures::FrontierQueue`]: block-structured priority container
//!   supporting `insert`, `batch_prepend` and bulk `pull`
//!
//! The easiest entry point is [`solve_sssp`]:
//!
//! ```
//! use bmssp::graph::GrowableGraph;
//! use bmssp::{solve_sssp, DirectedGraph};
//! use ordered_float::OrderedFloat;
//!
//! let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
//! g.add_edge(0, 1, OrderedFloat(1.0)).unwrap();
//! g.add_edge(1, 2, OrderedFloat(2.0)).unwrap();
//! let paths = solve_sssp(&g, 0);
//! assert_eq!(paths.distance(2), OrderedFloat(3.0));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod params;
pub mod path;
#[cfg(feature = "profiling")]
pub mod profiling;

pub use algorithm::{
    bmssp::Bmssp,
    dijkstra::Dijkstra,
    solver::{solve_sssp, SsspSolver},
    state::DistState,
    ShortestPathAlgorithm, ShortestPaths,
};
pub use graph::directed::DirectedGraph;

/// Error types for the library.
///
/// Only graph construction can fail; the solver itself is total.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid vertex id {0}")]
    InvalidVertex(usize),

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
