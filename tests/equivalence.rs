//! The bounded recursion must report exactly the distances the reference
//! Dijkstra reports, on every graph and parameterization.

use bmssp::graph::generators::{gnm_random, grid};
use bmssp::graph::Graph;
use bmssp::{Dijkstra, ShortestPathAlgorithm, ShortestPaths, SsspSolver};
use ordered_float::OrderedFloat;

fn assert_same_tree<G: Graph<OrderedFloat<f64>>>(
    graph: &G,
    got: &ShortestPaths<OrderedFloat<f64>>,
    want: &ShortestPaths<OrderedFloat<f64>>,
) {
    assert_eq!(
        got.distances.len(),
        want.distances.len(),
        "reached sets differ in size"
    );
    for (&v, &d) in &want.distances {
        assert_eq!(got.distance(v), d, "distance to {v}");
    }
    // Predecessors may legitimately differ between algorithms, but each
    // recorded edge must exist and be tight.
    for (&v, &p) in &got.predecessors {
        let w = graph
            .edge_weight(p, v)
            .unwrap_or_else(|| panic!("missing predecessor edge {p} -> {v}"));
        assert_eq!(got.distance(p) + w, got.distance(v), "loose edge {p} -> {v}");
    }
}

#[test]
fn matches_dijkstra_on_sparse_random_graphs() {
    for seed in [1, 2, 3] {
        let g = gnm_random(200, 1000, 100.0, seed);
        let got = SsspSolver::new().solve(&g, 0);
        let want = Dijkstra::new().solve(&g, 0).unwrap();
        assert_same_tree(&g, &got, &want);
    }
}

#[test]
fn matches_dijkstra_on_larger_random_graphs() {
    for (n, m, seed) in [(500, 2500, 7), (800, 4000, 42)] {
        let g = gnm_random(n, m, 50.0, seed);
        let got = SsspSolver::new().solve(&g, 0);
        let want = Dijkstra::new().solve(&g, 0).unwrap();
        assert_same_tree(&g, &got, &want);
    }
}

// Unit weights produce heavy ties, stressing the pull boundary handling.
#[test]
fn matches_dijkstra_on_unit_weight_grid() {
    let g = grid(20, 20);
    let got = SsspSolver::new().solve(&g, 0);
    let want = Dijkstra::new().solve(&g, 0).unwrap();
    assert_same_tree(&g, &got, &want);
    assert_eq!(got.distance(399), OrderedFloat(38.0));
}

// Small t forces several recursion levels, exercising multi-source pivot
// finding, boundary batching, and workload-capped child frames.
#[test]
fn matches_dijkstra_with_forced_deep_recursion() {
    for (k, t, seed) in [(8, 2, 11), (5, 3, 12)] {
        let g = gnm_random(300, 1800, 100.0, seed);
        let got = SsspSolver::new().with_params(k, t).solve(&g, 0);
        let want = Dijkstra::new().solve(&g, 0).unwrap();
        assert_same_tree(&g, &got, &want);
    }
}

#[test]
fn matches_dijkstra_with_minimal_parameters() {
    let g = gnm_random(64, 320, 20.0, 5);
    let got = SsspSolver::new().with_params(4, 2).solve(&g, 0);
    let want = Dijkstra::new().solve(&g, 0).unwrap();
    assert_same_tree(&g, &got, &want);
}

#[test]
fn every_source_of_a_small_graph_agrees() {
    let g = gnm_random(40, 200, 10.0, 21);
    for source in 0..40 {
        let got = SsspSolver::new().solve(&g, source);
        let want = Dijkstra::new().solve(&g, source).unwrap();
        assert_same_tree(&g, &got, &want);
    }
}
