//! Direct exercises of the recursion building blocks: the truncated base
//! case, pivot finding, and a hand-driven frame.

use bmssp::algorithm::{base_case, find_pivots};
use bmssp::graph::GrowableGraph;
use bmssp::{Bmssp, DirectedGraph, DistState};
use ordered_float::OrderedFloat;

fn of(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

fn graph_from(n: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph<OrderedFloat<f64>> {
    let mut g = DirectedGraph::with_vertices(n);
    for &(u, v, w) in edges {
        g.add_edge(u, v, of(w)).unwrap();
    }
    g
}

fn fresh_state(n: usize, source: usize) -> DistState<OrderedFloat<f64>> {
    let mut state = DistState::new(n);
    state.set(source, of(0.0));
    state
}

#[test]
fn base_case_truncates_after_k_plus_one() {
    let g = graph_from(
        5,
        &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (0, 2, 3.0),
            (2, 3, 1.0),
            (1, 3, 4.0),
            (3, 4, 1.0),
            (0, 4, 10.0),
        ],
    );
    let mut state = fresh_state(5, 0);

    let result = base_case::run(&g, of(f64::INFINITY), 0, &mut state, 1);

    // k + 1 = 2 vertices settle; the refined bound is the last one's
    // estimate, and its edges were still relaxed before the cut.
    assert_eq!(result.settled, vec![0, 1]);
    assert_eq!(result.new_bound, of(1.0));
    assert_eq!(state.get(2), of(2.0));
    assert_eq!(state.pred(2), Some(1));
}

#[test]
fn base_case_respects_the_bound() {
    let g = graph_from(
        5,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (1, 3, 4.0)],
    );
    let mut state = fresh_state(5, 0);

    let result = base_case::run(&g, of(2.0), 0, &mut state, 5);

    assert_eq!(result.settled, vec![0, 1]);
    assert_eq!(result.new_bound, of(2.0));
}

#[test]
fn base_case_missing_root_is_empty() {
    let g = graph_from(2, &[(0, 1, 1.0)]);
    let mut state = fresh_state(2, 0);

    let result = base_case::run(&g, of(10.0), 7, &mut state, 3);

    assert!(result.settled.is_empty());
    assert_eq!(result.new_bound, of(10.0));
}

#[test]
fn find_pivots_early_exit_keeps_frontier() {
    let g = graph_from(
        6,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 5, 1.0)],
    );
    let mut state = fresh_state(6, 0);

    let result = find_pivots::run(&g, of(f64::INFINITY), &[0], 1, &mut state);

    // The witnessed set outgrew k * |S| = 1 after one sweep, so the whole
    // frontier comes back as the pivot set.
    assert_eq!(result.pivots, vec![0]);
    assert_eq!(result.witnessed, vec![0, 1]);
}

#[test]
fn find_pivots_selects_roots_of_large_trees() {
    // Frontier {0, 1}: vertex 0 grows a subtree of size 3 within two sweeps,
    // vertex 1 grows nothing.
    let g = graph_from(4, &[(0, 2, 1.0), (2, 3, 1.0)]);
    let mut state = DistState::new(4);
    state.set(0, of(0.0));
    state.set(1, of(0.0));

    let result = find_pivots::run(&g, of(f64::INFINITY), &[0, 1], 2, &mut state);

    assert_eq!(result.pivots, vec![0]);
    assert_eq!(result.witnessed, vec![0, 1, 2, 3]);
    // Sweep improvements and their parents were folded into shared state.
    assert_eq!(state.get(2), of(1.0));
    assert_eq!(state.get(3), of(2.0));
    assert_eq!(state.pred(3), Some(2));
}

#[test]
fn find_pivots_falls_back_to_frontier_when_trees_are_small() {
    let g = graph_from(3, &[(0, 1, 1.0)]);
    let mut state = DistState::new(3);
    state.set(0, of(0.0));
    state.set(2, of(0.0));

    // k = 3: one sweep witnesses {0, 2, 1}, under the cap of 6, and no tree
    // reaches three vertices.
    let result = find_pivots::run(&g, of(f64::INFINITY), &[0, 2], 3, &mut state);

    assert_eq!(result.pivots, vec![0, 2]);
}

#[test]
fn frame_settles_reachable_vertices_below_bound() {
    let g = graph_from(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
    let mut state = fresh_state(5, 0);
    let engine = Bmssp::with_params(1, 2);

    let result = engine.run(&g, 1, of(f64::INFINITY), &[0], &mut state);

    let mut settled = result.settled.clone();
    settled.sort_unstable();
    assert_eq!(settled, vec![0, 1, 2, 3, 4]);
    for v in 0..5 {
        assert_eq!(state.get(v), of(v as f64));
    }
    assert!(result.new_bound <= of(f64::INFINITY));
}

#[test]
fn empty_frontier_returns_input_bound() {
    let g = graph_from(3, &[(0, 1, 1.0)]);
    let mut state = fresh_state(3, 0);
    let engine = Bmssp::with_params(2, 2);

    let result = engine.run(&g, 2, of(5.0), &[], &mut state);

    assert!(result.settled.is_empty());
    assert_eq!(result.new_bound, of(5.0));
}
