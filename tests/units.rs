//! Unit-level checks for the small collaborators: parameter derivation, the
//! decrease-key heap, shared state, and graph construction errors.

use bmssp::data_structures::IndexedMinHeap;
use bmssp::graph::{Graph, GrowableGraph};
use bmssp::params::{compute_k, compute_t, pow2_saturating, top_level};
use bmssp::{DirectedGraph, DistState, Error};
use ordered_float::OrderedFloat;

fn of(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

#[test]
fn parameters_for_known_sizes() {
    assert_eq!((compute_k(0), compute_t(0)), (1, 1));
    assert_eq!((compute_k(1), compute_t(1)), (1, 1));
    assert_eq!((compute_k(2), compute_t(2)), (1, 1));
    // n = 1000: floor(log2) = 9, k = 2^3, t = 2^6.
    assert_eq!((compute_k(1000), compute_t(1000)), (8, 64));
    // n = 10^6: floor(log2) = 19, k = 2^6, t = 2^12.
    assert_eq!((compute_k(1_000_000), compute_t(1_000_000)), (64, 4096));
}

#[test]
fn top_level_is_at_least_one() {
    assert_eq!(top_level(1, 1), 1);
    assert_eq!(top_level(1000, 64), 1);
    // ln(1000) ~ 6.9, so t = 2 gives floor(3.45) + 1 = 4.
    assert_eq!(top_level(1000, 2), 4);
}

#[test]
fn pow2_saturates_instead_of_overflowing() {
    assert_eq!(pow2_saturating(0), 1);
    assert_eq!(pow2_saturating(10), 1024);
    assert_eq!(pow2_saturating(usize::BITS as usize), usize::MAX);
    assert_eq!(pow2_saturating(10_000), usize::MAX);
}

#[test]
fn heap_pops_in_priority_order() {
    let mut heap = IndexedMinHeap::new();
    for (v, p) in [(1, 5.0), (2, 3.0), (3, 8.0), (4, 1.0)] {
        assert!(heap.insert(v, of(p)));
    }
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some((4, of(1.0))));

    let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|(v, _)| v)).collect();
    assert_eq!(order, vec![4, 2, 1, 3]);
    assert!(heap.is_empty());
}

#[test]
fn heap_insert_is_decrease_key() {
    let mut heap = IndexedMinHeap::new();
    heap.insert(1, of(5.0));
    heap.insert(2, of(3.0));

    // A worse priority is ignored, a better one moves the entry up.
    assert!(!heap.insert(1, of(7.0)));
    assert_eq!(heap.priority(1), Some(of(5.0)));
    assert!(heap.insert(1, of(2.0)));
    assert_eq!(heap.priority(1), Some(of(2.0)));

    assert_eq!(heap.pop(), Some((1, of(2.0))));
    assert_eq!(heap.pop(), Some((2, of(3.0))));
    assert_eq!(heap.pop(), None);
}

#[test]
fn dist_state_starts_unreached() {
    let state: DistState<OrderedFloat<f64>> = DistState::new(3);
    assert_eq!(state.len(), 3);
    for v in 0..3 {
        assert_eq!(state.get(v), of(f64::INFINITY));
        assert_eq!(state.pred(v), None);
    }
}

#[test]
#[cfg_attr(not(debug_assertions), ignore = "monotonicity is only asserted in debug builds")]
#[should_panic(expected = "distance estimate must not increase")]
fn dist_state_rejects_increasing_updates() {
    let mut state: DistState<OrderedFloat<f64>> = DistState::new(2);
    state.set(0, of(1.0));
    state.set(0, of(2.0));
}

#[test]
fn graph_rejects_invalid_edges() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    assert!(matches!(
        g.add_edge(0, 5, of(1.0)),
        Err(Error::InvalidVertex(5))
    ));
    assert!(matches!(
        g.add_edge(3, 0, of(1.0)),
        Err(Error::InvalidVertex(3))
    ));
    assert!(matches!(
        g.add_edge(0, 1, of(-2.0)),
        Err(Error::NegativeWeight { from: 0, to: 1, .. })
    ));
    assert_eq!(g.num_edges(), 0);
}

#[test]
fn graph_supports_parallel_edges() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    g.add_edge(0, 1, of(5.0)).unwrap();
    g.add_edge(0, 1, of(2.0)).unwrap();

    assert_eq!(g.num_edges(), 2);
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(g.in_degree(1), 2);
    // The cheapest parallel edge is reported.
    assert_eq!(g.edge_weight(0, 1), Some(of(2.0)));
    assert!(g.has_edge(0, 1));
    assert!(!g.has_edge(1, 0));
}
