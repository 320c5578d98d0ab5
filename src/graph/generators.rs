use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::GrowableGraph;

/// Random directed multigraph with `n` vertices, `m` edges and weights drawn
/// uniformly from `[1, max_weight)`. Seeded for reproducible tests.
pub fn gnm_random(
    n: usize,
    m: usize,
    max_weight: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "graph needs at least one vertex");
    assert!(max_weight > 1.0, "max_weight must exceed the minimum weight");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_vertices(n);
    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        graph
            .add_edge(from, to, weight)
            .expect("generated edge is valid");
    }
    graph
}

/// Rectangular grid with unit-weight edges to the right and downward
/// neighbours. Vertex `(x, y)` has id `y * width + x`.
pub fn grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);
    for y in 0..height {
        for x in 0..width {
            let v = y * width + x;
            if x + 1 < width {
                graph
                    .add_edge(v, v + 1, OrderedFloat(1.0))
                    .expect("grid edge is valid");
            }
            if y + 1 < height {
                graph
                    .add_edge(v, v + width, OrderedFloat(1.0))
                    .expect("grid edge is valid");
            }
        }
    }
    graph
}
