use fastrand::Rng;

use crate::graph::Graph;

/// default number of vertices of a random graph
pub const DEFAULT_NB_VERTICES:usize = 6;

/// default probability for each pair of vertices to be adjacent
pub const DEFAULT_EDGE_PROBABILITY:f64 = 0.3;

/** generates a random graph with n vertices.
each pair (i,j), i < j, is adjacent with probability p (pairs drawn in lexicographic order). */
pub fn random_graph(n:usize, p:f64, rng:&mut Rng) -> Graph {
    let mut res = Graph::edgeless(n);
    for i in 0..n {
        for j in i+1..n {
            if rng.f64() < p {
                res.link(i, j);
            }
        }
    }
    res
}

/// random graph obtained from a seed (same seed, same graph)
pub fn seeded_random_graph(n:usize, p:f64, seed:u64) -> Graph {
    random_graph(n, p, &mut Rng::with_seed(seed))
}
