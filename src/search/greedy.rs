use bit_set::BitSet;

use crate::graph::{Graph, VertexId};

/** implements a greedy algorithm that finds a "large" clique (a fast lower
bound for the exact search, no optimality guarantee).
The algorithm chooses the candidate vertex with the largest degree, then marks
its non-neighbors as non-candidates, until no candidate remains. */
pub fn greedy_clique(g: &Graph) -> Vec<VertexId> {
    let mut forbidden: BitSet = BitSet::with_capacity(g.n());
    let mut res = Vec::new();
    loop {
        match g.vertices().filter(|v| !forbidden.contains(*v)).max_by_key(|v| g.degree(*v)) {
            None => break,
            Some(current_vertex) => {
                // insert the current vertex as part of the clique solution
                res.push(current_vertex);
                forbidden.insert(current_vertex);
                // mark the non-neighbors as forbidden
                for v in g.vertices() {
                    if !g.is_adjacent(current_vertex, v) {
                        forbidden.insert(v);
                    }
                }
            }
        };
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::checker::is_clique;
    use crate::search::branch_and_bound::maximum_clique;
    use crate::util::clique_from_vec;

    #[test]
    fn test_triangle() {
        let g = Graph::from_adj_list(vec![vec![1,2], vec![0,2], vec![0,1]]);
        let sol = greedy_clique(&g);
        assert_eq!(sol.len(), 3);
        assert!(is_clique(&g, &clique_from_vec(&sol)));
    }

    #[test]
    fn test_petersen() {
        let g = Graph::from_file("insts/petersen.col");
        let sol = greedy_clique(&g);
        assert_eq!(sol.len(), 2);
        assert!(is_clique(&g, &clique_from_vec(&sol)));
    }

    #[test]
    fn test_zero_vertices() {
        let g = Graph::new(0);
        assert!(greedy_clique(&g).is_empty());
    }

    #[test]
    fn test_lower_bound_of_exact() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = Graph::new(12);
            for a in 0..12 {
                for b in (a+1)..12 {
                    if rng.gen_bool(0.5) { g.add_edge(a,b).unwrap(); }
                }
            }
            let sol = greedy_clique(&g);
            assert!(is_clique(&g, &clique_from_vec(&sol)), "seed {}", seed);
            assert!(sol.len() <= maximum_clique(&g).len(), "seed {}", seed);
        }
    }
}
