use bit_set::BitSet;

use crate::graph::Graph;

/** computes one clique of maximum cardinality by depth-first branch & bound.
Ties between maximum cliques are broken by whichever one the search order
discovers first. */
pub fn maximum_clique(g: &Graph) -> BitSet {
    let r = BitSet::with_capacity(g.n());
    let mut p = BitSet::with_capacity(g.n());
    for v in g.vertices() { p.insert(v); }
    let mut best = BitSet::with_capacity(g.n());
    branch_and_bound(g, &r, &mut p, &mut best);
    best
}

/** recursion over (R,P) with the incumbent threaded as `best`:
 - R: vertices committed to the clique under construction
 - P: candidates adjacent to every vertex of R

Children receive fresh copies of R and P; the current frame's P shrinks after
each child returns so later siblings do not branch on the same vertex again.
`best` is replaced wholesale when a strictly larger complete clique is found.
*/
fn branch_and_bound(g: &Graph, r: &BitSet, p: &mut BitSet, best: &mut BitSet) {
    if p.is_empty() {
        if r.len() > best.len() {
            *best = r.clone();
        }
        return;
    }
    // optimistic bound: even if every candidate joined, the incumbent stands
    if r.len() + p.len() <= best.len() {
        return;
    }
    for v in p.iter().collect::<Vec<_>>() {
        let mut next_r = r.clone();
        next_r.insert(v);
        let mut next_p = p.clone();
        next_p.intersect_with(g.neighbors(v));
        branch_and_bound(g, &next_r, &mut next_p, best);
        p.remove(v);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::checker::is_clique;
    use crate::search::bron_kerbosch::maximal_cliques;

    fn random_graph(n: usize, density: f64, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = Graph::new(n);
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(density) { g.add_edge(a, b).unwrap(); }
            }
        }
        g
    }

    #[test]
    fn test_triangle() {
        let g = Graph::from_adj_list(vec![vec![1,2], vec![0,2], vec![0,1]]);
        assert_eq!(maximum_clique(&g).len(), 3);
    }

    #[test]
    fn test_path() {
        let g = Graph::from_adj_list(vec![vec![1], vec![0,2], vec![1]]);
        let best = maximum_clique(&g);
        assert_eq!(best.len(), 2);
        assert!(is_clique(&g, &best));
    }

    #[test]
    fn test_two_disjoint_edges() {
        let mut g = Graph::new(4);
        g.add_edge(0,1).unwrap();
        g.add_edge(2,3).unwrap();
        let best = maximum_clique(&g);
        assert_eq!(best.len(), 2);
        assert!(is_clique(&g, &best));
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::new(5);
        assert_eq!(maximum_clique(&g).len(), 1);
    }

    #[test]
    fn test_zero_vertices() {
        let g = Graph::new(0);
        assert!(maximum_clique(&g).is_empty());
    }

    #[test]
    fn test_complete_graph() {
        let n = 7;
        let mut g = Graph::new(n);
        for a in 0..n {
            for b in (a+1)..n { g.add_edge(a,b).unwrap(); }
        }
        assert_eq!(maximum_clique(&g).len(), n);
    }

    #[test]
    fn test_petersen() {
        // triangle-free with at least one edge: maximum clique size is 2
        let g = Graph::from_file("insts/petersen.col");
        let best = maximum_clique(&g);
        assert_eq!(best.len(), 2);
        assert!(is_clique(&g, &best));
    }

    #[test]
    fn test_planted_clique() {
        // sparse background plus a planted K4 on {1,3,5,7}
        let mut g = random_graph(10, 0.2, 3);
        let planted = [1, 3, 5, 7];
        for (i, &a) in planted.iter().enumerate() {
            for &b in &planted[i+1..] { g.add_edge(a, b).unwrap(); }
        }
        assert!(maximum_clique(&g).len() >= 4);
    }

    #[test]
    fn test_size_matches_enumeration() {
        for seed in 0..20 {
            let g = random_graph(9, 0.5, seed);
            let best = maximum_clique(&g);
            assert!(is_clique(&g, &best), "invalid clique on seed {}", seed);
            let max_enumerated = maximal_cliques(&g).iter()
                .map(BitSet::len).max().unwrap();
            assert_eq!(best.len(), max_enumerated, "mismatch on seed {}", seed);
        }
    }

    #[test]
    fn test_deterministic_size() {
        let g = random_graph(9, 0.6, 11);
        assert_eq!(maximum_clique(&g).len(), maximum_clique(&g).len());
    }
}
