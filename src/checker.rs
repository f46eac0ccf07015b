use bit_set::BitSet;

use crate::graph::Graph;

/** returns true iff the vertices of `clique` are pairwise adjacent */
pub fn is_clique(g: &Graph, clique: &BitSet) -> bool {
    for u in clique.iter() {
        for v in clique.iter() {
            if u < v && !g.is_adjacent(u, v) { return false; }
        }
    }
    true
}

/** returns true iff `clique` is a clique that no outside vertex extends */
pub fn is_maximal(g: &Graph, clique: &BitSet) -> bool {
    if !is_clique(g, clique) { return false; }
    for v in g.vertices() {
        if clique.contains(v) { continue; }
        if clique.iter().all(|u| g.is_adjacent(u, v)) {
            return false; // v extends the clique
        }
    }
    true
}
