use bit_set::BitSet;

use crate::graph::{Graph, VertexId};

/** enumerates all maximal cliques of the graph (each exactly once), using the
Bron-Kerbosch recursion with pivoting. The order of the result only depends on
the branching order of the search; callers must not rely on it. */
pub fn maximal_cliques(g: &Graph) -> Vec<BitSet> {
    if g.n() == 0 { return Vec::new(); }
    let r = BitSet::with_capacity(g.n());
    let mut p = BitSet::with_capacity(g.n());
    for v in g.vertices() { p.insert(v); }
    let mut x = BitSet::with_capacity(g.n());
    let mut cliques = Vec::new();
    bron_kerbosch(g, &r, &mut p, &mut x, &mut cliques);
    cliques
}

/** recursion over (R,P,X):
 - R: vertices committed to the clique under construction
 - P: candidates that may still extend R
 - X: vertices already explored at some ancestor level (suppresses duplicates)

Invariant at entry: every vertex of R is adjacent to every other vertex of R
and to every vertex of P ∪ X. Children receive fresh copies of the three sets;
only the current frame's P and X are mutated across sibling iterations.
*/
fn bron_kerbosch(
    g: &Graph,
    r: &BitSet,
    p: &mut BitSet,
    x: &mut BitSet,
    cliques: &mut Vec<BitSet>,
) {
    // base case before pivot selection: choose_pivot is undefined on ∅
    if p.is_empty() && x.is_empty() {
        cliques.push(r.clone());
        return;
    }
    let pivot = match choose_pivot(p, x, g) {
        Some(v) => v,
        None => return, // unreachable: P ∪ X non-empty past the base case
    };
    // branch only on the candidates not covered by the pivot
    let mut branching = p.clone();
    branching.difference_with(g.neighbors(pivot));
    for v in branching.iter() {
        let mut next_r = r.clone();
        next_r.insert(v);
        let mut next_p = p.clone();
        next_p.intersect_with(g.neighbors(v));
        let mut next_x = x.clone();
        next_x.intersect_with(g.neighbors(v));
        bron_kerbosch(g, &next_r, &mut next_p, &mut next_x, cliques);
        // v is fully explored at this level: siblings must not reuse it
        p.remove(v);
        x.insert(v);
    }
}

/** chooses the pivot vertex: a vertex of P ∪ X with maximum neighbor-set
size (ties broken arbitrarily). Returns None iff P ∪ X is empty.
A high-degree pivot maximizes |P ∩ N(pivot)|, hence minimizes the number of
branches |P \ N(pivot)|. */
pub fn choose_pivot(p: &BitSet, x: &BitSet, g: &Graph) -> Option<VertexId> {
    p.iter().chain(x.iter()).max_by_key(|v| g.degree(*v))
}
