use std::fmt;

use bit_set::BitSet;

use crate::dimacs::read_from_file;

/** Vertex Id */
pub type VertexId = usize;

/** error raised when an edge or a query references a vertex outside `[0, n)` */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVertex {
    /// offending vertex id
    pub vertex: VertexId,
    /// nb vertices of the graph
    pub n: usize,
}

impl fmt::Display for InvalidVertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid vertex {} (graph has {} vertices)", self.vertex, self.n)
    }
}

impl std::error::Error for InvalidVertex {}

/** models an undirected graph over vertices `0..n-1`.
Stores both adjacency lists (cheap iteration) and one neighbor bitset per
vertex (O(1) adjacency tests, word-wise set algebra for the searches).
The graph is not modified during a search.
*/
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_sets[i]: bitset of the neighbors of i
    adj_sets: Vec<BitSet>,
}

impl Graph {

    /** creates a graph with n vertices and no edge */
    pub fn new(n: usize) -> Self {
        Self {
            n, m: 0,
            edges: Vec::new(),
            adj_list: vec![Vec::new(); n],
            adj_sets: vec![BitSet::with_capacity(n); n],
        }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// edge list (each edge appears once, smaller endpoint first)
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// iterator over the vertex ids
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /** inserts the undirected edge (v,w). Duplicate edges and self-loops are
    ignored (set semantics). Fails if an endpoint is out of range. */
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<(), InvalidVertex> {
        if v >= self.n { return Err(InvalidVertex { vertex: v, n: self.n }); }
        if w >= self.n { return Err(InvalidVertex { vertex: w, n: self.n }); }
        if v == w || self.adj_sets[v].contains(w) { return Ok(()); }
        self.adj_sets[v].insert(w);
        self.adj_sets[w].insert(v);
        self.adj_list[v].push(w);
        self.adj_list[w].push(v);
        self.edges.push(if v < w { (v,w) } else { (w,v) });
        self.m += 1;
        Ok(())
    }

    /** neighbor set of v as a bitset (borrow; clone it for set algebra).

    # Panics
    if v is out of range.
    */
    pub fn neighbors(&self, v: VertexId) -> &BitSet {
        &self.adj_sets[v]
    }

    /** list of vertices adjacent to v.

    # Panics
    if v is out of range.
    */
    pub fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adj_list[v]
    }

    /** neighbor-set size of v.

    # Panics
    if v is out of range.
    */
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj_list[v].len()
    }

    /** returns true iff v and w are adjacent (O(1) through the bitsets).

    # Panics
    if v is out of range.
    */
    pub fn is_adjacent(&self, v: VertexId, w: VertexId) -> bool {
        self.adj_sets[v].contains(w)
    }

    /** constructor using an adjacency list (vertex ids must be < length) */
    pub fn from_adj_list(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        let mut res = Self::new(n);
        for (v, neighbors) in adj_list.iter().enumerate() {
            for &w in neighbors {
                res.add_edge(v, w)
                    .unwrap_or_else(|e| panic!("from_adj_list: {}", e));
            }
        }
        res
    }

    /// creates a graph from a DIMACS file
    pub fn from_file(filename: &str) -> Self {
        let (_,_,adj_list) = read_from_file(filename);
        Self::from_adj_list(adj_list)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.n());
        println!("\t{} \t edges", self.m());
        if self.n > 0 {
            let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}
