use bit_set::BitSet;
use serde::Serialize;

use crate::graph::VertexId;

/** statistics of a solver run, exported as JSON */
#[derive(Debug, Serialize)]
pub struct SearchStats {
    /// instance file name
    pub inst_name: String,
    /// sizes of the cliques found (one entry for the maximizers, one per
    /// clique for the enumerator)
    pub clique_sizes: Vec<usize>,
    /// run time in seconds
    pub time_searched: f32,
}

/// transforms a clique bitset into a sorted vertex list (display/export)
pub fn clique_to_vec(clique: &BitSet) -> Vec<VertexId> {
    clique.iter().collect()
}

/// transforms a vertex list into a clique bitset
pub fn clique_from_vec(sol: &[VertexId]) -> BitSet {
    let mut res = BitSet::new();
    for v in sol { res.insert(*v); }
    res
}

/** writes a string encoding the cliques, one per line (use this to export
solutions) */
pub fn solution_to_string(cliques: &[BitSet]) -> String {
    let mut res = String::default();
    for c in cliques {
        for v in c.iter() {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/// exports search statistics and solution to files when requested
pub fn export_results(
    stats: &SearchStats,
    cliques: &[BitSet],
    perf_file: &Option<String>,
    sol_file: &Option<String>,
) {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename, serde_json::to_string(stats).unwrap())
            .unwrap_or_else(|why| panic!("couldn't write {}: {}", filename, why));
    }
    // export solution
    if let Some(filename) = sol_file {
        std::fs::write(filename, solution_to_string(cliques))
            .unwrap_or_else(|why| panic!("couldn't write {}: {}", filename, why));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clique_vec_round_trip() {
        let clique = clique_from_vec(&[4,1,2]);
        assert_eq!(clique_to_vec(&clique), vec![1,2,4]);
    }

    #[test]
    fn test_solution_to_string() {
        let cliques = vec![clique_from_vec(&[0,1]), clique_from_vec(&[2])];
        assert_eq!(solution_to_string(&cliques), "0 1 \n2 \n");
    }

    #[test]
    fn test_stats_serialization() {
        let stats = SearchStats {
            inst_name: "triangle".to_string(),
            clique_sizes: vec![3],
            time_searched: 0.1,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"clique_sizes\":[3]"));
    }
}
