use std::time::Instant;

use clap::Parser;

use clique_search::checker::is_maximal;
use clique_search::graph::Graph;
use clique_search::search::bron_kerbosch::maximal_cliques;
use clique_search::util::{clique_to_vec, export_results, SearchStats};

/** enumerates all maximal cliques of a DIMACS instance (Bron-Kerbosch with
pivoting). */
#[derive(Parser, Debug)]
#[command(version, about = "maximal clique enumeration (Bron-Kerbosch)")]
struct Args {
    /// DIMACS instance file
    #[arg(short, long)]
    instance: String,
    /// if set, file in which the cliques are written (one per line)
    #[arg(short, long)]
    solution: Option<String>,
    /// if set, file in which the performance stats are written (JSON)
    #[arg(short, long)]
    perf: Option<String>,
}

pub fn main() {
    let args = Args::parse();
    println!("reading instance: {}...", args.instance);
    let g = Graph::from_file(&args.instance);
    g.display_statistics();
    println!("=======================");

    // solve it
    let t_start = Instant::now();
    let cliques = maximal_cliques(&g);
    let duration = t_start.elapsed().as_secs_f32();
    println!("enumeration took {:.3} seconds. {} maximal cliques", duration, cliques.len());
    for c in &cliques {
        debug_assert!(is_maximal(&g, c));
        println!("{:?}", clique_to_vec(c));
    }
    let stats = SearchStats {
        inst_name: args.instance,
        clique_sizes: cliques.iter().map(|c| c.len()).collect(),
        time_searched: duration,
    };

    // export results
    export_results(&stats, &cliques, &args.perf, &args.solution);
}
