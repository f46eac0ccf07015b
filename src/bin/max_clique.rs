use std::time::Instant;

use clap::Parser;

use clique_search::checker::is_clique;
use clique_search::graph::Graph;
use clique_search::search::branch_and_bound::maximum_clique;
use clique_search::search::greedy::greedy_clique;
use clique_search::util::{clique_to_vec, export_results, SearchStats};

/** finds one clique of maximum cardinality of a DIMACS instance (greedy lower
bound report, then exact branch & bound). */
#[derive(Parser, Debug)]
#[command(version, about = "exact maximum clique (branch & bound)")]
struct Args {
    /// DIMACS instance file
    #[arg(short, long)]
    instance: String,
    /// if set, file in which the clique is written
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

    // fast lower bound before the exact search
    let sol_greedy = greedy_clique(&g);
    println!("greedy clique: {}", sol_greedy.len());

    // solve it
    let t_start = Instant::now();
    let best = maximum_clique(&g);
    let duration = t_start.elapsed().as_secs_f32();
    assert!(is_clique(&g, &best), "search returned an invalid clique");
    println!(
        "branch & bound took {:.3} seconds. Nb vertices: {}",
        duration, best.len()
    );
    println!("{:?}", clique_to_vec(&best));
    let stats = SearchStats {
        inst_name: args.instance,
        clique_sizes: vec![best.len()],
        time_searched: duration,
    };

    // export results
    export_results(&stats, &[best], &args.perf, &args.solution);
}
