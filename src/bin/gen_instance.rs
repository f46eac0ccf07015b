use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clique_search::dimacs::write_instance;
use clique_search::graph::VertexId;

/** generates a random Erdos-Renyi instance in DIMACS format (each edge drawn
independently with the given probability). Useful to benchmark the solvers:
both searches are exponential in the worst case, keep n small. */
#[derive(Parser, Debug)]
#[command(version, about = "random DIMACS instance generator")]
struct Args {
    /// number of vertices
    #[arg(short, long)]
    n: usize,
    /// probability of each edge
    #[arg(short, long, default_value_t = 0.5)]
    density: f64,
    /// random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,
    /// output DIMACS file
    #[arg(short, long)]
    output: String,
}

pub fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
    for a in 0..args.n {
        for b in (a + 1)..args.n {
            if rng.gen_bool(args.density) {
                edges.push((a, b));
            }
        }
    }
    write_instance(&args.output, args.n, &edges);
    println!(
        "generated {} vertices, {} edges in {}",
        args.n, edges.len(), args.output
    );
}
