//! Exact maximal and maximum clique search on undirected graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// undirected graph store (adjacency lists + one neighbor bitset per vertex)
pub mod graph;

/// read/write DIMACS formats
pub mod dimacs;

/// clique validity and maximality checker
pub mod checker;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the clique problem
pub mod search;
