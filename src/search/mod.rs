//! Search procedures for the clique problem.

/// Bron-Kerbosch maximal clique enumeration (with pivoting)
pub mod bron_kerbosch;

/// branch & bound maximum clique search
pub mod branch_and_bound;

/// greedy that finds a clique of "large" size
pub mod greedy;
