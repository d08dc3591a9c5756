// src/combinatorics/mod.rs

pub mod binomial;
pub mod derangements;
pub mod inclusion_exclusion;
pub mod pigeonhole;

// Re-export the counting functions for convenience
pub use binomial::{binom, choose, permutation};
pub use derangements::derange;
pub use inclusion_exclusion::inclusion_exclusion;
pub use pigeonhole::{pigeon_hole, pigeon_hole_reverse};
