// src/lib.rs

pub mod error;
pub mod integer_math;
pub mod combinatorics;
pub mod graph_theory;
