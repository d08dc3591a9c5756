// src/graph_theory/mod.rs

pub mod graph_properties;

// Re-export the property lookup for convenience
pub use graph_properties::{graph_properties, GraphProperties, GraphType};
