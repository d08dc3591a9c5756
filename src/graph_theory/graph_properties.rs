// src/graph_theory/graph_properties.rs
//
// Property tables for four named graph families. Each family is a closed
// formula over the vertex count (or dimension, for cube graphs), so the
// properties are computed directly rather than derived from an adjacency
// structure.

use num::{BigInt, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Enumeration of the supported graph families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphType {
    /// Every pair of distinct vertices is adjacent
    Complete,

    /// The n-dimensional hypercube: 2^n vertices, one per bit pattern
    Cube,

    /// A single closed ring of n vertices
    Cycle,

    /// A cycle of n-1 vertices plus a hub adjacent to all of them
    Wheel,
}

impl GraphType {
    /// Returns the lowercase name used to select the family
    pub fn name(&self) -> &str {
        match self {
            Self::Complete => "complete",
            Self::Cube => "cube",
            Self::Cycle => "cycle",
            Self::Wheel => "wheel",
        }
    }

    /// Looks up a family by the name `name()` reports. Names are
    /// case-sensitive; anything unrecognized is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "complete" => Some(Self::Complete),
            "cube" => Some(Self::Cube),
            "cycle" => Some(Self::Cycle),
            "wheel" => Some(Self::Wheel),
            _ => None,
        }
    }

    /// Computes the properties of this family's graph of order `n`.
    ///
    /// For `Cube`, `n` is the dimension and the graph has `2^n` vertices;
    /// for the other families `n` is the vertex count itself. A violated
    /// precondition (negative `n`, or too few vertices for the cycle and
    /// wheel shapes) produces the [`GraphProperties::Error`] variant.
    pub fn properties(&self, n: i64) -> GraphProperties {
        match self {
            Self::Complete => {
                if n < 0 {
                    return invalid("A complete graph must have a non-negative number of vertices");
                }
                let count = usize::try_from(n).expect("complete graph too large to materialize");
                let vertices = BigInt::from(n);
                let edges = &vertices * (n - 1) / 2;
                GraphProperties::Properties {
                    vertices,
                    edges,
                    degree: vec![BigInt::from(n - 1); count],
                }
            }
            Self::Cube => {
                if n < 0 {
                    return invalid("A cube graph must have a non-negative dimension");
                }
                let exponent = u32::try_from(n).expect("cube dimension exceeds supported range");
                let vertices = BigInt::from(2).pow(exponent);
                // n * 2^(n-1), written to stay integral at n = 0
                let edges = &vertices * n / 2;
                let count = vertices
                    .to_usize()
                    .expect("cube graph too large to materialize");
                GraphProperties::Properties {
                    vertices,
                    edges,
                    degree: vec![BigInt::from(n); count],
                }
            }
            Self::Cycle => {
                if n < 3 {
                    return invalid("A cycle graph must have at least 3 vertices");
                }
                let count = usize::try_from(n).expect("cycle graph too large to materialize");
                GraphProperties::Properties {
                    vertices: BigInt::from(n),
                    edges: BigInt::from(n),
                    degree: vec![BigInt::from(2); count],
                }
            }
            Self::Wheel => {
                if n < 4 {
                    return invalid("A wheel graph must have at least 4 vertices");
                }
                let count = usize::try_from(n).expect("wheel graph too large to materialize");
                let mut degree = vec![BigInt::from(3); count];
                degree[0] = BigInt::from(n - 1); // hub
                GraphProperties::Properties {
                    vertices: BigInt::from(n),
                    edges: BigInt::from(2 * (n - 1)),
                    degree,
                }
            }
        }
    }
}

/// Result of a graph-property lookup. Exactly one variant holds: either the
/// full numeric description or a failure message, never a mixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphProperties {
    Properties {
        vertices: BigInt,
        edges: BigInt,
        /// Per-vertex degrees, `vertices` entries long
        degree: Vec<BigInt>,
    },
    Error {
        message: String,
    },
}

impl GraphProperties {
    pub fn vertices(&self) -> Option<&BigInt> {
        match self {
            GraphProperties::Properties { vertices, .. } => Some(vertices),
            GraphProperties::Error { .. } => None,
        }
    }

    pub fn edges(&self) -> Option<&BigInt> {
        match self {
            GraphProperties::Properties { edges, .. } => Some(edges),
            GraphProperties::Error { .. } => None,
        }
    }

    pub fn degree(&self) -> Option<&[BigInt]> {
        match self {
            GraphProperties::Properties { degree, .. } => Some(degree),
            GraphProperties::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GraphProperties::Properties { .. } => None,
            GraphProperties::Error { message } => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraphProperties::Error { .. })
    }
}

impl std::fmt::Display for GraphProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GraphProperties::Properties { vertices, edges, .. } => {
                write!(f, "{} vertices, {} edges", vertices, edges)
            }
            GraphProperties::Error { message } => write!(f, "error: {}", message),
        }
    }
}

fn invalid(message: &str) -> GraphProperties {
    GraphProperties::Error {
        message: message.to_string(),
    }
}

/// Looks up the properties of the order-`n` graph of the named family.
///
/// Recognized names are `"complete"`, `"cube"`, `"cycle"` and `"wheel"`;
/// any other string produces the `Error` variant with message
/// `"Unknown graph type"`. Precondition failures are likewise reported in
/// the result, never as a panic or a `Result` error.
///
/// # Examples
/// ```
/// use dmath::graph_theory::graph_properties;
/// use num::BigInt;
///
/// let complete = graph_properties(5, "complete");
/// assert_eq!(complete.vertices(), Some(&BigInt::from(5)));
/// assert_eq!(complete.edges(), Some(&BigInt::from(10)));
///
/// let bad = graph_properties(2, "cycle");
/// assert_eq!(bad.error(), Some("A cycle graph must have at least 3 vertices"));
/// ```
pub fn graph_properties(n: i64, graph_type: &str) -> GraphProperties {
    match GraphType::from_name(graph_type) {
        Some(family) => family.properties(n),
        None => GraphProperties::Error {
            message: "Unknown graph type".to_string(),
        },
    }
}
