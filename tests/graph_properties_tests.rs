// tests/graph_properties_tests.rs

use dmath::graph_theory::{graph_properties, GraphProperties, GraphType};
use num::{BigInt, Zero};

#[cfg(test)]
mod graph_properties_tests {
    use super::*;

    fn degree_sum(properties: &GraphProperties) -> BigInt {
        properties
            .degree()
            .expect("expected a successful lookup")
            .iter()
            .sum()
    }

    #[test]
    fn test_complete_graph_known_values() {
        let properties = graph_properties(5, "complete");
        assert_eq!(properties.vertices(), Some(&BigInt::from(5)));
        assert_eq!(properties.edges(), Some(&BigInt::from(10)));

        let expected: Vec<BigInt> = vec![4, 4, 4, 4, 4].into_iter().map(BigInt::from).collect();
        assert_eq!(properties.degree(), Some(&expected[..]));
    }

    #[test]
    fn test_cube_graph_known_values() {
        let properties = graph_properties(4, "cube");
        assert_eq!(properties.vertices(), Some(&BigInt::from(16)));
        assert_eq!(properties.edges(), Some(&BigInt::from(32)));
        assert_eq!(properties.degree().map(|d| d.len()), Some(16));
        assert!(properties
            .degree()
            .unwrap()
            .iter()
            .all(|d| *d == BigInt::from(4)));
    }

    #[test]
    fn test_wheel_graph_hub_and_rim() {
        let properties = graph_properties(7, "wheel");
        assert_eq!(properties.edges(), Some(&BigInt::from(12)));

        let expected: Vec<BigInt> = vec![6, 3, 3, 3, 3, 3, 3]
            .into_iter()
            .map(BigInt::from)
            .collect();
        assert_eq!(
            properties.degree(),
            Some(&expected[..]),
            "hub degree comes first, rim degrees after"
        );
    }

    #[test]
    fn test_handshake_lemma_across_families() {
        // Sum of degrees is twice the edge count in any graph
        let cases = [
            ("complete", 0i64..=12),
            ("cube", 0i64..=10),
            ("cycle", 3i64..=12),
            ("wheel", 4i64..=12),
        ];

        for (name, orders) in cases {
            for n in orders {
                let properties = graph_properties(n, name);
                let edges = properties
                    .edges()
                    .unwrap_or_else(|| panic!("{} graph of order {} should succeed", name, n));
                assert_eq!(
                    degree_sum(&properties),
                    edges * 2,
                    "handshake lemma failed for {} graph of order {}",
                    name, n
                );

                let vertex_count = properties.vertices().unwrap();
                assert_eq!(
                    BigInt::from(properties.degree().unwrap().len()),
                    *vertex_count,
                    "degree sequence length must match the vertex count"
                );
            }
        }
    }

    #[test]
    fn test_precondition_failures_carry_messages() {
        assert_eq!(
            graph_properties(2, "cycle").error(),
            Some("A cycle graph must have at least 3 vertices")
        );
        assert_eq!(
            graph_properties(3, "wheel").error(),
            Some("A wheel graph must have at least 4 vertices")
        );
        assert_eq!(
            graph_properties(-1, "complete").error(),
            Some("A complete graph must have a non-negative number of vertices")
        );
        assert_eq!(
            graph_properties(-1, "cube").error(),
            Some("A cube graph must have a non-negative dimension")
        );
    }

    #[test]
    fn test_unknown_graph_types() {
        for name in ["unknown", "torus", "Complete", "CYCLE", ""] {
            let properties = graph_properties(5, name);
            assert_eq!(
                properties.error(),
                Some("Unknown graph type"),
                "name {:?} should not be recognized",
                name
            );
            assert!(properties.vertices().is_none());
            assert!(properties.edges().is_none());
            assert!(properties.degree().is_none());
        }
    }

    #[test]
    fn test_dispatch_matches_typed_entry_point() {
        let families = [
            (GraphType::Complete, 6),
            (GraphType::Cube, 3),
            (GraphType::Cycle, 5),
            (GraphType::Wheel, 8),
        ];

        for (family, n) in families {
            assert_eq!(
                graph_properties(n, family.name()),
                family.properties(n),
                "string dispatch must agree with {:?}",
                family
            );
        }
    }

    #[test]
    fn test_degree_length_matches_vertices_at_larger_orders() {
        // Every family materializes its degree sequence through a checked
        // length conversion, so the one-degree-per-vertex shape must survive
        // well past the small orders
        let cases = [
            ("complete", 4096i64),
            ("cycle", 4096),
            ("wheel", 4096),
            ("cube", 12),
        ];

        for (name, n) in cases {
            let properties = graph_properties(n, name);
            let vertices = properties.vertices().expect("lookup should succeed");
            assert_eq!(
                BigInt::from(properties.degree().unwrap().len()),
                *vertices,
                "{} graph of order {} must carry one degree per vertex",
                name, n
            );
        }
    }

    #[test]
    fn test_error_variant_serializes_to_tagged_json() {
        let properties = graph_properties(5, "unknown");
        let value = serde_json::to_value(&properties).expect("serialization should not fail");
        assert_eq!(
            value,
            serde_json::json!({ "Error": { "message": "Unknown graph type" } })
        );
    }

    #[test]
    fn test_properties_variant_round_trips_through_json() {
        let properties = graph_properties(5, "complete");
        let encoded = serde_json::to_string(&properties).expect("serialization should not fail");
        let decoded: GraphProperties =
            serde_json::from_str(&encoded).expect("deserialization should not fail");
        assert_eq!(decoded, properties);
    }

    #[test]
    fn test_empty_complete_graph() {
        let properties = graph_properties(0, "complete");
        assert_eq!(properties.vertices(), Some(&BigInt::zero()));
        assert_eq!(properties.edges(), Some(&BigInt::zero()));
        assert_eq!(properties.degree().map(|d| d.len()), Some(0));
    }
}
