use std::collections::HashSet;

use mesh_facet::prelude::*;
use proptest::prelude::*;

mod util;
use util::{hex_grid_face_count, hex_grid_interior_count, sorted_nodes};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn structured_grids_satisfy_the_face_invariants(
        nx in 1usize..4,
        ny in 1usize..4,
        nz in 1usize..4,
    ) {
        let (regions, nodes) = structured_hex_box(nx, ny, nz).unwrap();
        let topology = build(&regions, &nodes).unwrap();

        // face and interior counts match the closed-form grid values
        prop_assert_eq!(topology.face_count(), hex_grid_face_count(nx, ny, nz));
        let interior = topology
            .faces()
            .filter(|&f| topology.adjacent_elements(f).is_interior())
            .count();
        prop_assert_eq!(interior, hex_grid_interior_count(nx, ny, nz));

        // uniqueness: no two faces share a sorted node list
        let mut seen = HashSet::new();
        for face in topology.faces() {
            prop_assert!(seen.insert(sorted_nodes(&topology, face)));
        }

        // manifold bound and slot order: every face has a primary element,
        // and one or two adjacencies in total
        for face in topology.faces() {
            let adjacency = topology.adjacent_elements(face);
            prop_assert!(adjacency.primary().is_some());
            let count = adjacency.iter().count();
            prop_assert!(count == 1 || count == 2);
            prop_assert_eq!(count == 1, topology.is_boundary(face));
        }

        // coverage: each element-local face maps to a face listing the element
        for e in 0..nx * ny * nz {
            let element = ElementRef::new(0, 0, e);
            for local_face in 0..6 {
                let face = topology.element_face(element, local_face);
                prop_assert!(
                    topology.adjacent_elements(face).iter().any(|adj| adj == element)
                );
            }
        }
    }

    #[test]
    fn rebuilds_are_identical(nx in 1usize..4, ny in 1usize..4) {
        let (regions, nodes) = structured_hex_box(nx, ny, 2).unwrap();
        let first = build(&regions, &nodes).unwrap();
        let second = build(&regions, &nodes).unwrap();
        prop_assert_eq!(first.face_count(), second.face_count());
        for face in first.faces() {
            prop_assert_eq!(first.nodes(face), second.nodes(face));
            prop_assert_eq!(first.adjacent_elements(face), second.adjacent_elements(face));
        }
    }
}
