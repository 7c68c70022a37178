#![allow(dead_code)]
use mesh_facet::prelude::*;

pub fn nid(raw: usize) -> NodeId {
    NodeId::new(raw)
}

/// One unit cube as a single-block region.
pub fn single_hex() -> (ElementRegions, NodeStore) {
    structured_hex_box(1, 1, 1).unwrap()
}

/// Two unit cubes sharing one quadrilateral face: 12 nodes, 11 faces.
pub fn two_cube_pair() -> (ElementRegions, NodeStore) {
    structured_hex_box(2, 1, 1).unwrap()
}

/// A unit-cube hex plus a prism glued to its x = 1 face, in two sub-regions
/// of the same region. 10 nodes, 10 faces, exactly one interior.
pub fn hex_with_prism_cap() -> (ElementRegions, NodeStore) {
    let positions = vec![
        [0.0, 0.0, 0.0], // 0
        [1.0, 0.0, 0.0], // 1
        [1.0, 1.0, 0.0], // 2
        [0.0, 1.0, 0.0], // 3
        [0.0, 0.0, 1.0], // 4
        [1.0, 0.0, 1.0], // 5
        [1.0, 1.0, 1.0], // 6
        [0.0, 1.0, 1.0], // 7
        [2.0, 0.5, 0.0], // 8, bottom ridge apex
        [2.0, 0.5, 1.0], // 9, top ridge apex
    ];
    let store = NodeStore::new(positions);

    let hexes = CellBlock::new(
        CellType::Hexahedron,
        (0..8).map(nid).collect(),
        store.len(),
    )
    .unwrap();
    // prism side quad [p0, p1, p4, p3] coincides with the hex x = 1 face
    let prisms = CellBlock::new(
        CellType::Prism,
        [1, 2, 8, 5, 6, 9].map(nid).to_vec(),
        store.len(),
    )
    .unwrap();

    let mut region = ElementRegion::new("Domain");
    region.push_block(hexes);
    region.push_block(prisms);
    let mut regions = ElementRegions::new();
    regions.push_region(region);
    (regions, store)
}

/// Sorted copy of a face's node list.
pub fn sorted_nodes(topology: &FaceTopology, face: FaceId) -> Vec<NodeId> {
    let mut nodes = topology.nodes(face).to_vec();
    nodes.sort_unstable();
    nodes
}

/// Expected face count of a structured `nx`×`ny`×`nz` hex grid.
pub fn hex_grid_face_count(nx: usize, ny: usize, nz: usize) -> usize {
    (nx + 1) * ny * nz + nx * (ny + 1) * nz + nx * ny * (nz + 1)
}

/// Expected interior-face count of a structured hex grid.
pub fn hex_grid_interior_count(nx: usize, ny: usize, nz: usize) -> usize {
    (nx - 1) * ny * nz + nx * (ny - 1) * nz + nx * ny * (nz - 1)
}
