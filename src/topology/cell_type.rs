//! Reference-cell shapes and their local face tables.
//!
//! Each shape exposes a fixed table mapping a local face index to node
//! positions within the element's node list. Rows are padded to the shape's
//! widest face; [`UNUSED`] marks the unused trailing slot of a triangular
//! face stored in a width-4 row (prism and pyramid). The element-source
//! adapter strips the padding before node lists reach the face builder.
//!
//! Reference vertex orderings:
//! - Triangle: `[v0, v1, v2]` counterclockwise.
//! - Quadrilateral: `[v0, v1, v2, v3]` counterclockwise.
//! - Tetrahedron: `[v0, v1, v2, v3]` with `v3` above the `v0 v1 v2` plane.
//! - Pyramid: `[v0, v1, v2, v3, v4]` with quad base `v0..v3` and apex `v4`.
//! - Prism: `[v0, v1, v2, v3, v4, v5]` with triangles `v0 v1 v2` / `v3 v4 v5`.
//! - Hexahedron: `[v0..v7]` with `v0..v3` the bottom quad and `v4..v7` the
//!   matching top quad.

use serde::{Deserialize, Serialize};

/// Padding sentinel for unused trailing slots in the face tables.
pub const UNUSED: usize = usize::MAX;

/// Reference-cell shapes supported by the element blocks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 2D simplex; faces are its three edges.
    Triangle,
    /// 2D tensor-product cell; faces are its four edges.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// Quad base plus apex.
    Pyramid,
    /// 3D wedge.
    Prism,
    /// 3D tensor-product cell.
    Hexahedron,
}

const TRIANGLE_FACES: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 0]];

const QUAD_FACES: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]];

const TET_FACES: &[&[usize]] = &[&[0, 1, 2], &[0, 1, 3], &[1, 2, 3], &[0, 2, 3]];

const PYRAMID_FACES: &[&[usize]] = &[
    &[0, 3, 2, 1],
    &[0, 1, 4, UNUSED],
    &[1, 2, 4, UNUSED],
    &[2, 3, 4, UNUSED],
    &[3, 0, 4, UNUSED],
];

const PRISM_FACES: &[&[usize]] = &[
    &[0, 1, 4, 3],
    &[1, 2, 5, 4],
    &[2, 0, 3, 5],
    &[0, 2, 1, UNUSED],
    &[3, 4, 5, UNUSED],
];

const HEX_FACES: &[&[usize]] = &[
    &[0, 1, 5, 4],
    &[1, 2, 6, 5],
    &[2, 3, 7, 6],
    &[3, 0, 4, 7],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

impl CellType {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Pyramid | CellType::Prism | CellType::Hexahedron => 3,
        }
    }

    /// Number of nodes in the cell's reference topology.
    pub fn node_count(self) -> usize {
        match self {
            CellType::Triangle => 3,
            CellType::Quadrilateral | CellType::Tetrahedron => 4,
            CellType::Pyramid => 5,
            CellType::Prism => 6,
            CellType::Hexahedron => 8,
        }
    }

    /// Number of local faces (edges, for 2D cells).
    pub fn face_count(self) -> usize {
        self.face_table().len()
    }

    /// Padded local-face row: node positions within the element's node list,
    /// trailing [`UNUSED`] slots included.
    pub fn local_face_slots(self, local_face: usize) -> &'static [usize] {
        self.face_table()[local_face]
    }

    fn face_table(self) -> &'static [&'static [usize]] {
        match self {
            CellType::Triangle => TRIANGLE_FACES,
            CellType::Quadrilateral => QUAD_FACES,
            CellType::Tetrahedron => TET_FACES,
            CellType::Pyramid => PYRAMID_FACES,
            CellType::Prism => PRISM_FACES,
            CellType::Hexahedron => HEX_FACES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellType; 6] = [
        CellType::Triangle,
        CellType::Quadrilateral,
        CellType::Tetrahedron,
        CellType::Pyramid,
        CellType::Prism,
        CellType::Hexahedron,
    ];

    #[test]
    fn face_counts() {
        assert_eq!(CellType::Triangle.face_count(), 3);
        assert_eq!(CellType::Quadrilateral.face_count(), 4);
        assert_eq!(CellType::Tetrahedron.face_count(), 4);
        assert_eq!(CellType::Pyramid.face_count(), 5);
        assert_eq!(CellType::Prism.face_count(), 5);
        assert_eq!(CellType::Hexahedron.face_count(), 6);
    }

    #[test]
    fn slots_are_in_range_and_padding_is_trailing() {
        for ct in ALL {
            for lf in 0..ct.face_count() {
                let row = ct.local_face_slots(lf);
                let mut seen_unused = false;
                let mut valid = 0;
                for &slot in row {
                    if slot == UNUSED {
                        seen_unused = true;
                    } else {
                        assert!(!seen_unused, "{ct:?} face {lf}: padding not trailing");
                        assert!(slot < ct.node_count(), "{ct:?} face {lf}: slot {slot}");
                        valid += 1;
                    }
                }
                assert!(valid >= 2, "{ct:?} face {lf} has {valid} nodes");
            }
        }
    }

    #[test]
    fn each_face_row_has_distinct_slots() {
        for ct in ALL {
            for lf in 0..ct.face_count() {
                let row: Vec<usize> = ct
                    .local_face_slots(lf)
                    .iter()
                    .copied()
                    .filter(|&s| s != UNUSED)
                    .collect();
                for (i, s) in row.iter().enumerate() {
                    assert!(!row[..i].contains(s), "{ct:?} face {lf} repeats slot {s}");
                }
            }
        }
    }

    #[test]
    fn every_node_appears_on_some_face() {
        for ct in ALL {
            for node in 0..ct.node_count() {
                let found = (0..ct.face_count())
                    .any(|lf| ct.local_face_slots(lf).contains(&node));
                assert!(found, "{ct:?}: node {node} on no face");
            }
        }
    }
}
