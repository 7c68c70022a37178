//! # mesh-facet
//!
//! mesh-facet derives face topology for unstructured volumetric meshes used
//! in multiphysics simulation frameworks. Given elements defined by node
//! connectivity, it discovers the unique set of geometric faces shared
//! between elements (or exposed on the boundary), builds the face→node and
//! face→element adjacency relations together with the element→face map, and
//! canonically orders each face's nodes so that face normals and planar
//! coordinate frames are consistent and reproducible.
//!
//! ## Features
//! - Face deduplication over heterogeneous element blocks (hex, prism,
//!   pyramid, tet, and 2-D quad/triangle cells)
//! - Counterclockwise face-node ordering with outward normals, including
//!   the 2-node edge-as-face convention for 2-D meshes
//! - Named face sets projected from mesh-file node sets
//! - Structured box generators for fixtures and benchmarks
//!
//! ## Determinism
//!
//! The build pass walks regions, sub-regions, elements, and local faces in
//! a fixed order, so face numbering and node ordering are reproducible
//! across runs on identical input. Re-running the build on the same element
//! ordering yields identical relations.
//!
//! ## Errors
//!
//! The pass either yields a fully consistent topology or fails with a
//! [`mesh_error::MeshFacetError`]: non-manifold input, degenerate faces,
//! and malformed face node lists are all fatal, since downstream kernels
//! assume a valid, total face set.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mesh-facet = "0.3"
//! ```
//!
//! ```rust
//! use mesh_facet::prelude::*;
//!
//! let (regions, nodes) = structured_hex_box(2, 2, 2)?;
//! let topology = build(&regions, &nodes)?;
//! assert_eq!(topology.face_count(), 36);
//! # Ok::<(), MeshFacetError>(())
//! ```

pub mod algs;
pub mod geometry;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::face_build::{build, build_faces};
    pub use crate::algs::face_sets::project_node_sets;
    pub use crate::algs::meshgen::{structured_hex_box, structured_quad_box};
    pub use crate::algs::orientation::orient_all_faces;
    pub use crate::mesh_error::MeshFacetError;
    pub use crate::topology::cell_block::{CellBlock, ElementRegion, ElementRegions};
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::element_source::ElementSource;
    pub use crate::topology::face_topology::{FaceElements, FaceTopology};
    pub use crate::topology::id::{ElementRef, FaceId, NodeId};
    pub use crate::topology::nodes::NodeStore;
}
