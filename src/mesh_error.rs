//! MeshFacetError: unified error type for mesh-facet public APIs
//!
//! Every fatal condition of the face-topology passes is reported through
//! this enum. The build either yields a fully consistent topology or fails
//! outright; no partial face set is ever produced.

use thiserror::Error;

use crate::topology::id::{ElementRef, FaceId, NodeId};

/// Unified error type for mesh-facet operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshFacetError {
    /// A face would need a third adjacent element; the mesh input is not
    /// manifold.
    #[error(
        "non-manifold topology: face {nodes:?} is already bounded by [{first}] and [{second}], but [{third}] also claims it"
    )]
    NonManifoldTopology {
        /// Node list of the face as discovered.
        nodes: Vec<NodeId>,
        /// Element holding adjacency slot 0.
        first: ElementRef,
        /// Element holding adjacency slot 1.
        second: ElementRef,
        /// The element whose local face matched after both slots were filled.
        third: ElementRef,
    },
    /// A face's orientation frame could not be constructed (zero-area face,
    /// coincident nodes, or collinear reference vectors).
    #[error("degenerate face {face} with nodes {nodes:?}: {reason}")]
    DegenerateFace {
        face: FaceId,
        nodes: Vec<NodeId>,
        reason: &'static str,
    },
    /// An element-local face resolved to fewer than two distinct nodes.
    #[error("malformed face node list on [{element}], local face {local_face}: {reason}")]
    MalformedFaceNodeList {
        element: ElementRef,
        local_face: usize,
        reason: String,
    },
    /// Element connectivity rejected at construction time.
    #[error("invalid connectivity: {0}")]
    InvalidConnectivity(String),
    /// A face reached the orientation pass without a primary adjacent
    /// element; the relations are inconsistent.
    #[error("face {0} has no adjacent element")]
    FaceWithoutElement(FaceId),
}
