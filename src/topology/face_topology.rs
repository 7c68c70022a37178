//! Face relations produced by the build pass.
//!
//! [`FaceTopology`] owns the face→node and face→element relations, the
//! element→face map, and the named face sets. It is filled once per build
//! pass and read-only for downstream consumers until the next full rebuild.

use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::geometry::vector::{self, Vec3};
use crate::topology::id::{ElementRef, FaceId, NodeId};
use crate::topology::nodes::NodeStore;

/// Up to two elements adjacent to one face.
///
/// Slot 0 is always filled first; a face with only slot 0 set is a boundary
/// face, a face with both slots set is interior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceElements {
    slots: [Option<ElementRef>; 2],
}

impl FaceElements {
    /// Adjacency holding `element` in slot 0.
    pub(crate) fn from_primary(element: ElementRef) -> Self {
        FaceElements {
            slots: [Some(element), None],
        }
    }

    /// Attach `element` to the first unset slot; returns the existing pair
    /// when both slots are already taken.
    pub(crate) fn attach(&mut self, element: ElementRef) -> Result<(), (ElementRef, ElementRef)> {
        match self.slots {
            [None, _] => {
                self.slots[0] = Some(element);
                Ok(())
            }
            [Some(_), None] => {
                self.slots[1] = Some(element);
                Ok(())
            }
            [Some(a), Some(b)] => Err((a, b)),
        }
    }

    /// The element the face was discovered from.
    pub fn primary(&self) -> Option<ElementRef> {
        self.slots[0]
    }

    /// The second adjacent element, for interior faces.
    pub fn secondary(&self) -> Option<ElementRef> {
        self.slots[1]
    }

    pub fn is_boundary(&self) -> bool {
        self.slots[0].is_some() && self.slots[1].is_none()
    }

    pub fn is_interior(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Set adjacency slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Element→face map for one cell block: row-major, one row per element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementFaceBlock {
    pub(crate) faces_per_element: usize,
    pub(crate) faces: Vec<FaceId>,
}

impl ElementFaceBlock {
    /// Faces of one element, indexed by local face.
    pub fn element_faces(&self, element: usize) -> &[FaceId] {
        let width = self.faces_per_element;
        &self.faces[element * width..(element + 1) * width]
    }
}

/// The face topology of one mesh partition.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FaceTopology {
    /// Face → ordered node list (canonically oriented after the
    /// orientation pass).
    pub(crate) face_nodes: Vec<Vec<NodeId>>,
    /// Face → up to two adjacent elements.
    pub(crate) face_elements: Vec<FaceElements>,
    /// Element → face map, indexed by region then sub-region.
    pub(crate) element_faces: Vec<Vec<ElementFaceBlock>>,
    /// Named face sets projected from node sets.
    pub(crate) face_sets: BTreeMap<String, Vec<FaceId>>,
}

impl FaceTopology {
    pub fn face_count(&self) -> usize {
        self.face_nodes.len()
    }

    /// All face ids, in discovery order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.face_nodes.len()).map(FaceId::new)
    }

    /// Ordered node list of a face.
    pub fn nodes(&self, face: FaceId) -> &[NodeId] {
        &self.face_nodes[face.get()]
    }

    /// Up to two elements adjacent to the face.
    pub fn adjacent_elements(&self, face: FaceId) -> &FaceElements {
        &self.face_elements[face.get()]
    }

    /// The global face assigned to one element-local face.
    pub fn element_face(&self, element: ElementRef, local_face: usize) -> FaceId {
        self.element_faces[element.region][element.sub_region].element_faces(element.element)
            [local_face]
    }

    /// The full element→face map of one sub-region.
    pub fn element_face_block(&self, region: usize, sub_region: usize) -> &ElementFaceBlock {
        &self.element_faces[region][sub_region]
    }

    pub fn is_boundary(&self, face: FaceId) -> bool {
        self.face_elements[face.get()].is_boundary()
    }

    /// Faces with exactly one adjacent element, in discovery order.
    pub fn boundary_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces().filter(|&f| self.is_boundary(f))
    }

    /// A named face set, or `None` when no node set of that name existed.
    pub fn face_set(&self, name: &str) -> Option<&[FaceId]> {
        self.face_sets.get(name).map(Vec::as_slice)
    }

    /// Names of all projected face sets, in lexicographic order.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.face_sets.keys().map(String::as_str)
    }

    /// Arithmetic mean of the face's node positions.
    pub fn face_center(&self, face: FaceId, store: &NodeStore) -> Vec3 {
        let coords: Vec<Vec3> = self
            .nodes(face)
            .iter()
            .map(|&n| store.position(n))
            .collect();
        vector::centroid(&coords)
    }

    /// Area-weighted face normal implied by the stored winding.
    ///
    /// After the orientation pass this points outward from the face's first
    /// adjacent element. For 2-node faces the normal lies in the mesh plane,
    /// perpendicular to the directed edge.
    pub fn face_normal(&self, face: FaceId, store: &NodeStore) -> Vec3 {
        let coords: Vec<Vec3> = self
            .nodes(face)
            .iter()
            .map(|&n| store.position(n))
            .collect();
        if coords.len() == 2 {
            let t = vector::sub(coords[1], coords[0]);
            [-t[1], t[0], 0.0]
        } else {
            vector::polygon_area_vector(&coords)
        }
    }

    /// Smallest and largest node count over all faces, or `None` for an
    /// empty topology. Output writers use this to decide whether faces can
    /// be emitted as a fixed-arity array or need arbitrary-polygon support.
    pub fn node_count_range(&self) -> Option<(usize, usize)> {
        match self.face_nodes.iter().map(Vec::len).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(n) => Some((n, n)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }
}
