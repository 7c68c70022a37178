//! The seam between element storage and the face-topology passes.

use crate::geometry::vector::{self, Vec3};
use crate::topology::id::{ElementRef, NodeId};
use crate::topology::nodes::NodeStore;

/// Read-only view over element connectivity, organized as regions of
/// homogeneous sub-region blocks.
///
/// The iteration order implied by the accessors (regions, then sub-regions,
/// then elements, then local faces) is the order the face builder walks;
/// implementors must keep it stable across calls so face numbering is
/// reproducible on identical input.
pub trait ElementSource {
    /// Number of element regions.
    fn region_count(&self) -> usize;

    /// Number of sub-regions (cell blocks) in `region`.
    fn sub_region_count(&self, region: usize) -> usize;

    /// Number of elements in the given sub-region.
    fn element_count(&self, region: usize, sub_region: usize) -> usize;

    /// Number of local faces per element in the given sub-region.
    fn faces_per_element(&self, region: usize, sub_region: usize) -> usize;

    /// Collect the global node ids of one element-local face into `out`
    /// (cleared first), with any fixed-width padding already stripped.
    fn face_nodes(&self, element: ElementRef, local_face: usize, out: &mut Vec<NodeId>);

    /// Collect the element's node ids into `out` (cleared first).
    fn element_nodes(&self, element: ElementRef, out: &mut Vec<NodeId>);

    /// Centroid of one element: the mean of its node positions.
    ///
    /// Implementors with cached centers may override this.
    fn element_center(&self, element: ElementRef, store: &NodeStore) -> Vec3 {
        let mut nodes = Vec::new();
        self.element_nodes(element, &mut nodes);
        let mut sum = [0.0; 3];
        for &n in &nodes {
            sum = vector::add(sum, store.position(n));
        }
        vector::scale(sum, 1.0 / nodes.len() as f64)
    }
}
