//! In-memory element blocks grouped into regions.
//!
//! A [`CellBlock`] is one homogeneous sub-region: a cell type plus a flat
//! row-major element-to-node relation. Blocks are collected into named
//! [`ElementRegion`]s, and [`ElementRegions`] is the canonical
//! [`ElementSource`] over all of them.

use crate::mesh_error::MeshFacetError;
use crate::topology::cell_type::{CellType, UNUSED};
use crate::topology::element_source::ElementSource;
use crate::topology::id::{ElementRef, NodeId};

/// One homogeneous block of elements.
#[derive(Clone, Debug)]
pub struct CellBlock {
    cell_type: CellType,
    element_nodes: Vec<NodeId>,
}

impl CellBlock {
    /// Creates a block from a flat row-major connectivity list.
    ///
    /// `node_count` is the size of the node arena the connectivity points
    /// into; indices at or beyond it are rejected.
    pub fn new(
        cell_type: CellType,
        element_nodes: Vec<NodeId>,
        node_count: usize,
    ) -> Result<Self, MeshFacetError> {
        let width = cell_type.node_count();
        if element_nodes.len() % width != 0 {
            return Err(MeshFacetError::InvalidConnectivity(format!(
                "connectivity length {} is not a multiple of {width} ({cell_type:?})",
                element_nodes.len()
            )));
        }
        if let Some(bad) = element_nodes.iter().find(|n| n.get() >= node_count) {
            return Err(MeshFacetError::InvalidConnectivity(format!(
                "node {bad} out of range (node count {node_count})"
            )));
        }
        Ok(CellBlock {
            cell_type,
            element_nodes,
        })
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn element_count(&self) -> usize {
        self.element_nodes.len() / self.cell_type.node_count()
    }

    /// Node ids of one element, in reference-topology order.
    pub fn element_nodes(&self, element: usize) -> &[NodeId] {
        let width = self.cell_type.node_count();
        &self.element_nodes[element * width..(element + 1) * width]
    }

    /// Collect the global node ids of one local face into `out` (cleared
    /// first). This is the single place where the fixed-width padding
    /// sentinel is stripped: padding is trailing only, so the row is cut at
    /// the first unused slot.
    pub fn face_nodes(&self, element: usize, local_face: usize, out: &mut Vec<NodeId>) {
        out.clear();
        let row = self.element_nodes(element);
        for &slot in self.cell_type.local_face_slots(local_face) {
            if slot == UNUSED {
                break;
            }
            out.push(row[slot]);
        }
    }
}

/// A named region holding one or more cell blocks (sub-regions).
#[derive(Clone, Debug)]
pub struct ElementRegion {
    name: String,
    blocks: Vec<CellBlock>,
}

impl ElementRegion {
    pub fn new(name: impl Into<String>) -> Self {
        ElementRegion {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push_block(&mut self, block: CellBlock) {
        self.blocks.push(block);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[CellBlock] {
        &self.blocks
    }
}

/// All element regions of one mesh partition.
#[derive(Clone, Debug, Default)]
pub struct ElementRegions {
    regions: Vec<ElementRegion>,
}

impl ElementRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_region(&mut self, region: ElementRegion) {
        self.regions.push(region);
    }

    pub fn regions(&self) -> &[ElementRegion] {
        &self.regions
    }

    pub fn block(&self, region: usize, sub_region: usize) -> &CellBlock {
        &self.regions[region].blocks()[sub_region]
    }

    /// Total number of elements across all blocks.
    pub fn total_element_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| r.blocks())
            .map(CellBlock::element_count)
            .sum()
    }
}

impl ElementSource for ElementRegions {
    fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn sub_region_count(&self, region: usize) -> usize {
        self.regions[region].blocks().len()
    }

    fn element_count(&self, region: usize, sub_region: usize) -> usize {
        self.block(region, sub_region).element_count()
    }

    fn faces_per_element(&self, region: usize, sub_region: usize) -> usize {
        self.block(region, sub_region).cell_type().face_count()
    }

    fn face_nodes(&self, element: ElementRef, local_face: usize, out: &mut Vec<NodeId>) {
        self.block(element.region, element.sub_region)
            .face_nodes(element.element, local_face, out)
    }

    fn element_nodes(&self, element: ElementRef, out: &mut Vec<NodeId>) {
        out.clear();
        out.extend_from_slice(
            self.block(element.region, element.sub_region)
                .element_nodes(element.element),
        );
    }
}
