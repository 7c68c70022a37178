//! Structured box generators for fixtures and benchmarks.
//!
//! The generators mesh the unit box with a single region holding one cell
//! block, and tag the conventional boundary node sets (`xneg`, `xpos`,
//! `yneg`, `ypos`, and for 3-D `zneg`, `zpos`) the way mesh files usually
//! do.

use crate::mesh_error::MeshFacetError;
use crate::topology::cell_block::{CellBlock, ElementRegion, ElementRegions};
use crate::topology::cell_type::CellType;
use crate::topology::id::NodeId;
use crate::topology::nodes::NodeStore;

/// Structured hex mesh of the unit box with `nx`×`ny`×`nz` cells.
pub fn structured_hex_box(
    nx: usize,
    ny: usize,
    nz: usize,
) -> Result<(ElementRegions, NodeStore), MeshFacetError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(MeshFacetError::InvalidConnectivity(
            "box must have at least one cell per direction".into(),
        ));
    }

    let node_id = |i: usize, j: usize, k: usize| NodeId::new(i + (nx + 1) * (j + (ny + 1) * k));

    let mut positions = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                positions.push([
                    i as f64 / nx as f64,
                    j as f64 / ny as f64,
                    k as f64 / nz as f64,
                ]);
            }
        }
    }
    let mut store = NodeStore::new(positions);

    let mut connectivity = Vec::with_capacity(nx * ny * nz * 8);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                connectivity.extend([
                    node_id(i, j, k),
                    node_id(i + 1, j, k),
                    node_id(i + 1, j + 1, k),
                    node_id(i, j + 1, k),
                    node_id(i, j, k + 1),
                    node_id(i + 1, j, k + 1),
                    node_id(i + 1, j + 1, k + 1),
                    node_id(i, j + 1, k + 1),
                ]);
            }
        }
    }

    let all = |predicate: &dyn Fn(usize, usize, usize) -> bool| {
        let mut nodes = Vec::new();
        for k in 0..=nz {
            for j in 0..=ny {
                for i in 0..=nx {
                    if predicate(i, j, k) {
                        nodes.push(node_id(i, j, k));
                    }
                }
            }
        }
        nodes
    };
    store.insert_set("xneg", all(&|i, _, _| i == 0));
    store.insert_set("xpos", all(&|i, _, _| i == nx));
    store.insert_set("yneg", all(&|_, j, _| j == 0));
    store.insert_set("ypos", all(&|_, j, _| j == ny));
    store.insert_set("zneg", all(&|_, _, k| k == 0));
    store.insert_set("zpos", all(&|_, _, k| k == nz));

    let block = CellBlock::new(CellType::Hexahedron, connectivity, store.len())?;
    let mut region = ElementRegion::new("Domain");
    region.push_block(block);
    let mut regions = ElementRegions::new();
    regions.push_region(region);
    Ok((regions, store))
}

/// Structured quad mesh of the unit square with `nx`×`ny` cells, embedded
/// in the z = 0 plane.
pub fn structured_quad_box(
    nx: usize,
    ny: usize,
) -> Result<(ElementRegions, NodeStore), MeshFacetError> {
    if nx == 0 || ny == 0 {
        return Err(MeshFacetError::InvalidConnectivity(
            "box must have at least one cell per direction".into(),
        ));
    }

    let node_id = |i: usize, j: usize| NodeId::new(i + (nx + 1) * j);

    let mut positions = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            positions.push([i as f64 / nx as f64, j as f64 / ny as f64, 0.0]);
        }
    }
    let mut store = NodeStore::new(positions);

    let mut connectivity = Vec::with_capacity(nx * ny * 4);
    for j in 0..ny {
        for i in 0..nx {
            connectivity.extend([
                node_id(i, j),
                node_id(i + 1, j),
                node_id(i + 1, j + 1),
                node_id(i, j + 1),
            ]);
        }
    }

    let all = |predicate: &dyn Fn(usize, usize) -> bool| {
        let mut nodes = Vec::new();
        for j in 0..=ny {
            for i in 0..=nx {
                if predicate(i, j) {
                    nodes.push(node_id(i, j));
                }
            }
        }
        nodes
    };
    store.insert_set("xneg", all(&|i, _| i == 0));
    store.insert_set("xpos", all(&|i, _| i == nx));
    store.insert_set("yneg", all(&|_, j| j == 0));
    store.insert_set("ypos", all(&|_, j| j == ny));

    let block = CellBlock::new(CellType::Quadrilateral, connectivity, store.len())?;
    let mut region = ElementRegion::new("Domain");
    region.push_block(block);
    let mut regions = ElementRegions::new();
    regions.push_region(region);
    Ok((regions, store))
}
