//! Algorithms over the topology data model: face discovery, orientation,
//! set projection, and fixture mesh generation.

pub mod face_build;
pub mod face_sets;
pub mod meshgen;
pub mod orientation;

pub use face_build::{build, build_faces};
