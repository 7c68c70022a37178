//! Geometry utilities for mesh-facet.
//!
//! This module provides the 3-vector arithmetic used by the face-frame and
//! orientation computations.

pub mod vector;
