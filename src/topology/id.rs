//! Dense index handles for nodes, faces, and elements.
//!
//! Nodes and faces are referenced by 0-based contiguous indices into
//! externally-owned arenas; the newtypes keep the two index spaces from
//! mixing. An element is addressed by its (region, sub-region, element)
//! triple. There are no pointer cycles between entities, only indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node in the node store.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn new(raw: usize) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a face, assigned densely at discovery time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FaceId(usize);

impl FaceId {
    #[inline]
    pub const fn new(raw: usize) -> Self {
        FaceId(raw)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceId").field(&self.0).finish()
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An element addressed by region, sub-region, and local element index.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ElementRef {
    pub region: usize,
    pub sub_region: usize,
    pub element: usize,
}

impl ElementRef {
    #[inline]
    pub const fn new(region: usize, sub_region: usize, element: usize) -> Self {
        ElementRef {
            region,
            sub_region,
            element,
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region {}, sub-region {}, element {}",
            self.region, self.sub_region, self.element
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display() {
        let n = NodeId::new(7);
        assert_eq!(format!("{n:?}"), "NodeId(7)");
        assert_eq!(format!("{n}"), "7");
        let e = ElementRef::new(0, 1, 5);
        assert_eq!(format!("{e}"), "region 0, sub-region 1, element 5");
    }

    #[test]
    fn ordering_and_hash() {
        use std::collections::HashSet;
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        assert!(a < b);
        let set: HashSet<NodeId> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let f = FaceId::new(123);
        let s = serde_json::to_string(&f).unwrap();
        assert_eq!(serde_json::from_str::<FaceId>(&s).unwrap(), f);
        let e = ElementRef::new(2, 0, 9);
        let bytes = bincode::serialize(&e).unwrap();
        assert_eq!(bincode::deserialize::<ElementRef>(&bytes).unwrap(), e);
    }
}
