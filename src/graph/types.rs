//! Dense identifiers for genes and interactions
//!
//! Both ids are positions in the network's backing vectors, so they double
//! as indices into CSR views built from the network.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                $name(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }

            pub fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                $name(index as u64)
            }
        }
    };
}

dense_id!(
    /// Gene node id; equals the gene's insertion position
    NodeId,
    "gene"
);

dense_id!(
    /// Interaction id; equals the edge's insertion position
    EdgeId,
    "edge"
);
