//! Gene interaction network
//!
//! This module implements the undirected network the dashboard renders:
//! - Gene nodes keyed by symbol, carrying description and LogFC
//! - Interaction edges carrying a unit-scale confidence score
//! - Construction from a gene selection, interaction records and a threshold

pub mod builder;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::{BuildStats, NetworkBuilder};
pub use edge::Interaction;
pub use node::GeneNode;
pub use store::{EdgeInsert, InteractionNetwork, NetworkError, NetworkResult};
pub use types::{EdgeId, NodeId};
