pub mod common;
pub mod centrality;
pub mod community;
pub mod layout;

pub use common::{GraphView, NodeId};
pub use centrality::{degree_centrality, normalized_degree_centrality, top_hubs};
pub use community::{connected_components, ComponentResult};
pub use layout::{spring_layout, Layout, LayoutConfig, Position, MAX_SPACING};
