//! Gene nodes

use super::types::NodeId;
use crate::expression::ExpressionStatus;
use serde::{Deserialize, Serialize};

/// A gene in the interaction network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneNode {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Gene symbol (network key)
    pub symbol: String,

    /// Description from the pathway record
    pub description: String,

    /// Log fold-change from the expression overlay (0.0 when absent)
    pub log_fc: f64,
}

impl GeneNode {
    pub fn new(id: NodeId, symbol: impl Into<String>, description: impl Into<String>, log_fc: f64) -> Self {
        GeneNode {
            id,
            symbol: symbol.into(),
            description: description.into(),
            log_fc,
        }
    }

    pub fn status(&self) -> ExpressionStatus {
        ExpressionStatus::from_log_fc(self.log_fc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_log_fc() {
        let up = GeneNode::new(NodeId::new(0), "APP", "amyloid beta precursor protein", 2.0);
        assert_eq!(up.status(), ExpressionStatus::Up);

        let flat = GeneNode::new(NodeId::new(1), "MAPT", "", 0.0);
        assert_eq!(flat.status(), ExpressionStatus::Neutral);
    }
}
