//! Interaction edges

use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// An undirected physical interaction between two genes
///
/// `source` always holds the smaller NodeId so a pair has one canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    /// Combined confidence score on the unit scale
    pub score: f64,
}

impl Interaction {
    pub fn new(id: EdgeId, a: NodeId, b: NodeId, score: f64) -> Self {
        let (source, target) = canonical_pair(a, b);
        Interaction { id, source, target, score }
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

pub(crate) fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_orientation() {
        let e = Interaction::new(EdgeId::new(0), NodeId::new(5), NodeId::new(2), 0.7);
        assert_eq!(e.source, NodeId::new(2));
        assert_eq!(e.target, NodeId::new(5));
        assert_eq!(e.other(NodeId::new(2)), Some(NodeId::new(5)));
        assert_eq!(e.other(NodeId::new(9)), None);
    }
}
