//! In-memory GraphStore
//!
//! The embedded store: keeps registered nodes in a concurrent map keyed by
//! node id. Registering a duplicate id replaces the earlier node.

use super::traits::{GraphStore, StoreResult};
use crate::node::{GraphNode, NodeId};
use crate::record::RecordKind;
use async_trait::async_trait;
use dashmap::DashMap;

/// A concurrent in-memory node registry.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: DashMap<NodeId, GraphNode>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fetch a node by id
    pub fn get(&self, id: &NodeId) -> Option<GraphNode> {
        self.nodes.get(id).map(|n| n.clone())
    }

    /// Snapshot of all registered nodes
    pub fn nodes(&self) -> Vec<GraphNode> {
        self.nodes.iter().map(|n| n.clone()).collect()
    }

    /// Snapshot of the registered nodes of one kind
    pub fn nodes_of_kind(&self, kind: RecordKind) -> Vec<GraphNode> {
        self.nodes
            .iter()
            .filter(|n| n.internal.kind == kind)
            .map(|n| n.clone())
            .collect()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn register(&self, node: GraphNode) -> StoreResult<()> {
        self.nodes.insert(node.id, node);
        Ok(())
    }
}
