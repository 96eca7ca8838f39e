//! GraphStore trait — the seam between the connector and its host

use crate::node::{self, GraphNode, NodeId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a host store during registration
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("node rejected: {0}")]
    Rejected(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The host capabilities the connector relies on.
///
/// `register` hands one finished node to the host's node registry — one
/// call per node, no batching, no ordering requirement. `derive_id` and
/// `digest` default to the crate's deterministic algorithms; hosts with
/// their own identity scheme may override both, provided they stay
/// deterministic — the house-link resolver derives foreign keys through
/// the same methods the builder uses.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Hand one finished node to the host.
    async fn register(&self, node: GraphNode) -> StoreResult<()>;

    /// Derive a stable identifier from a seed string.
    fn derive_id(&self, seed: &str) -> NodeId {
        node::derive_id_from_seed(seed)
    }

    /// Digest a node's serialized content.
    fn digest(&self, content: &str) -> String {
        node::content_digest(content)
    }
}
