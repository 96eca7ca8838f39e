//! Node identity and content digests
//!
//! Identifiers are UUID v5 values derived from a namespaced seed string, so
//! the same record always maps to the same node across runs. Digests are
//! SHA-256 over the serialized record and change exactly when the content
//! changes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// UUID v5 namespace under which all connector identifiers live.
const POTTER_NS: Uuid = Uuid::from_bytes([
    0x5a, 0x1e, 0x6b, 0x42, 0x8f, 0x0d, 0x4c, 0x3a,
    0xb6, 0x51, 0x2e, 0x90, 0x7d, 0x18, 0xa4, 0x3f,
]);

/// Unique identifier for a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a NodeId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the identifier for a record from its namespace and source key.
///
/// Deterministic: identical `(namespace, source_key)` pairs always yield the
/// same id, distinct pairs yield distinct ids. The two parts are joined with
/// a separator before hashing; namespaces are fixed strings, so the joined
/// seed is unambiguous.
pub fn derive_id(namespace: &str, source_key: &str) -> NodeId {
    derive_id_from_seed(&format!("{}-{}", namespace, source_key))
}

/// Derive an identifier from an already-assembled seed string.
///
/// Hosts that override [`crate::GraphStore::derive_id`] receive the seed in
/// this form.
pub fn derive_id_from_seed(seed: &str) -> NodeId {
    NodeId(Uuid::new_v5(&POTTER_NS, seed.as_bytes()))
}

/// SHA-256 hex digest of a node's serialized content.
pub fn content_digest(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}
