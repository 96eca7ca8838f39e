//! Node identity, digests, and graph node assembly

mod builder;
mod ident;

pub use builder::{build_node, GraphNode, NodeInternal, SourceRecord};
pub use ident::{content_digest, derive_id, derive_id_from_seed, NodeId};
