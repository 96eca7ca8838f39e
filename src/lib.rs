//! Accio: content-graph sourcing for the Potter REST API
//!
//! A data-source connector that fetches four reference collections —
//! houses, characters, spells, and the sorting-hat value — converts each
//! record into a content-addressed graph node, links characters to their
//! houses by derived identifier, and registers every node with an injected
//! [`GraphStore`].
//!
//! # Core Concepts
//!
//! - **Records**: typed models of the upstream JSON, lossless via
//!   unknown-field preservation
//! - **Nodes**: records wrapped with a deterministic identifier and a
//!   content digest, in the wire shape the host graph recognizes
//! - **Resolution**: character→house foreign keys, absent (never dangling)
//!   when no house matches
//!
//! # Example
//!
//! ```no_run
//! use accio::{source_nodes, MemoryStore, SourceConfig};
//!
//! # async fn run() -> Result<(), accio::SourceError> {
//! let config = SourceConfig::new("my-api-key");
//! let store = MemoryStore::new();
//! let summary = source_nodes(&config, &store).await?;
//! println!("registered {} nodes", summary.total());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod node;
mod record;
mod source;
mod store;

pub use client::PotterClient;
pub use config::{SourceConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use node::{
    build_node, content_digest, derive_id, derive_id_from_seed, GraphNode, NodeId, NodeInternal,
    SourceRecord,
};
pub use record::{resolve_house_links, Character, House, RecordKind, SortingHat, Spell};
pub use source::{source_nodes, SourceError, SourceResult, SourceSummary};
pub use store::{GraphStore, MemoryStore, StoreError, StoreResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
