//! Graph node assembly
//!
//! Wraps a raw record with the metadata the host's node registry expects:
//! a derived identifier, empty parent/child links, the serialized content,
//! and its digest. Building is pure — the record is serialized once and the
//! input is never mutated.

use super::ident::NodeId;
use crate::record::RecordKind;
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A record that can be wrapped into a graph node.
pub trait SourceRecord: Serialize {
    /// The node kind this record maps to.
    fn kind(&self) -> RecordKind;

    /// Source-provided unique key, or a content-derived key for records
    /// without one.
    fn source_key(&self) -> Cow<'_, str>;

    /// Top-level fields merged into the node wrapper. Records that
    /// serialize to a JSON object merge their own fields; anything else
    /// must override.
    fn fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Ok(Map::from_iter([(String::from("value"), other)])),
        }
    }
}

/// Identity and content metadata, under the host's exact field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInternal {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// The record as it was serialized for digesting.
    pub content: String,
    #[serde(rename = "contentDigest")]
    pub content_digest: String,
}

/// A record wrapped for insertion into the host's content graph.
///
/// Serializes to the wire shape the host recognizes: `id`, `parent`,
/// `children` and `internal` metadata, with all original record fields
/// flattened at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Always absent — sourced nodes are roots.
    pub parent: Option<NodeId>,
    /// Always empty at build time; the host may attach children later.
    pub children: Vec<NodeId>,
    pub internal: NodeInternal,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Wrap a record into a [`GraphNode`].
///
/// The id and digest come from the store's capabilities so hosts that
/// supply their own identity scheme stay consistent; the defaults are
/// [`derive_id_from_seed`](super::derive_id_from_seed) and
/// [`content_digest`](super::content_digest). The record is serialized
/// exactly once and that serialization feeds both the content and its
/// digest.
pub fn build_node<R: SourceRecord>(
    record: &R,
    store: &dyn GraphStore,
) -> Result<GraphNode, serde_json::Error> {
    let kind = record.kind();
    let content = serde_json::to_string(record)?;
    let content_digest = store.digest(&content);
    let id = store.derive_id(&kind.seed(record.source_key().as_ref()));

    Ok(GraphNode {
        id,
        parent: None,
        children: Vec::new(),
        internal: NodeInternal {
            kind,
            content,
            content_digest,
        },
        fields: record.fields()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{content_digest, derive_id_from_seed};
    use crate::record::{Character, House, SortingHat, Spell};
    use crate::store::MemoryStore;
    use serde_json::json;

    fn house() -> House {
        serde_json::from_value(json!({
            "_id": "5a05e2b252f721a3cf2ea33f",
            "name": "Gryffindor",
            "mascot": "lion",
            "headOfHouse": "Minerva McGonagall",
            "houseGhost": "Nearly Headless Nick",
            "founder": "Godric Gryffindor",
            "colors": ["scarlet", "gold"],
            "values": ["courage", "bravery"],
        }))
        .unwrap()
    }

    #[test]
    fn node_has_empty_links() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn id_comes_from_kind_namespace_and_source_key() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        assert_eq!(
            node.id,
            derive_id_from_seed("potterapi-house-5a05e2b252f721a3cf2ea33f")
        );
    }

    #[test]
    fn digest_covers_the_serialized_content() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        assert_eq!(node.internal.content_digest, content_digest(&node.internal.content));

        let mut renamed = house();
        renamed.mascot = Some("badger".into());
        let other = build_node(&renamed, &store).unwrap();
        assert_ne!(node.internal.content_digest, other.internal.content_digest);
    }

    #[test]
    fn content_parses_back_to_the_record() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        let round: House = serde_json::from_str(&node.internal.content).unwrap();
        assert_eq!(round.id, "5a05e2b252f721a3cf2ea33f");
        assert_eq!(round.name, "Gryffindor");
    }

    #[test]
    fn record_fields_flatten_to_the_top_level() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        let wire = serde_json::to_value(&node).unwrap();

        assert_eq!(wire["_id"], "5a05e2b252f721a3cf2ea33f");
        assert_eq!(wire["name"], "Gryffindor");
        assert_eq!(wire["internal"]["type"], "HarryPotterHouse");
        assert!(wire["internal"]["contentDigest"].is_string());
        assert!(wire["parent"].is_null());
        assert_eq!(wire["children"], json!([]));
    }

    #[test]
    fn character_node_carries_the_link_field() {
        let store = MemoryStore::new();
        let character: Character = serde_json::from_value(json!({
            "_id": "9",
            "name": "Harry Potter",
            "house": "Gryffindor",
        }))
        .unwrap();

        let wire = serde_json::to_value(build_node(&character, &store).unwrap()).unwrap();
        // Unresolved here — resolution runs before building in the pipeline.
        assert!(wire["house___NODE"].is_null());
        assert_eq!(wire["house"], "Gryffindor");
    }

    #[test]
    fn spell_node_keeps_the_type_field_name() {
        let store = MemoryStore::new();
        let spell: Spell = serde_json::from_value(json!({
            "_id": "3",
            "spell": "Expelliarmus",
            "type": "Charm",
            "effect": "Disarms opponent",
        }))
        .unwrap();

        let wire = serde_json::to_value(build_node(&spell, &store).unwrap()).unwrap();
        assert_eq!(wire["type"], "Charm");
        assert_eq!(wire["internal"]["type"], "HarryPotterSpell");
    }

    #[test]
    fn sorting_hat_identity_is_content_derived() {
        let store = MemoryStore::new();
        let hat = SortingHat(json!("Hufflepuff"));
        let node = build_node(&hat, &store).unwrap();

        assert_eq!(
            node.id,
            derive_id_from_seed(r#"potterapi-sorting-hat-"Hufflepuff""#)
        );
        assert_eq!(node.internal.content, r#""Hufflepuff""#);

        let wire = serde_json::to_value(&node).unwrap();
        assert_eq!(wire["house"], "Hufflepuff");
    }

    #[test]
    fn node_round_trips_through_serde() {
        let store = MemoryStore::new();
        let node = build_node(&house(), &store).unwrap();
        let wire = serde_json::to_string(&node).unwrap();
        let back: GraphNode = serde_json::from_str(&wire).unwrap();
        assert_eq!(back.id, node.id);
        assert_eq!(back.internal.content_digest, node.internal.content_digest);
        assert_eq!(back.fields, node.fields);
    }
}
