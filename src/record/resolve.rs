//! House-link resolution
//!
//! The API reports a character's house as a *name*; graph consumers need
//! the house node's identifier. Resolution builds a name index over the
//! houses once, then rewrites every character's foreign key in a single
//! pass. No match means an explicit `None` — never an error, never a
//! dangling reference.

use super::types::{Character, House, RecordKind};
use crate::node::NodeId;
use crate::store::GraphStore;
use std::collections::HashMap;

/// Attach house foreign keys to a character collection.
///
/// Pure transformation: takes the characters by value and returns new
/// records, leaving the house collection untouched. Identifiers come from
/// the store's `derive_id` with the same seed rule the node builder applies,
/// so references always agree with the ids the house nodes receive.
///
/// Matching is case-sensitive exact equality on the house name. When two
/// houses share a name the first occurrence wins; upstream treats `_id` as
/// unique but does not guarantee unique names.
pub fn resolve_house_links(
    houses: &[House],
    characters: Vec<Character>,
    store: &dyn GraphStore,
) -> Vec<Character> {
    let mut index: HashMap<&str, NodeId> = HashMap::with_capacity(houses.len());
    for house in houses {
        index
            .entry(house.name.as_str())
            .or_insert_with(|| store.derive_id(&RecordKind::House.seed(&house.id)));
    }

    characters
        .into_iter()
        .map(|mut character| {
            character.house_ref = character
                .house
                .as_deref()
                .and_then(|name| index.get(name).copied());
            character
        })
        .collect()
}
