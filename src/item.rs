//! Recipe items and the immutable list snapshots built from them.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the item cache.
///
/// Every cache update builds a new list; snapshots handed to subscribers
/// are never mutated afterwards.
pub type ItemList = Arc<[Item]>;

/// A single recipe as listed by the collection endpoint.
///
/// `id` is the identity: two items with the same id are the same entity
/// even if other fields differ between fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "name")]
    pub title: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "image", default)]
    pub image_ref: String,
    /// Detail-only fields, absent from slim list payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(
        rename = "prepTimeMinutes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time_minutes: Option<u32>,
}

/// Build a list from fetched items, keeping the first occurrence of each id.
pub fn dedup_list(items: Vec<Item>) -> ItemList {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect()
}

/// Append a fetched page to `prior`, dropping ids already present.
///
/// Prior items keep their positions; the result is a fresh list.
pub fn append_page(prior: &[Item], page: Vec<Item>) -> ItemList {
    let mut seen: HashSet<u64> = prior.iter().map(|item| item.id).collect();
    prior
        .iter()
        .cloned()
        .chain(page.into_iter().filter(|item| seen.insert(item.id)))
        .collect()
}

/// The empty list published on cleared searches and at startup.
pub fn empty_list() -> ItemList {
    Arc::from(Vec::new())
}
