/// Media data models
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single tracked book, movie, game, or show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaItem {
    /// Unique only within the owning account's collection
    pub uid: i64,
    pub title: String,
    /// mm/dd/yyyy, mm/yyyy or yyyy
    pub release_date: String,
    pub medium: String,
    pub description: String,
    /// Link to a thumbnail image, empty if none
    pub thumbnail: String,
    pub rating: i32,
    /// Empty when not linked to an external platform
    pub linked_platform: String,
    pub notes: String,
}

/// Position of one media item inside a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub uid: i64,
    pub order: i32,
}

/// A named, ordered grouping of media items.
///
/// Entries reference items by uid; the list never owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaList {
    /// Unique within the owning account
    pub name: String,
    pub description: String,
    /// Allowed mediums; empty means every medium is allowed
    pub media_types: BTreeSet<String>,
    pub contents: Vec<ListEntry>,
}
