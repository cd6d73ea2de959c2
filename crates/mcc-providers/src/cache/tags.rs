//! Tag index
//!
//! Many-to-many mapping between tags and cache keys. A key belongs to the
//! tags of the entry last stored under it; removing the key by any path
//! drops it from all of them. Tags with no keys left are forgotten.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Tag to key index shared by the cache stores
///
/// Not synchronized; stores keep it behind the same lock as their entries
/// or behind a lock of its own.
#[derive(Debug, Default, Clone)]
pub struct TagIndex {
    keys_by_tag: HashMap<String, HashSet<String>>,
    tags_by_key: HashMap<String, BTreeSet<String>>,
}

impl TagIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tags of the entry stored under `key`
    ///
    /// Replaces any memberships `key` had before.
    pub fn insert(&mut self, key: &str, tags: &BTreeSet<String>) {
        self.remove_key(key);
        if tags.is_empty() {
            return;
        }

        for tag in tags {
            self.keys_by_tag
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
        self.tags_by_key.insert(key.to_string(), tags.clone());
    }

    /// Drop `key` from every tag it belongs to
    pub fn remove_key(&mut self, key: &str) {
        let Some(tags) = self.tags_by_key.remove(key) else {
            return;
        };

        for tag in tags {
            if let Some(keys) = self.keys_by_tag.get_mut(&tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.keys_by_tag.remove(&tag);
                }
            }
        }
    }

    /// Remove `tag` and every key that carried it
    ///
    /// The returned keys are also dropped from their other tags.
    pub fn take_tag(&mut self, tag: &str) -> Vec<String> {
        let Some(keys) = self.keys_by_tag.remove(tag) else {
            return Vec::new();
        };

        let keys: Vec<String> = keys.into_iter().collect();
        for key in &keys {
            self.remove_key(key);
        }
        keys
    }

    /// Keys currently carrying `tag`
    pub fn keys_for(&self, tag: &str) -> Vec<String> {
        self.keys_by_tag
            .get(tag)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Tags currently attached to `key`
    pub fn tags_for(&self, key: &str) -> BTreeSet<String> {
        self.tags_by_key.get(key).cloned().unwrap_or_default()
    }

    /// Keep only the keys accepted by `live`
    pub fn retain_keys<F>(&mut self, mut live: F)
    where
        F: FnMut(&str) -> bool,
    {
        let dead: Vec<String> = self
            .tags_by_key
            .keys()
            .filter(|key| !live(key.as_str()))
            .cloned()
            .collect();
        for key in dead {
            self.remove_key(&key);
        }
    }

    /// Number of tags with at least one key
    pub fn tag_count(&self) -> usize {
        self.keys_by_tag.len()
    }

    /// Whether the index holds no tags
    pub fn is_empty(&self) -> bool {
        self.keys_by_tag.is_empty()
    }

    /// Forget every tag
    pub fn clear(&mut self) {
        self.keys_by_tag.clear();
        self.tags_by_key.clear();
    }
}
