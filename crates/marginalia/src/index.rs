//! # Secondary Indices: Document and Target Buckets
//!
//! The store answers "all annotations of document D" and "all annotations on target T"
//! without scanning. Both lookups are served by a [`BucketIndex`]: a string key mapped to
//! the set of annotation ids currently filed under it.
//!
//! ## Derived, Never Authoritative
//!
//! Indices are a projection of the primary map. The store keeps this invariant between
//! operations:
//!
//! - every live annotation id sits in exactly one bucket of the document index, keyed by
//!   its current `document_id`;
//! - every live annotation id sits in exactly one bucket of the target index, keyed by its
//!   current `target.id`.
//!
//! When either key changes, the id is moved with [`BucketIndex::relocate`], never
//! re-added on top of a stale entry. Buckets that drain are dropped so `keys()` only
//! reports keys that still have annotations.
//!
//! ## Ordering
//!
//! Buckets are hash sets and carry no order. Callers that materialize records sort them
//! (see [`crate::store`]).

use crate::model::AnnotationId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct BucketIndex {
    buckets: HashMap<String, HashSet<AnnotationId>>,
}

impl BucketIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `id` under `key`. Returns `false` if it was already there.
    pub fn insert(&mut self, key: &str, id: &AnnotationId) -> bool {
        self.buckets
            .entry(key.to_string())
            .or_default()
            .insert(id.clone())
    }

    /// Removes `id` from `key`, dropping the bucket once it is empty.
    pub fn remove(&mut self, key: &str, id: &AnnotationId) -> bool {
        let Some(bucket) = self.buckets.get_mut(key) else {
            return false;
        };
        let removed = bucket.remove(id);
        if bucket.is_empty() {
            self.buckets.remove(key);
        }
        removed
    }

    /// Moves `id` from one bucket to another. A no-op when the keys are equal.
    pub fn relocate(&mut self, from: &str, to: &str, id: &AnnotationId) {
        if from == to {
            return;
        }
        self.remove(from, id);
        self.insert(to, id);
    }

    pub fn get(&self, key: &str) -> Option<&HashSet<AnnotationId>> {
        self.buckets.get(key)
    }

    pub fn contains(&self, key: &str, id: &AnnotationId) -> bool {
        self.buckets
            .get(key)
            .is_some_and(|bucket| bucket.contains(id))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
