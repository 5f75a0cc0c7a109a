//! Annotation tagging.
//!
//! Tags are a set: adding a tag an annotation already carries, or removing one it
//! does not carry, changes nothing. Tags are trimmed; blank tags are ignored.
//!
//! All operations return the resulting record, or `None` when the id is unknown.
//! A write only happens (and `updated_at` only moves) when the tag set changes.

use crate::model::{Annotation, AnnotationPatch};
use crate::store::AnnotationStore;
use std::collections::BTreeSet;

fn normalize<S: AsRef<str>>(tags: &[S]) -> impl Iterator<Item = String> + '_ {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn write_tags(store: &mut AnnotationStore, id: &str, current: &BTreeSet<String>, next: BTreeSet<String>) -> Option<Annotation> {
    if &next == current {
        return store.get(id).cloned();
    }
    store.update(id, AnnotationPatch::new().tags(next))
}

/// Unions `tags` into the annotation's tag set.
pub fn add_tags<S: AsRef<str>>(store: &mut AnnotationStore, id: &str, tags: &[S]) -> Option<Annotation> {
    let current = store.get(id)?.tags.clone();
    let mut next = current.clone();
    next.extend(normalize(tags));
    write_tags(store, id, &current, next)
}

/// Drops every tag listed in `tags`.
pub fn remove_tags<S: AsRef<str>>(store: &mut AnnotationStore, id: &str, tags: &[S]) -> Option<Annotation> {
    let current = store.get(id)?.tags.clone();
    let removal: BTreeSet<String> = normalize(tags).collect();
    let next: BTreeSet<String> = current.difference(&removal).cloned().collect();
    write_tags(store, id, &current, next)
}

pub fn clear_tags(store: &mut AnnotationStore, id: &str) -> Option<Annotation> {
    let current = store.get(id)?.tags.clone();
    write_tags(store, id, &current, BTreeSet::new())
}

/// Distinct tags in use, sorted. Scoped to one document when given.
pub fn all_tags(store: &AnnotationStore, document_id: Option<&str>) -> Vec<String> {
    let annotations = match document_id {
        Some(id) => store.by_document(id),
        None => store.all(),
    };
    let tags: BTreeSet<&String> = annotations.iter().flat_map(|a| a.tags.iter()).collect();
    tags.into_iter().cloned().collect()
}
