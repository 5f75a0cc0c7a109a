use crate::index::BucketIndex;
use crate::model::{Annotation, AnnotationId, AnnotationPatch, NewAnnotation};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, trace};

/// In-memory annotation store with document and target indices.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: HashMap<AnnotationId, Annotation>,
    document_index: BucketIndex,
    target_index: BucketIndex,
}

/// Orders records oldest first, ties broken by id.
pub(crate) fn sort_by_creation(list: &mut [&Annotation]) {
    list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new annotation with a fresh id and `created_at == updated_at == now`.
    pub fn create(&mut self, data: NewAnnotation) -> Annotation {
        let annotation = Annotation::from_new(data);
        self.document_index
            .insert(&annotation.document_id, &annotation.id);
        self.target_index
            .insert(annotation.target_id(), &annotation.id);
        self.annotations
            .insert(annotation.id.clone(), annotation.clone());

        debug!(
            id = %annotation.id,
            document_id = %annotation.document_id,
            target_id = %annotation.target_id(),
            "created annotation"
        );
        annotation
    }

    /// Merges `patch` over the stored record and bumps `updated_at`.
    ///
    /// Returns `None` if `id` is unknown.
    pub fn update(&mut self, id: &str, patch: AnnotationPatch) -> Option<Annotation> {
        let current = self.annotations.get(id)?;
        let old_document = current.document_id.clone();
        let old_target = current.target_id().to_string();

        let mut next = current.clone();
        patch.apply_to(&mut next);
        // Imported records may carry a creation time ahead of this clock.
        next.updated_at = Utc::now().max(next.created_at);

        self.relocate(&next.id, &old_document, &old_target, &next.document_id, next.target_id());
        self.annotations.insert(next.id.clone(), next.clone());

        debug!(id = %next.id, "updated annotation");
        Some(next)
    }

    /// Removes the annotation from both indices, then from the primary map.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(current) = self.annotations.get(id) else {
            return false;
        };
        let key = current.id.clone();
        let document_id = current.document_id.clone();
        let target_id = current.target_id().to_string();

        self.document_index.remove(&document_id, &key);
        self.target_index.remove(&target_id, &key);
        self.annotations.remove(&key);

        debug!(id = %key, "deleted annotation");
        true
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.annotations.contains_key(id)
    }

    /// Places a fully formed record, keeping its id and timestamps.
    ///
    /// A record with the same id is replaced and its index entries relocated.
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, annotation: Annotation) -> Option<Annotation> {
        match self.annotations.get(annotation.id.as_str()) {
            Some(existing) => {
                let old_document = existing.document_id.clone();
                let old_target = existing.target_id().to_string();
                self.relocate(
                    &annotation.id,
                    &old_document,
                    &old_target,
                    &annotation.document_id,
                    annotation.target_id(),
                );
            }
            None => {
                self.document_index
                    .insert(&annotation.document_id, &annotation.id);
                self.target_index
                    .insert(annotation.target_id(), &annotation.id);
            }
        }
        self.annotations.insert(annotation.id.clone(), annotation)
    }

    /// Every stored annotation, oldest first.
    pub fn all(&self) -> Vec<&Annotation> {
        let mut list: Vec<&Annotation> = self.annotations.values().collect();
        sort_by_creation(&mut list);
        list
    }

    /// Annotations filed under `document_id`, oldest first. Unknown documents yield `[]`.
    pub fn by_document(&self, document_id: &str) -> Vec<&Annotation> {
        self.resolve(&self.document_index, document_id)
    }

    /// Annotations filed under `target_id`, oldest first.
    pub fn by_target(&self, target_id: &str) -> Vec<&Annotation> {
        self.resolve(&self.target_index, target_id)
    }

    /// Documents with at least one annotation, sorted.
    pub fn document_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.document_index.keys().collect();
        ids.sort_unstable();
        ids
    }

    /// Distinct target ids annotated within `document_id`, sorted.
    pub fn target_ids(&self, document_id: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .by_document(document_id)
            .into_iter()
            .map(Annotation::target_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
        self.document_index.clear();
        self.target_index.clear();
        debug!("cleared annotation store");
    }

    fn resolve(&self, index: &BucketIndex, key: &str) -> Vec<&Annotation> {
        let Some(bucket) = index.get(key) else {
            return Vec::new();
        };
        let mut list: Vec<&Annotation> = bucket
            .iter()
            .filter_map(|id| {
                let found = self.annotations.get(id);
                if found.is_none() {
                    trace!(id = %id, key, "dropping dangling index entry");
                }
                found
            })
            .collect();
        sort_by_creation(&mut list);
        list
    }

    /// Moves `id` between buckets in both indices when its keys changed.
    fn relocate(
        &mut self,
        id: &AnnotationId,
        old_document: &str,
        old_target: &str,
        new_document: &str,
        new_target: &str,
    ) {
        if old_document != new_document || old_target != new_target {
            debug!(
                id = %id,
                from_document = old_document,
                to_document = new_document,
                from_target = old_target,
                to_target = new_target,
                "relocating annotation"
            );
        }
        self.document_index.relocate(old_document, new_document, id);
        self.target_index.relocate(old_target, new_target, id);
    }

    /// Checks the index invariant: every live id in exactly one bucket of each index,
    /// under its current keys, and nothing else in the indices.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn indices_consistent(&self) -> bool {
        let counts_match = self.document_index.entry_count() == self.annotations.len()
            && self.target_index.entry_count() == self.annotations.len();
        counts_match
            && self.annotations.values().all(|a| {
                self.document_index.contains(&a.document_id, &a.id)
                    && self.target_index.contains(a.target_id(), &a.id)
            })
    }

    #[cfg(test)]
    pub(crate) fn document_index_mut(&mut self) -> &mut BucketIndex {
        &mut self.document_index
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AnnotationTarget, AnnotationType, HighlightColor};

    pub fn highlight(document_id: &str, target_id: &str) -> NewAnnotation {
        NewAnnotation::new(
            document_id,
            "user-1",
            AnnotationTarget::paragraph(target_id),
            AnnotationType::Highlight,
            HighlightColor::Yellow,
        )
    }

    pub fn note(document_id: &str, target_id: &str, content: &str) -> NewAnnotation {
        NewAnnotation::new(
            document_id,
            "user-1",
            AnnotationTarget::paragraph(target_id),
            AnnotationType::Note,
            HighlightColor::Blue,
        )
        .with_content(content)
    }

    pub struct StoreFixture {
        pub store: AnnotationStore,
        pub ids: Vec<AnnotationId>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: AnnotationStore::new(),
                ids: Vec::new(),
            }
        }

        pub fn with(mut self, data: NewAnnotation) -> Self {
            let created = self.store.create(data);
            self.ids.push(created.id);
            self
        }

        pub fn with_highlights(mut self, count: usize, document_id: &str, target_id: &str) -> Self {
            for _ in 0..count {
                self = self.with(highlight(document_id, target_id));
            }
            self
        }

        /// The two-annotation scenario: a yellow highlight and a blue, tagged note,
        /// both on `doc-1` / `p-1`.
        pub fn scenario() -> Self {
            Self::new().with(highlight("doc-1", "p-1")).with(
                NewAnnotation::new(
                    "doc-1",
                    "user-1",
                    AnnotationTarget::paragraph("p-1"),
                    AnnotationType::Note,
                    HighlightColor::Blue,
                )
                .with_tags(["important"]),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{highlight, note, StoreFixture};
    use super::*;
    use crate::model::{AnnotationTarget, HighlightColor};
    use chrono::Duration;

    #[test]
    fn test_create_then_get_returns_input_plus_identity() {
        let mut store = AnnotationStore::new();
        let input = note("doc-1", "p-1", "body").with_tags(["x"]);
        let created = store.create(input.clone());

        let fetched = store.get(created.id.as_str()).unwrap();
        assert_eq!(fetched, &created);
        assert_eq!(fetched.created_at, fetched.updated_at);
        assert_eq!(fetched.document_id, input.document_id);
        assert_eq!(fetched.target, input.target);
        assert_eq!(fetched.content, input.content);
        assert_eq!(fetched.tags, input.tags);
        assert!(store.indices_consistent());
    }

    #[test]
    fn test_update_unknown_returns_none() {
        let mut store = AnnotationStore::new();
        assert!(store.update("missing", AnnotationPatch::new()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_merges_and_bumps_updated_at() {
        let mut fixture = StoreFixture::new().with(highlight("doc-1", "p-1"));
        let id = fixture.ids[0].clone();

        let updated = fixture
            .store
            .update(id.as_str(), AnnotationPatch::new().color(HighlightColor::Green))
            .unwrap();

        assert_eq!(updated.color, HighlightColor::Green);
        assert_eq!(updated.id, id);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(fixture.store.get(id.as_str()), Some(&updated));
    }

    #[test]
    fn test_update_relocates_document_and_target() {
        let mut fixture = StoreFixture::new().with(highlight("doc-1", "p-1"));
        let id = fixture.ids[0].clone();

        fixture.store.update(
            id.as_str(),
            AnnotationPatch::new()
                .document("doc-2")
                .target(AnnotationTarget::sentence("s-9")),
        );

        assert!(fixture.store.by_document("doc-1").is_empty());
        assert!(fixture.store.by_target("p-1").is_empty());
        assert_eq!(fixture.store.by_document("doc-2").len(), 1);
        assert_eq!(fixture.store.by_target("s-9").len(), 1);
        assert!(fixture.store.indices_consistent());
    }

    #[test]
    fn test_update_keeps_updated_at_after_future_created_at() {
        let mut store = AnnotationStore::new();
        let mut record = Annotation::from_new(highlight("doc-1", "p-1"));
        record.created_at = Utc::now() + Duration::days(1);
        record.updated_at = record.created_at;
        let id = record.id.clone();
        store.insert(record);

        let updated = store.update(id.as_str(), AnnotationPatch::new()).unwrap();
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_delete_removes_record_and_index_entries() {
        let mut fixture = StoreFixture::new().with_highlights(2, "doc-1", "p-1");
        let id = fixture.ids[0].clone();

        assert!(fixture.store.delete(id.as_str()));
        assert!(fixture.store.get(id.as_str()).is_none());
        assert_eq!(fixture.store.by_document("doc-1").len(), 1);
        assert!(fixture.store.indices_consistent());
    }

    #[test]
    fn test_delete_unknown_returns_false_and_changes_nothing() {
        let mut fixture = StoreFixture::new().with_highlights(2, "doc-1", "p-1");
        let before = fixture.store.all().into_iter().cloned().collect::<Vec<_>>();

        assert!(!fixture.store.delete("missing"));

        let after = fixture.store.all().into_iter().cloned().collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn test_insert_replaces_and_relocates() {
        let mut fixture = StoreFixture::new().with(highlight("doc-1", "p-1"));
        let mut moved = fixture.store.get(fixture.ids[0].as_str()).unwrap().clone();
        moved.document_id = "doc-3".to_string();
        moved.target = AnnotationTarget::paragraph("p-7");

        let replaced = fixture.store.insert(moved);

        assert!(replaced.is_some());
        assert_eq!(fixture.store.len(), 1);
        assert!(fixture.store.by_document("doc-1").is_empty());
        assert_eq!(fixture.store.by_target("p-7").len(), 1);
        assert!(fixture.store.indices_consistent());
    }

    #[test]
    fn test_reads_are_oldest_first() {
        let mut store = AnnotationStore::new();
        let mut first = Annotation::from_new(highlight("doc-1", "p-1"));
        let mut second = Annotation::from_new(highlight("doc-1", "p-2"));
        first.created_at = Utc::now() - Duration::hours(2);
        second.created_at = Utc::now() - Duration::hours(1);
        store.insert(second.clone());
        store.insert(first.clone());

        let list = store.by_document("doc-1");
        let ids: Vec<&AnnotationId> = list.iter().map(|a| &a.id).collect();
        assert_eq!(ids, vec![&first.id, &second.id]);
    }

    #[test]
    fn test_unknown_document_is_empty() {
        let store = AnnotationStore::new();
        assert!(store.by_document("unknown-doc").is_empty());
        assert!(store.by_target("unknown-target").is_empty());
    }

    #[test]
    fn test_dangling_index_entry_is_dropped() {
        let mut fixture = StoreFixture::new().with(highlight("doc-1", "p-1"));
        fixture
            .store
            .document_index_mut()
            .insert("doc-1", &AnnotationId::from("ghost"));

        let list = fixture.store.by_document("doc-1");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, fixture.ids[0]);
    }

    #[test]
    fn test_target_ids_are_distinct_and_scoped() {
        let fixture = StoreFixture::new()
            .with_highlights(2, "doc-1", "p-2")
            .with(highlight("doc-1", "p-1"))
            .with(highlight("doc-2", "p-9"));

        assert_eq!(fixture.store.target_ids("doc-1"), vec!["p-1", "p-2"]);
        assert_eq!(fixture.store.document_ids(), vec!["doc-1", "doc-2"]);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut fixture = StoreFixture::scenario();
        fixture.store.clear();
        assert!(fixture.store.is_empty());
        assert!(fixture.store.document_ids().is_empty());
        assert!(fixture.store.indices_consistent());
    }
}
