//! Named collections of annotation references.
//!
//! A group never owns annotations. Ids are stored by value and are not checked against
//! the store, so a group may keep pointing at an annotation that was deleted later.
//! [`AnnotationGroups::resolve_group`] materializes the live members and drops the rest.

use crate::model::{Annotation, AnnotationGroup, AnnotationId, GroupOptions};
use crate::store::AnnotationStore;
use tracing::debug;

/// Group registry. Groups are kept in creation order.
#[derive(Debug, Clone, Default)]
pub struct AnnotationGroups {
    groups: Vec<AnnotationGroup>,
}

impl AnnotationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        annotation_ids: Vec<AnnotationId>,
        options: GroupOptions,
    ) -> AnnotationGroup {
        let group = AnnotationGroup::new(name, annotation_ids, options);
        debug!(id = %group.id, name = %group.name, members = group.annotation_ids.len(), "created group");
        self.groups.push(group.clone());
        group
    }

    pub fn get_all_groups(&self) -> &[AnnotationGroup] {
        &self.groups
    }

    pub fn get_group(&self, group_id: &str) -> Option<&AnnotationGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn delete_group(&mut self, group_id: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != group_id);
        self.groups.len() != before
    }

    /// Appends ids not already referenced. Returns the updated group.
    pub fn add_to_group(&mut self, group_id: &str, annotation_ids: &[AnnotationId]) -> Option<&AnnotationGroup> {
        let group = self.groups.iter_mut().find(|g| g.id == group_id)?;
        for id in annotation_ids {
            if !group.annotation_ids.contains(id) {
                group.annotation_ids.push(id.clone());
            }
        }
        Some(group)
    }

    pub fn remove_from_group(&mut self, group_id: &str, annotation_ids: &[AnnotationId]) -> Option<&AnnotationGroup> {
        let group = self.groups.iter_mut().find(|g| g.id == group_id)?;
        group.annotation_ids.retain(|id| !annotation_ids.contains(id));
        Some(group)
    }

    /// Live members of a group in reference order. Dangling references are skipped.
    pub fn resolve_group<'a>(&self, group_id: &str, store: &'a AnnotationStore) -> Option<Vec<&'a Annotation>> {
        let group = self.get_group(group_id)?;
        Some(
            group
                .annotation_ids
                .iter()
                .filter_map(|id| store.get(id.as_str()))
                .collect(),
        )
    }

    /// Groups referencing `annotation_id`, in creation order.
    pub fn groups_containing(&self, annotation_id: &str) -> Vec<&AnnotationGroup> {
        self.groups
            .iter()
            .filter(|g| g.annotation_ids.iter().any(|id| id.as_str() == annotation_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
