//! # API Facade
//!
//! [`AnnotationEngine`] is a **thin facade** over the command layer and the single entry
//! point for callers (document viewers, request handlers, sync layers).
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** one [`AnnotationStore`], one [`AnnotationGroups`] registry and one
//!   [`EngineConfig`];
//! - **Dispatches** to the command modules;
//! - **Applies configuration** (ranking limit, export toggles) so callers don't have to.
//!
//! It does no business logic of its own.
//!
//! ## Explicit Ownership
//!
//! There is no global instance. Each caller constructs an engine and passes it where it
//! is needed, so tests and independent document contexts never share hidden state.
//!
//! ## Threading
//!
//! The engine is synchronous and has no internal locking. Mutating methods take
//! `&mut self`; to share one engine between threads, put it behind a `Mutex` or
//! `RwLock`, or route mutations through a single owning task.

use crate::commands::export::{self, ExportFile, ExportFormat, ExportOptions};
use crate::commands::filter::{self, AnnotationFilter};
use crate::commands::grouping::{self, AnnotationBucket, GroupBy};
use crate::commands::groups::AnnotationGroups;
use crate::commands::stats::{self, AnnotationStatistics};
use crate::commands::{import, search, tagging};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::flat::FlatAnnotation;
use crate::model::{
    Annotation, AnnotationGroup, AnnotationId, AnnotationPatch, GroupOptions, NewAnnotation,
};
use crate::store::AnnotationStore;

#[derive(Debug, Clone, Default)]
pub struct AnnotationEngine {
    store: AnnotationStore,
    groups: AnnotationGroups,
    config: EngineConfig,
}

impl AnnotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn groups(&self) -> &AnnotationGroups {
        &self.groups
    }

    // --- Store ---

    pub fn create(&mut self, data: NewAnnotation) -> Annotation {
        self.store.create(data)
    }

    pub fn update(&mut self, id: &str, patch: AnnotationPatch) -> Option<Annotation> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.store.get(id)
    }

    /// Drops every annotation. Groups are left as they are.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // --- Reads ---

    pub fn get_document_annotations(
        &self,
        document_id: &str,
        filter: Option<&AnnotationFilter>,
    ) -> Vec<&Annotation> {
        filter::document_annotations(&self.store, document_id, filter)
    }

    pub fn get_paragraph_annotations(&self, target_id: &str) -> Vec<&Annotation> {
        filter::paragraph_annotations(&self.store, target_id)
    }

    pub fn get_statistics(&self, document_id: Option<&str>) -> AnnotationStatistics {
        stats::get_statistics(&self.store, document_id, self.config.most_annotated_limit)
    }

    pub fn search_annotations(&self, query: &str, document_id: Option<&str>) -> Vec<&Annotation> {
        search::search_annotations(&self.store, query, document_id)
    }

    /// Filters one document's annotations, then partitions them for display.
    pub fn group_document_annotations(
        &self,
        document_id: &str,
        filter: Option<&AnnotationFilter>,
        by: GroupBy,
    ) -> Vec<AnnotationBucket<'_>> {
        let list = self.get_document_annotations(document_id, filter);
        grouping::group_annotations(&list, by)
    }

    // --- Tags ---

    pub fn add_tags<S: AsRef<str>>(&mut self, id: &str, tags: &[S]) -> Option<Annotation> {
        tagging::add_tags(&mut self.store, id, tags)
    }

    pub fn remove_tags<S: AsRef<str>>(&mut self, id: &str, tags: &[S]) -> Option<Annotation> {
        tagging::remove_tags(&mut self.store, id, tags)
    }

    pub fn clear_tags(&mut self, id: &str) -> Option<Annotation> {
        tagging::clear_tags(&mut self.store, id)
    }

    pub fn all_tags(&self, document_id: Option<&str>) -> Vec<String> {
        tagging::all_tags(&self.store, document_id)
    }

    // --- Groups ---

    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        annotation_ids: Vec<AnnotationId>,
        options: GroupOptions,
    ) -> AnnotationGroup {
        self.groups.create_group(name, annotation_ids, options)
    }

    pub fn get_all_groups(&self) -> &[AnnotationGroup] {
        self.groups.get_all_groups()
    }

    pub fn get_group(&self, group_id: &str) -> Option<&AnnotationGroup> {
        self.groups.get_group(group_id)
    }

    pub fn delete_group(&mut self, group_id: &str) -> bool {
        self.groups.delete_group(group_id)
    }

    pub fn add_to_group(&mut self, group_id: &str, annotation_ids: &[AnnotationId]) -> Option<&AnnotationGroup> {
        self.groups.add_to_group(group_id, annotation_ids)
    }

    pub fn remove_from_group(
        &mut self,
        group_id: &str,
        annotation_ids: &[AnnotationId],
    ) -> Option<&AnnotationGroup> {
        self.groups.remove_from_group(group_id, annotation_ids)
    }

    pub fn resolve_group(&self, group_id: &str) -> Option<Vec<&Annotation>> {
        self.groups.resolve_group(group_id, &self.store)
    }

    pub fn groups_containing(&self, annotation_id: &str) -> Vec<&AnnotationGroup> {
        self.groups.groups_containing(annotation_id)
    }

    // --- Serialization ---

    pub fn export_to_json(&self, document_id: Option<&str>) -> Result<String> {
        export::export_to_json(&self.store, document_id, self.config.export.pretty_json)
    }

    pub fn import_from_json(&mut self, json: &str) -> Result<usize> {
        import::import_from_json(&mut self.store, json)
    }

    /// Export options seeded from the engine's config; adjust filters on the result.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from(&self.config.export)
    }

    pub fn export_file(
        &self,
        document_id: &str,
        document_title: &str,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> Result<ExportFile> {
        export::export_file(&self.store, document_id, document_title, format, options)
    }

    /// Markdown from flat records supplied by a consumer.
    pub fn export_as_markdown(&self, records: &[FlatAnnotation], title: &str, options: &ExportOptions) -> String {
        export::export_as_markdown(records, title, options)
    }

    /// CSV from flat records supplied by a consumer.
    pub fn export_as_csv(&self, records: &[FlatAnnotation], options: &ExportOptions) -> String {
        export::export_as_csv(records, options)
    }
}
