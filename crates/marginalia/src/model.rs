//! # Domain Model: Annotations, Targets and Groups
//!
//! This module defines the core data structures for marginalia: [`Annotation`],
//! [`AnnotationTarget`], [`AnnotationMetadata`] and [`AnnotationGroup`], together with
//! the two input shapes used to mutate the store, [`NewAnnotation`] and [`AnnotationPatch`].
//!
//! ## The Record Shape
//!
//! An annotation is a user-authored marker attached to a region of a document:
//!
//! ```text
//! Annotation
//! ├── id            opaque, assigned at creation, immutable
//! ├── documentId    owning document
//! ├── userId        creator
//! ├── target        paragraph | sentence | range (offsets + selected text)
//! ├── type          highlight, note, main_idea, ...
//! ├── content       optional body
//! ├── color         highlight color
//! ├── tags          set of free-form labels
//! ├── isPrivate     visibility flag
//! ├── createdAt     set once
//! ├── updatedAt     always >= createdAt
//! └── metadata      open map (citationId, importance, reviewed, ...)
//! ```
//!
//! The serde representation of [`Annotation`] *is* the export/import contract:
//! camelCase keys, RFC 3339 timestamps, the target as an internally tagged object.
//!
//! ## Lenient Enumerations
//!
//! [`AnnotationType`] and [`HighlightColor`] are closed sets for records created in
//! process, but imported records are not validated against them. Unknown values are
//! kept verbatim in an `Other` variant and written back unchanged on export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Opaque annotation identifier.
///
/// Freshly created annotations get a UUID v4, but any string is accepted on import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnnotationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AnnotationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for AnnotationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnotationType {
    Highlight,
    Note,
    MainIdea,
    Citation,
    Question,
    Critical,
    Definition,
    Example,
    Summary,
    /// A value outside the known set, kept as-is from imported data.
    Other(String),
}

impl AnnotationType {
    pub const ALL: [AnnotationType; 9] = [
        AnnotationType::Highlight,
        AnnotationType::Note,
        AnnotationType::MainIdea,
        AnnotationType::Citation,
        AnnotationType::Question,
        AnnotationType::Critical,
        AnnotationType::Definition,
        AnnotationType::Example,
        AnnotationType::Summary,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AnnotationType::Highlight => "highlight",
            AnnotationType::Note => "note",
            AnnotationType::MainIdea => "main_idea",
            AnnotationType::Citation => "citation",
            AnnotationType::Question => "question",
            AnnotationType::Critical => "critical",
            AnnotationType::Definition => "definition",
            AnnotationType::Example => "example",
            AnnotationType::Summary => "summary",
            AnnotationType::Other(raw) => raw,
        }
    }

    /// Human-facing name, used for export section titles and group labels.
    pub fn label(&self) -> String {
        match self {
            AnnotationType::Highlight => "Highlight".to_string(),
            AnnotationType::Note => "Note".to_string(),
            AnnotationType::MainIdea => "Main Idea".to_string(),
            AnnotationType::Citation => "Citation".to_string(),
            AnnotationType::Question => "Question".to_string(),
            AnnotationType::Critical => "Critical".to_string(),
            AnnotationType::Definition => "Definition".to_string(),
            AnnotationType::Example => "Example".to_string(),
            AnnotationType::Summary => "Summary".to_string(),
            AnnotationType::Other(raw) => raw.clone(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AnnotationType::Other(_))
    }
}

impl From<String> for AnnotationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "highlight" => AnnotationType::Highlight,
            "note" => AnnotationType::Note,
            "main_idea" => AnnotationType::MainIdea,
            "citation" => AnnotationType::Citation,
            "question" => AnnotationType::Question,
            "critical" => AnnotationType::Critical,
            "definition" => AnnotationType::Definition,
            "example" => AnnotationType::Example,
            "summary" => AnnotationType::Summary,
            _ => AnnotationType::Other(value),
        }
    }
}

impl From<&str> for AnnotationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<AnnotationType> for String {
    fn from(value: AnnotationType) -> Self {
        match value {
            AnnotationType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HighlightColor {
    Yellow,
    Green,
    Blue,
    Pink,
    Purple,
    Orange,
    Red,
    /// A value outside the known palette, kept as-is from imported data.
    Other(String),
}

impl HighlightColor {
    pub const ALL: [HighlightColor; 7] = [
        HighlightColor::Yellow,
        HighlightColor::Green,
        HighlightColor::Blue,
        HighlightColor::Pink,
        HighlightColor::Purple,
        HighlightColor::Orange,
        HighlightColor::Red,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            HighlightColor::Yellow => "yellow",
            HighlightColor::Green => "green",
            HighlightColor::Blue => "blue",
            HighlightColor::Pink => "pink",
            HighlightColor::Purple => "purple",
            HighlightColor::Orange => "orange",
            HighlightColor::Red => "red",
            HighlightColor::Other(raw) => raw,
        }
    }
}

impl From<String> for HighlightColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "yellow" => HighlightColor::Yellow,
            "green" => HighlightColor::Green,
            "blue" => HighlightColor::Blue,
            "pink" => HighlightColor::Pink,
            "purple" => HighlightColor::Purple,
            "orange" => HighlightColor::Orange,
            "red" => HighlightColor::Red,
            _ => HighlightColor::Other(value),
        }
    }
}

impl From<&str> for HighlightColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<HighlightColor> for String {
    fn from(value: HighlightColor) -> Self {
        match value {
            HighlightColor::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character offsets and the text they covered when the selection was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_offset: usize,
    pub end_offset: usize,
    pub selected_text: String,
}

/// The region an annotation refers to.
///
/// Serialized as `{"type": "paragraph", "id": "p-1"}`, with a nested `range`
/// object for range targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnnotationTarget {
    Paragraph { id: String },
    Sentence { id: String },
    Range { id: String, range: TextRange },
}

impl AnnotationTarget {
    pub fn paragraph(id: impl Into<String>) -> Self {
        AnnotationTarget::Paragraph { id: id.into() }
    }

    pub fn sentence(id: impl Into<String>) -> Self {
        AnnotationTarget::Sentence { id: id.into() }
    }

    pub fn range(
        id: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        selected_text: impl Into<String>,
    ) -> Self {
        AnnotationTarget::Range {
            id: id.into(),
            range: TextRange {
                start_offset,
                end_offset,
                selected_text: selected_text.into(),
            },
        }
    }

    /// The paragraph or sentence identifier this target points into.
    pub fn id(&self) -> &str {
        match self {
            AnnotationTarget::Paragraph { id }
            | AnnotationTarget::Sentence { id }
            | AnnotationTarget::Range { id, .. } => id,
        }
    }

    pub fn text_range(&self) -> Option<&TextRange> {
        match self {
            AnnotationTarget::Range { range, .. } => Some(range),
            _ => None,
        }
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.text_range().map(|r| r.selected_text.as_str())
    }
}

/// Open, extensible metadata.
///
/// Stored as the raw JSON object so any value round-trips untouched. `citationId`,
/// `importance` and `reviewed` are read through typed accessors; a value of the wrong
/// shape reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationMetadata {
    entries: Map<String, Value>,
}

impl AnnotationMetadata {
    pub const MIN_IMPORTANCE: u8 = 1;
    pub const MAX_IMPORTANCE: u8 = 5;

    const CITATION_ID: &'static str = "citationId";
    const IMPORTANCE: &'static str = "importance";
    const REVIEWED: &'static str = "reviewed";

    pub fn citation_id(&self) -> Option<&str> {
        self.entries.get(Self::CITATION_ID).and_then(Value::as_str)
    }

    /// An integer on the 1..=5 scale, or `None`.
    pub fn importance(&self) -> Option<u8> {
        self.entries
            .get(Self::IMPORTANCE)
            .and_then(Value::as_u64)
            .and_then(|level| u8::try_from(level).ok())
            .filter(|level| (Self::MIN_IMPORTANCE..=Self::MAX_IMPORTANCE).contains(level))
    }

    pub fn reviewed(&self) -> Option<bool> {
        self.entries.get(Self::REVIEWED).and_then(Value::as_bool)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets importance, clamped into the 1..=5 scale.
    pub fn with_importance(self, level: u8) -> Self {
        let level = level.clamp(Self::MIN_IMPORTANCE, Self::MAX_IMPORTANCE);
        self.with_extra(Self::IMPORTANCE, Value::from(level))
    }

    pub fn with_reviewed(self, reviewed: bool) -> Self {
        self.with_extra(Self::REVIEWED, Value::from(reviewed))
    }

    pub fn with_citation(self, citation_id: impl Into<String>) -> Self {
        self.with_extra(Self::CITATION_ID, Value::from(citation_id.into()))
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: AnnotationId,
    pub document_id: String,
    pub user_id: String,
    pub target: AnnotationTarget,
    #[serde(rename = "type")]
    pub annotation_type: AnnotationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub color: HighlightColor,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: AnnotationMetadata,
}

impl Annotation {
    /// Builds a stored record from creation input: fresh id, `created_at == updated_at`.
    pub fn from_new(data: NewAnnotation) -> Self {
        let now = Utc::now();
        Self {
            id: AnnotationId::generate(),
            document_id: data.document_id,
            user_id: data.user_id,
            target: data.target,
            annotation_type: data.annotation_type,
            content: data.content,
            color: data.color,
            tags: data.tags,
            is_private: data.is_private,
            created_at: now,
            updated_at: now,
            metadata: data.metadata,
        }
    }

    pub fn target_id(&self) -> &str {
        self.target.id()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.target.selected_text()
    }

    pub fn importance(&self) -> Option<u8> {
        self.metadata.importance()
    }

    pub fn reviewed(&self) -> Option<bool> {
        self.metadata.reviewed()
    }
}

/// Creation input: every [`Annotation`] field except the id and the timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnotation {
    pub document_id: String,
    pub user_id: String,
    pub target: AnnotationTarget,
    #[serde(rename = "type")]
    pub annotation_type: AnnotationType,
    #[serde(default)]
    pub content: Option<String>,
    pub color: HighlightColor,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub metadata: AnnotationMetadata,
}

impl NewAnnotation {
    pub fn new(
        document_id: impl Into<String>,
        user_id: impl Into<String>,
        target: AnnotationTarget,
        annotation_type: AnnotationType,
        color: HighlightColor,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            user_id: user_id.into(),
            target,
            annotation_type,
            content: None,
            color,
            tags: BTreeSet::new(),
            is_private: false,
            metadata: AnnotationMetadata::default(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn with_metadata(mut self, metadata: AnnotationMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A partial update. `None` leaves the field untouched.
///
/// `content` is doubly optional so a patch can clear it (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationPatch {
    pub document_id: Option<String>,
    pub user_id: Option<String>,
    pub target: Option<AnnotationTarget>,
    pub annotation_type: Option<AnnotationType>,
    pub content: Option<Option<String>>,
    pub color: Option<HighlightColor>,
    pub tags: Option<BTreeSet<String>>,
    pub is_private: Option<bool>,
    pub metadata: Option<AnnotationMetadata>,
}

impl AnnotationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn target(mut self, target: AnnotationTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn annotation_type(mut self, annotation_type: AnnotationType) -> Self {
        self.annotation_type = Some(annotation_type);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    pub fn color(mut self, color: HighlightColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn tags(mut self, tags: BTreeSet<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn metadata(mut self, metadata: AnnotationMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Merges the patch over `annotation`. Timestamps are the caller's business.
    pub fn apply_to(self, annotation: &mut Annotation) {
        if let Some(document_id) = self.document_id {
            annotation.document_id = document_id;
        }
        if let Some(user_id) = self.user_id {
            annotation.user_id = user_id;
        }
        if let Some(target) = self.target {
            annotation.target = target;
        }
        if let Some(annotation_type) = self.annotation_type {
            annotation.annotation_type = annotation_type;
        }
        if let Some(content) = self.content {
            annotation.content = content;
        }
        if let Some(color) = self.color {
            annotation.color = color;
        }
        if let Some(tags) = self.tags {
            annotation.tags = tags;
        }
        if let Some(is_private) = self.is_private {
            annotation.is_private = is_private;
        }
        if let Some(metadata) = self.metadata {
            annotation.metadata = metadata;
        }
    }
}

/// A named, non-owning collection of annotation references.
///
/// Referenced ids are not checked against the store; a group may outlive
/// the annotations it points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationGroup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub annotation_ids: Vec<AnnotationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HighlightColor>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupOptions {
    pub description: Option<String>,
    pub color: Option<HighlightColor>,
}

impl AnnotationGroup {
    pub fn new(name: impl Into<String>, annotation_ids: Vec<AnnotationId>, options: GroupOptions) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: options.description,
            annotation_ids,
            color: options.color,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_new() -> NewAnnotation {
        NewAnnotation::new(
            "doc-1",
            "user-1",
            AnnotationTarget::paragraph("p-1"),
            AnnotationType::Highlight,
            HighlightColor::Yellow,
        )
    }

    #[test]
    fn test_from_new_sets_identity_and_timestamps() {
        let annotation = Annotation::from_new(sample_new());
        assert!(!annotation.id.as_str().is_empty());
        assert_eq!(annotation.created_at, annotation.updated_at);
        assert!(annotation.tags.is_empty());
        assert!(!annotation.is_private);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Annotation::from_new(sample_new());
        let b = Annotation::from_new(sample_new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_type_strings_roundtrip() {
        for kind in AnnotationType::ALL {
            let raw: String = kind.clone().into();
            assert_eq!(AnnotationType::from(raw), kind);
        }
        assert_eq!(AnnotationType::MainIdea.as_str(), "main_idea");
        assert_eq!(AnnotationType::MainIdea.label(), "Main Idea");
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let kind: AnnotationType = serde_json::from_value(json!("marginal_scribble")).unwrap();
        assert_eq!(kind, AnnotationType::Other("marginal_scribble".to_string()));
        assert!(!kind.is_known());
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("marginal_scribble"));
    }

    #[test]
    fn test_unknown_types_sort_after_known() {
        let mut kinds = vec![
            AnnotationType::Other("zzz".into()),
            AnnotationType::Summary,
            AnnotationType::Highlight,
        ];
        kinds.sort();
        assert_eq!(kinds[0], AnnotationType::Highlight);
        assert_eq!(kinds[2], AnnotationType::Other("zzz".into()));
    }

    #[test]
    fn test_color_serializes_lowercase() {
        assert_eq!(serde_json::to_value(HighlightColor::Blue).unwrap(), json!("blue"));
        let color: HighlightColor = serde_json::from_value(json!("teal")).unwrap();
        assert_eq!(color, HighlightColor::Other("teal".into()));
    }

    #[test]
    fn test_target_json_shape() {
        let target = AnnotationTarget::range("p-3", 4, 9, "quick");
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "range",
                "id": "p-3",
                "range": {"startOffset": 4, "endOffset": 9, "selectedText": "quick"}
            })
        );
        assert_eq!(target.id(), "p-3");
        assert_eq!(target.selected_text(), Some("quick"));

        let paragraph: AnnotationTarget =
            serde_json::from_value(json!({"type": "paragraph", "id": "p-1"})).unwrap();
        assert_eq!(paragraph, AnnotationTarget::paragraph("p-1"));
        assert_eq!(paragraph.selected_text(), None);
    }

    #[test]
    fn test_annotation_json_uses_camel_case() {
        let annotation = Annotation::from_new(sample_new().with_tags(["b", "a"]).private());
        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(value["documentId"], json!("doc-1"));
        assert_eq!(value["userId"], json!("user-1"));
        assert_eq!(value["type"], json!("highlight"));
        assert_eq!(value["isPrivate"], json!(true));
        assert_eq!(value["tags"], json!(["a", "b"]));
        assert!(value["createdAt"].is_string());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_metadata_keeps_unknown_keys() {
        let value = json!({"importance": 4, "reviewed": true, "source": "kindle"});
        let metadata: AnnotationMetadata = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(metadata.importance(), Some(4));
        assert_eq!(metadata.reviewed(), Some(true));
        assert_eq!(metadata.get("source"), Some(&json!("kindle")));
        assert_eq!(serde_json::to_value(&metadata).unwrap(), value);
    }

    #[test]
    fn test_importance_is_clamped() {
        assert_eq!(AnnotationMetadata::default().with_importance(9).importance(), Some(5));
        assert_eq!(AnnotationMetadata::default().with_importance(0).importance(), Some(1));
    }

    #[test]
    fn test_metadata_with_odd_values_reads_as_absent_and_roundtrips() {
        let value = json!({"importance": "high", "reviewed": "yes", "citationId": 7});
        let metadata: AnnotationMetadata = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(metadata.importance(), None);
        assert_eq!(metadata.reviewed(), None);
        assert_eq!(metadata.citation_id(), None);
        assert_eq!(serde_json::to_value(&metadata).unwrap(), value);

        let out_of_scale: AnnotationMetadata =
            serde_json::from_value(json!({"importance": 300})).unwrap();
        assert_eq!(out_of_scale.importance(), None);
    }

    #[test]
    fn test_new_annotation_defaults_when_deserialized() {
        let data: NewAnnotation = serde_json::from_value(json!({
            "documentId": "doc-1",
            "userId": "u",
            "target": {"type": "sentence", "id": "s-1"},
            "type": "note",
            "color": "green"
        }))
        .unwrap();
        assert!(data.tags.is_empty());
        assert!(!data.is_private);
        assert_eq!(data.content, None);
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut annotation = Annotation::from_new(sample_new().with_content("old"));
        AnnotationPatch::new()
            .color(HighlightColor::Red)
            .clear_content()
            .apply_to(&mut annotation);

        assert_eq!(annotation.color, HighlightColor::Red);
        assert_eq!(annotation.content, None);
        assert_eq!(annotation.annotation_type, AnnotationType::Highlight);
        assert_eq!(annotation.document_id, "doc-1");
    }

    #[test]
    fn test_group_new_keeps_reference_order() {
        let ids = vec![AnnotationId::from("b"), AnnotationId::from("a")];
        let group = AnnotationGroup::new("G", ids.clone(), GroupOptions::default());
        assert_eq!(group.annotation_ids, ids);
        assert_eq!(group.description, None);
    }
}
