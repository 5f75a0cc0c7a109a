//! # Flat Records for Human-Facing Exports
//!
//! The Markdown and CSV exporters, and the consumers that feed them, work with a flatter
//! record than [`Annotation`]: one quoted text, one optional note, offsets at the top level.
//! Different producers spell the same concept differently:
//!
//! | Canonical      | Also accepted |
//! |----------------|---------------|
//! | `text`         | `content`     |
//! | `note`         | `note_text`   |
//! | `start_offset` | `startOffset` |
//! | `end_offset`   | `endOffset`   |
//! | `created_at`   | `createdAt`   |
//!
//! [`FlatAnnotation`] is the single canonical shape. Alternate names are folded in at the
//! parse boundary ([`parse_flat_records`]) and rich records are adapted with
//! `FlatAnnotation::from(&Annotation)`, so no alternate name survives past the boundary.
//!
//! ## Mapping From Rich Records
//!
//! - Range targets: `text` is the selected text, `note` is the annotation content.
//! - Paragraph and sentence targets: `text` is the content, there is no `note`.

use crate::error::{MarginaliaError, Result};
use crate::model::{Annotation, AnnotationType, HighlightColor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_type() -> AnnotationType {
    AnnotationType::Highlight
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub annotation_type: AnnotationType,
    #[serde(default, alias = "content")]
    pub text: String,
    #[serde(default, alias = "note_text", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HighlightColor>,
    #[serde(default, alias = "startOffset", skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    #[serde(default, alias = "endOffset", skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Annotation> for FlatAnnotation {
    fn from(annotation: &Annotation) -> Self {
        let range = annotation.target.text_range();
        let (text, note) = match range {
            Some(r) => (r.selected_text.clone(), annotation.content.clone()),
            None => (annotation.content.clone().unwrap_or_default(), None),
        };
        Self {
            id: Some(annotation.id.to_string()),
            annotation_type: annotation.annotation_type.clone(),
            text,
            note,
            color: Some(annotation.color.clone()),
            start_offset: range.map(|r| r.start_offset),
            end_offset: range.map(|r| r.end_offset),
            created_at: Some(annotation.created_at),
        }
    }
}

pub fn flatten(annotations: &[&Annotation]) -> Vec<FlatAnnotation> {
    annotations.iter().map(|a| FlatAnnotation::from(*a)).collect()
}

/// Parses a JSON array of flat records, accepting either spelling of each field.
pub fn parse_flat_records(json: &str) -> Result<Vec<FlatAnnotation>> {
    serde_json::from_str(json).map_err(MarginaliaError::parse)
}
