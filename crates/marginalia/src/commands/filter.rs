//! Scoped retrieval and multi-criteria filtering.
//!
//! Candidates come from one of the store's indices; [`AnnotationFilter`] then narrows
//! them. Categories combine with AND; values inside a list category combine with OR.
//! An empty list means the category is not applied.

use crate::model::{Annotation, AnnotationType, HighlightColor};
use crate::store::AnnotationStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive creation-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotationFilter {
    pub types: Vec<AnnotationType>,
    pub colors: Vec<HighlightColor>,
    pub user_id: Option<String>,
    /// Matches annotations carrying at least one of these tags.
    pub tags: Vec<String>,
    /// Matches `metadata.importance`; annotations without importance never match.
    pub importance: Vec<u8>,
    /// Matches `metadata.reviewed` exactly; annotations without the key never match.
    pub reviewed: Option<bool>,
    pub is_private: Option<bool>,
    pub date_range: Option<DateRange>,
}

impl AnnotationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = AnnotationType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = HighlightColor>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn by_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
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

    pub fn with_importance(mut self, levels: impl IntoIterator<Item = u8>) -> Self {
        self.importance = levels.into_iter().collect();
        self
    }

    pub fn reviewed(mut self, reviewed: bool) -> Self {
        self.reviewed = Some(reviewed);
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    /// True when no category is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, annotation: &Annotation) -> bool {
        if !self.types.is_empty() && !self.types.contains(&annotation.annotation_type) {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.contains(&annotation.color) {
            return false;
        }
        if let Some(user_id) = &self.user_id {
            if &annotation.user_id != user_id {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| annotation.tags.contains(t)) {
            return false;
        }
        if !self.importance.is_empty() {
            match annotation.importance() {
                Some(level) if self.importance.contains(&level) => {}
                _ => return false,
            }
        }
        if let Some(reviewed) = self.reviewed {
            if annotation.reviewed() != Some(reviewed) {
                return false;
            }
        }
        if let Some(is_private) = self.is_private {
            if annotation.is_private != is_private {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.contains(annotation.created_at) {
                return false;
            }
        }
        true
    }
}

/// Keeps the annotations matching every category of `criteria`, preserving order.
pub fn apply_filter<'a, I>(list: I, criteria: &AnnotationFilter) -> Vec<&'a Annotation>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    list.into_iter().filter(|a| criteria.matches(a)).collect()
}

/// Annotations of one document, optionally filtered. Unknown documents yield `[]`.
pub fn document_annotations<'a>(
    store: &'a AnnotationStore,
    document_id: &str,
    filter: Option<&AnnotationFilter>,
) -> Vec<&'a Annotation> {
    let candidates = store.by_document(document_id);
    match filter {
        Some(criteria) => apply_filter(candidates, criteria),
        None => candidates,
    }
}

/// Annotations on one paragraph, sentence or range target. Unfiltered.
pub fn paragraph_annotations<'a>(store: &'a AnnotationStore, target_id: &str) -> Vec<&'a Annotation> {
    store.by_target(target_id)
}
