//! Aggregate counts and rankings over a document's annotations (or the whole store).

use crate::model::{Annotation, AnnotationType, HighlightColor};
use crate::store::AnnotationStore;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MOST_ANNOTATED_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCount {
    pub target_id: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationStatistics {
    pub total: usize,
    pub by_type: BTreeMap<AnnotationType, usize>,
    pub by_color: BTreeMap<HighlightColor, usize>,
    /// One increment per tag per annotation.
    pub by_tag: BTreeMap<String, usize>,
    pub private_count: usize,
    pub reviewed_count: usize,
    /// `total / distinct targets`, or 0 when nothing is annotated.
    pub average_per_paragraph: f64,
    /// Highest counts first; equal counts ordered by target id ascending.
    pub most_annotated_paragraphs: Vec<TargetCount>,
}

/// Statistics for `document_id`, or for every annotation when `None`.
pub fn get_statistics(
    store: &AnnotationStore,
    document_id: Option<&str>,
    most_annotated_limit: usize,
) -> AnnotationStatistics {
    let annotations = match document_id {
        Some(id) => store.by_document(id),
        None => store.all(),
    };
    compute(&annotations, most_annotated_limit)
}

pub fn compute(annotations: &[&Annotation], most_annotated_limit: usize) -> AnnotationStatistics {
    let mut stats = AnnotationStatistics {
        total: annotations.len(),
        ..Default::default()
    };
    let mut per_target: HashMap<&str, usize> = HashMap::new();

    for annotation in annotations {
        *stats
            .by_type
            .entry(annotation.annotation_type.clone())
            .or_default() += 1;
        *stats.by_color.entry(annotation.color.clone()).or_default() += 1;
        for tag in &annotation.tags {
            *stats.by_tag.entry(tag.clone()).or_default() += 1;
        }
        if annotation.is_private {
            stats.private_count += 1;
        }
        if annotation.reviewed() == Some(true) {
            stats.reviewed_count += 1;
        }
        *per_target.entry(annotation.target_id()).or_default() += 1;
    }

    if !per_target.is_empty() {
        stats.average_per_paragraph = stats.total as f64 / per_target.len() as f64;
    }

    let mut ranked: Vec<(&str, usize)> = per_target.into_iter().collect();
    ranked.sort_by(|(id_a, count_a), (id_b, count_b)| count_b.cmp(count_a).then_with(|| id_a.cmp(id_b)));
    stats.most_annotated_paragraphs = ranked
        .into_iter()
        .take(most_annotated_limit)
        .map(|(target_id, count)| TargetCount {
            target_id: target_id.to_string(),
            count,
        })
        .collect();

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnnotationMetadata;
    use crate::store::memory::fixtures::{highlight, StoreFixture};

    #[test]
    fn test_scenario_counts() {
        let fixture = StoreFixture::scenario();
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_color[&HighlightColor::Yellow], 1);
        assert_eq!(stats.by_color[&HighlightColor::Blue], 1);
        assert_eq!(stats.by_type[&AnnotationType::Highlight], 1);
        assert_eq!(stats.by_type[&AnnotationType::Note], 1);
        assert_eq!(stats.by_tag["important"], 1);
        assert_eq!(stats.average_per_paragraph, 2.0);
    }

    #[test]
    fn test_empty_store() {
        let store = AnnotationStore::new();
        let stats = get_statistics(&store, None, DEFAULT_MOST_ANNOTATED_LIMIT);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_per_paragraph, 0.0);
        assert!(stats.most_annotated_paragraphs.is_empty());
        assert!(stats.by_type.is_empty());
    }

    #[test]
    fn test_type_tally_sums_to_total() {
        let fixture = StoreFixture::scenario()
            .with_highlights(3, "doc-1", "p-2")
            .with_highlights(2, "doc-2", "p-9");
        for doc in [Some("doc-1"), Some("doc-2"), None] {
            let stats = get_statistics(&fixture.store, doc, DEFAULT_MOST_ANNOTATED_LIMIT);
            assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
            assert_eq!(stats.by_color.values().sum::<usize>(), stats.total);
        }
    }

    #[test]
    fn test_by_tag_counts_each_occurrence() {
        let fixture = StoreFixture::new()
            .with(highlight("doc-1", "p-1").with_tags(["a", "b", "c"]))
            .with(highlight("doc-1", "p-1").with_tags(["a"]));
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);
        assert_eq!(stats.by_tag["a"], 2);
        assert_eq!(stats.by_tag.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_most_annotated_ranks_and_breaks_ties_by_id() {
        let fixture = StoreFixture::new()
            .with_highlights(1, "doc-1", "p-c")
            .with_highlights(3, "doc-1", "p-b")
            .with_highlights(1, "doc-1", "p-a");
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);

        let order: Vec<(&str, usize)> = stats
            .most_annotated_paragraphs
            .iter()
            .map(|t| (t.target_id.as_str(), t.count))
            .collect();
        assert_eq!(order, vec![("p-b", 3), ("p-a", 1), ("p-c", 1)]);
        assert!((stats.average_per_paragraph - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_most_annotated_is_capped() {
        let mut fixture = StoreFixture::new();
        for i in 0..15 {
            fixture = fixture.with(highlight("doc-1", &format!("p-{:02}", i)));
        }
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);
        assert_eq!(stats.most_annotated_paragraphs.len(), 10);

        let stats = get_statistics(&fixture.store, Some("doc-1"), 3);
        assert_eq!(stats.most_annotated_paragraphs.len(), 3);
    }

    #[test]
    fn test_private_and_reviewed_counts() {
        let fixture = StoreFixture::new()
            .with(highlight("doc-1", "p-1").private())
            .with(highlight("doc-1", "p-1").with_metadata(AnnotationMetadata::default().with_reviewed(true)));
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);
        assert_eq!(stats.private_count, 1);
        assert_eq!(stats.reviewed_count, 1);
    }

    #[test]
    fn test_statistics_serialize_with_enum_keys() {
        let fixture = StoreFixture::scenario();
        let stats = get_statistics(&fixture.store, Some("doc-1"), DEFAULT_MOST_ANNOTATED_LIMIT);
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["byColor"]["yellow"], 1);
        assert_eq!(value["byType"]["note"], 1);
        assert_eq!(value["mostAnnotatedParagraphs"][0]["targetId"], "p-1");
    }
}
