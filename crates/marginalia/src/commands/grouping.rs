//! Display-time partitioning of an annotation list into labelled buckets.
//!
//! Not to be confused with [`crate::commands::groups`], which manages named, persistent
//! collections of annotation references.
//!
//! Bucket order:
//! - by type / color: declaration order of the enum, unknown values after, alphabetical;
//! - by date: `YYYY-MM-DD` of `created_at` (UTC), newest day first.
//!
//! Inside a bucket the input order is kept.

use crate::model::{Annotation, AnnotationType, HighlightColor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Type,
    Color,
    Date,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationBucket<'a> {
    /// Machine key: the enum string or the ISO date.
    pub key: String,
    pub label: String,
    pub annotations: Vec<&'a Annotation>,
}

pub fn group_annotations<'a>(annotations: &[&'a Annotation], by: GroupBy) -> Vec<AnnotationBucket<'a>> {
    match by {
        GroupBy::Type => partition(
            annotations,
            |a| a.annotation_type.clone(),
            |k: &AnnotationType| (k.to_string(), k.label()),
        ),
        GroupBy::Color => partition(
            annotations,
            |a| a.color.clone(),
            |k: &HighlightColor| (k.to_string(), capitalize(k.as_str())),
        ),
        GroupBy::Date => {
            let mut buckets = partition(
                annotations,
                |a| a.created_at.date_naive(),
                |day: &NaiveDate| (day.format("%Y-%m-%d").to_string(), day.format("%B %-d, %Y").to_string()),
            );
            buckets.reverse();
            buckets
        }
    }
}

fn partition<'a, K, F, L>(annotations: &[&'a Annotation], key_of: F, describe: L) -> Vec<AnnotationBucket<'a>>
where
    K: Ord,
    F: Fn(&Annotation) -> K,
    L: Fn(&K) -> (String, String),
{
    let mut grouped: BTreeMap<K, Vec<&'a Annotation>> = BTreeMap::new();
    for annotation in annotations.iter().copied() {
        grouped.entry(key_of(annotation)).or_default().push(annotation);
    }

    grouped
        .into_iter()
        .map(|(k, annotations)| {
            let (key, label) = describe(&k);
            AnnotationBucket {
                key,
                label,
                annotations,
            }
        })
        .collect()
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
