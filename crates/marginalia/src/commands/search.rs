use crate::model::Annotation;
use crate::store::AnnotationStore;

/// Case-insensitive substring search over content, selected text and tags.
///
/// A match in any of the three fields is enough. With `document_id`, only that
/// document's annotations are considered. Blank queries match nothing; otherwise the
/// query is matched as given, surrounding whitespace included.
pub fn search_annotations<'a>(
    store: &'a AnnotationStore,
    query: &str,
    document_id: Option<&str>,
) -> Vec<&'a Annotation> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let term = query.to_lowercase();

    let candidates = match document_id {
        Some(id) => store.by_document(id),
        None => store.all(),
    };

    candidates
        .into_iter()
        .filter(|a| matches_term(a, &term))
        .collect()
}

/// `term` must already be lowercased.
pub fn matches_term(annotation: &Annotation, term: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(term);

    annotation.content.as_deref().is_some_and(contains)
        || annotation.selected_text().is_some_and(contains)
        || annotation.tags.iter().any(|tag| contains(tag))
}
