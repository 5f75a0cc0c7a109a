use crate::error::{MarginaliaError, Result};
use crate::model::Annotation;
use crate::store::AnnotationStore;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Loads a JSON array of annotation records, as written by
/// [`crate::commands::export::export_to_json`], into the store.
///
/// Ids and timestamps are kept, except that an `updated_at` earlier than `created_at`
/// is raised to `created_at`. A record whose id is already stored replaces it; within
/// one payload the last record for an id wins. Enum values are not validated. The whole
/// input is parsed before anything is inserted, so malformed input leaves the store
/// untouched.
///
/// Returns the number of distinct ids imported.
pub fn import_from_json(store: &mut AnnotationStore, json: &str) -> Result<usize> {
    let records: Vec<Annotation> = serde_json::from_str(json).map_err(MarginaliaError::parse)?;
    let mut seen = HashSet::new();

    for mut record in records {
        record.updated_at = record.updated_at.max(record.created_at);
        let id = record.id.clone();
        let first_in_payload = seen.insert(id.clone());
        if store.insert(record).is_some() && first_in_payload {
            warn!(id = %id, "import replaced an existing annotation");
        }
    }

    let count = seen.len();
    debug!(count, "imported annotations");
    Ok(count)
}
