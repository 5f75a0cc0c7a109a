//! # Command Layer
//!
//! The **business logic** of marginalia. Each concern lives in its own submodule as free
//! functions over [`crate::store::AnnotationStore`] and the model types.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: exports return strings, imports take strings
//! - **Own state**: everything is passed in; the only registry with state of its own is
//!   [`groups::AnnotationGroups`], which the engine owns alongside the store
//! - **Panic on bad input**: unknown ids yield `None`, `false` or an empty list; malformed
//!   JSON yields a [`crate::error::MarginaliaError::Parse`]
//!
//! ## Ordering
//!
//! Every list a command returns is ordered by creation time, oldest first, with the id as
//! tie-break, unless the command documents an ordering of its own (statistics rankings,
//! grouped buckets).
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Tests build stores with
//! `StoreFixture` and check results, not dispatch.
//!
//! ## Command Modules
//!
//! - [`filter`]: Multi-criteria filtering and per-document/per-target reads
//! - [`search`]: Case-insensitive substring search
//! - [`stats`]: Aggregate counts and the most-annotated ranking
//! - [`grouping`]: Display buckets by type, color or day
//! - [`tagging`]: Add, remove and list tags
//! - [`groups`]: Named collections of annotation ids
//! - [`export`]: JSON, Markdown and CSV exports
//! - [`import`]: JSON import

pub mod export;
pub mod filter;
pub mod grouping;
pub mod groups;
pub mod import;
pub mod search;
pub mod stats;
pub mod tagging;
