//! # Storage Layer
//!
//! [`AnnotationStore`] owns the canonical collection of annotation records plus two
//! derived indices (see [`crate::index`]). Every other component reads through it; only
//! the store mutates it.
//!
//! ## Mutation Paths
//!
//! | Operation | Primary map | Document index | Target index |
//! |-----------|-------------|----------------|--------------|
//! | `create`  | insert      | insert         | insert       |
//! | `update`  | value swap  | relocate       | relocate     |
//! | `insert`  | insert/swap | insert/relocate| insert/relocate |
//! | `delete`  | remove last | remove first   | remove first |
//!
//! `update` and `insert` go through a single relocation primitive whenever `document_id`
//! or `target.id` change, so an id is never left behind in a stale bucket.
//!
//! ## Not-Found Is Not An Error
//!
//! `update` returns `None`, `delete` returns `false` and `get` returns `None` for unknown
//! ids. Callers check the return value.
//!
//! ## Dangling Entries
//!
//! Reads resolve index buckets against the primary map and drop ids that resolve to
//! nothing instead of failing.
//!
//! ## Ordering
//!
//! Every read that returns a list materializes records oldest first (`created_at`
//! ascending, then id), so results are stable across runs even though the map and the
//! buckets are unordered.
//!
//! ## Concurrency
//!
//! The store is a plain value: mutation needs `&mut self`, so the borrow checker rules
//! out a reader observing the gap between "remove old bucket entry" and "add new bucket
//! entry". Callers sharing one store across threads wrap it in a lock.

pub mod memory;

pub use memory::AnnotationStore;
