//! # Marginalia Architecture
//!
//! Marginalia is a **UI-agnostic annotation engine**. Readers, viewers and sync services
//! attach highlights, notes, questions and other marks to parts of a document; this crate
//! stores them, answers queries over them and moves them in and out of JSON, Markdown
//! and CSV.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - AnnotationEngine: owns store, groups and config          │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filtering, search, statistics, grouping, tags, groups    │
//! │  - JSON round-trip, Markdown and CSV exports                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, index.rs)                           │
//! │  - AnnotationStore: primary map plus document and target    │
//! │    indices, kept consistent on every mutation               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in Core
//!
//! Nothing here touches stdout, the filesystem or the network, except
//! [`config::EngineConfig::load`] reading its TOML file. Exports return strings and a
//! suggested filename; writing them somewhere is the caller's job.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of every rule and edge case, built on
//!    the `StoreFixture` helpers in [`store::memory`].
//! 2. **API** (`api.rs`): dispatch and configuration plumbing.
//! 3. **Integration** (`tests/`): end-to-end properties through [`api::AnnotationEngine`].
//!
//! ## Module Overview
//!
//! - [`api`]: The engine facade, entry point for all operations
//! - [`commands`]: Query, tagging, grouping and serialization logic
//! - [`store`]: The indexed in-memory store
//! - [`index`]: Bucketed id index used by the store
//! - [`model`]: Core data types (`Annotation`, targets, enums, groups)
//! - [`flat`]: Canonical flat records for human-facing exports
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flat;
pub mod index;
pub mod model;
pub mod store;

pub use api::AnnotationEngine;
pub use error::{MarginaliaError, Result};
