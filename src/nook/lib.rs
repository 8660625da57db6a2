//! # Nook Architecture
//!
//! Nook is a **UI-agnostic note organizer library**. Notes ("items") live in
//! named collections ("categories"); the library owns the authoritative
//! in-memory state, the search/sort engine, and the snapshot exchange format.
//! The CLI binary is just one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, search.rs, validate.rs, normalize.rs,      │
//! │        snapshot.rs)                                         │
//! │  - Pure business logic over Rust types                      │
//! │  - All mutations go through CategoryStore                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Adapters (persist.rs, share.rs)                            │
//! │  - SnapshotStore: durable save/load of the serialized store │
//! │  - ShareAdapter: moves snapshot text in/out of the process  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `store.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! The same core could serve a GUI, a sync daemon, or any other UI.
//!
//! Time and identifiers are likewise injected ([`env::Clock`], [`env::IdGen`])
//! so every mutation is reproducible under test.
//!
//! ## Import Pipeline
//!
//! External snapshot text is never trusted directly. It flows through
//! [`validate`] (structural schema check, first violation wins), then
//! [`normalize`] (defaults filled in, nothing present is altered), and only
//! the resulting [`snapshot::Snapshot`] may be handed to
//! [`store::CategoryStore::import_data`], which replaces the whole store in
//! one swap.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Item`, `Category`, `SortOrder`)
//! - [`store`]: The authoritative in-memory store and its mutation contract
//! - [`search`]: Pure filter/sort functions for display
//! - [`validate`]: Structural checks on untrusted snapshot JSON
//! - [`normalize`]: Default-filling on validated snapshots
//! - [`snapshot`]: The exchange format and export serializer
//! - [`env`]: Injected clock and identifier sources
//! - [`persist`]: Durable storage of the serialized store
//! - [`share`]: Moving snapshot text across the process boundary
//! - [`error`]: Error types

pub mod env;
pub mod error;
pub mod model;
pub mod normalize;
pub mod persist;
pub mod search;
pub mod share;
pub mod snapshot;
pub mod store;
pub mod validate;
