//! # Cardlink Architecture
//!
//! Cardlink rewrites a set of static attorney-profile HTML pages so that each
//! attorney card becomes a clickable link to that attorney's own page. It is a
//! library with a thin CLI client, and the layering follows that split:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output                         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Linker (linker.rs)                                         │
//! │  - Batch driver: read file, apply mapping, write if changed │
//! │  - Returns structured reports, never prints                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rewrite core (rewrite.rs)                                  │
//! │  - Pure text transform: splice an anchor around one card    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rewrite is a textual pattern match, not an HTML parse -- see
//! [`rewrite`] for why that limitation is kept on purpose.
//!
//! ## Module Overview
//!
//! - [`config`]: `LinkerConfig` -- the target file list and name-to-link
//!   mapping, with the built-in roster tables and JSON load/save
//! - [`linker`]: the per-file `process` operation and the batch runner
//! - [`rewrite`]: the card pattern and anchor splicing
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod linker;
pub mod rewrite;
