//! logshed — splits line-oriented network flow logs into per-destination
//! JSON feeds.
//!
//! # Architecture
//!
//! ```text
//! LineSource ──► Transform ──► Dispatcher ──► writer ──► archive.txt
//!                   │                 └─────► writer ──► output1.txt
//!                   └── rejects ────────────► writer ──► …
//! ```
//!
//! The transform (grammar → timestamp → record → route) is pure and lives
//! in `logshed-core`; sources and sinks live in `logshed-io`. This crate
//! wires them into a run: one bounded channel and one writer task per
//! destination, driven by the CLI in `main`.

pub mod pipeline;
