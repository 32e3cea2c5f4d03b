//! logshed-core — core transform for logshed.
//!
//! This crate exposes the per-record transform stages as public modules,
//! plus the shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! RawLine ──► grammar ──► timestamp ──► record ──► route
//!                                                    │
//!                               dispatch ◄───────────┘
//! ```
//!
//! The left-to-right stages are pure functions composed by
//! [`transform::Transform`]; only [`dispatch`] touches the outside world,
//! and it does so by handing encoded lines to per-destination writer
//! channels owned by the surrounding runner.

pub mod config;
pub mod dispatch;
pub mod grammar;
pub mod record;
pub mod route;
pub mod timestamp;
pub mod transform;

pub use config::Config;
pub use dispatch::{DispatchError, Dispatcher};
pub use grammar::CapturedFields;
pub use record::EncodedRecord;
pub use route::{RouteTable, RoutingDecision, Tag};
pub use transform::{RejectReason, Routed, Transform};
