//! The per-record transform: extract → normalize → encode → route.
//!
//! [`Transform::apply`] is a pure function of one input line and the
//! route table it was constructed with. It performs no I/O, holds no
//! mutable state, and can run on any number of workers over disjoint
//! lines; writing the result is the dispatcher's job.

use crate::grammar;
use crate::record::EncodedRecord;
use crate::route::{RouteTable, RoutingDecision};
use crate::timestamp::{self, InvalidEpoch};
use thiserror::Error;

/// Why a line was rejected from every destination, archive included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The line does not match the flow-log grammar end-to-end.
    #[error("line does not match the flow-log grammar")]
    GrammarMismatch,
    /// The timestamp token looked like an epoch but was not one.
    #[error(transparent)]
    Timestamp(#[from] InvalidEpoch),
}

/// The result of transforming one valid line: the encoded record, its
/// serialized wire form, and the destinations it must reach. The wire form
/// is serialized once here so every destination receives an identical copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub record: EncodedRecord,
    pub line: String,
    pub decision: RoutingDecision,
}

/// The composed transform stage, bound to one route table for the run.
#[derive(Debug, Clone)]
pub struct Transform {
    routes: RouteTable,
}

impl Transform {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Transform one raw line, or explain why it must be dropped.
    pub fn apply(&self, raw: &str) -> Result<Routed, RejectReason> {
        let fields = grammar::extract(raw).ok_or(RejectReason::GrammarMismatch)?;
        let normalized = timestamp::normalize(&fields.ts)?;
        let decision = self.routes.route(&fields.log_id);
        let record = EncodedRecord::new(&fields, normalized);
        let line = record.to_line();
        Ok(Routed {
            record,
            line,
            decision,
        })
    }
}
