//! Field extraction — matches one raw line against the flow-log grammar.
//!
//! The grammar is a wire-format contract shared with upstream producers:
//! eight single-space-separated tokens, matched end-to-end. A line that does
//! not match is a rejection, not a record, and must reach no destination.

use regex::Regex;
use std::sync::OnceLock;

/// The flow-log line grammar, token for token:
///
/// ```text
/// <destIp> <srcIp> <ts> <bytes> <destPort> <srcPort> <authorized> <logId>
/// ```
///
/// The timestamp token is either 10 epoch digits or `YYYY-MM-DDTHH:MM:SSZ`.
/// The inner pattern is part of the external wire format; only the `^`/`$`
/// anchors are ours, to rule out partial matches.
pub const FLOW_LINE_PATTERN: &str = r"^(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s(\d{10}|\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z)\s(\d{1,6})\s(\d{1,4})\s(\d{1,3})\s(true|false)\s(\d)$";

static FLOW_LINE: OnceLock<Regex> = OnceLock::new();

fn flow_line() -> &'static Regex {
    FLOW_LINE.get_or_init(|| {
        Regex::new(FLOW_LINE_PATTERN).expect("FLOW_LINE_PATTERN is a valid regex")
    })
}

/// The eight tokens captured from a matching line, in grammar order.
///
/// Values are kept as raw strings; nothing here is numerically validated
/// beyond what the grammar itself enforces (a `999.999.999.999` "address"
/// is accepted, deliberately matching the pattern's permissiveness).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFields {
    pub dest_ip: String,
    pub src_ip: String,
    pub ts: String,
    pub bytes: String,
    pub dest_port: String,
    pub src_port: String,
    pub authorized: String,
    pub log_id: String,
}

/// Match `line` against the grammar and capture its fields.
///
/// Returns `None` when the line does not match end-to-end; callers treat
/// that as a [`RejectReason::GrammarMismatch`](crate::RejectReason). Pure
/// function of the input.
pub fn extract(line: &str) -> Option<CapturedFields> {
    let caps = flow_line().captures(line)?;
    Some(CapturedFields {
        dest_ip: caps[1].to_string(),
        src_ip: caps[2].to_string(),
        ts: caps[3].to_string(),
        bytes: caps[4].to_string(),
        dest_port: caps[5].to_string(),
        src_port: caps[6].to_string(),
        authorized: caps[7].to_string(),
        log_id: caps[8].to_string(),
    })
}
