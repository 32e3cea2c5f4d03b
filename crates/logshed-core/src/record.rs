//! Record encoding — the fixed-key JSON form of one parsed flow event.
//!
//! The serialized key order is a downstream contract and is fixed by the
//! struct's field order: `destinationIp, destinationPort, sourcePort,
//! sourceIp, bytes, authorized, logId, timestamp`. Every value is a string,
//! numeric fields included; consumers do their own typing.

use crate::grammar::CapturedFields;
use serde::{Deserialize, Serialize};

/// One encoded flow record. All eight keys are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EncodedRecord {
    pub destination_ip: String,
    pub destination_port: String,
    pub source_port: String,
    pub source_ip: String,
    pub bytes: String,
    pub authorized: String,
    pub log_id: String,
    pub timestamp: String,
}

impl EncodedRecord {
    /// Build a record from captured fields plus the already-normalized
    /// timestamp. Values are copied verbatim; the raw `ts` token in
    /// `fields` is the one input that is *not* used here.
    pub fn new(fields: &CapturedFields, timestamp: String) -> Self {
        Self {
            destination_ip: fields.dest_ip.clone(),
            destination_port: fields.dest_port.clone(),
            source_port: fields.src_port.clone(),
            source_ip: fields.src_ip.clone(),
            bytes: fields.bytes.clone(),
            authorized: fields.authorized.clone(),
            log_id: fields.log_id.clone(),
            timestamp,
        }
    }

    /// Serialize to the single-line JSON wire form.
    pub fn to_line(&self) -> String {
        // A struct of plain strings has no failing serialization path.
        serde_json::to_string(self).expect("string-only record serializes")
    }
}
