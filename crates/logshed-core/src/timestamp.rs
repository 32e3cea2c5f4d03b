//! Timestamp normalization — canonicalizes the grammar's timestamp token.
//!
//! Two input shapes exist on the wire: a 10-digit Unix epoch in whole
//! seconds, and an already-ISO `YYYY-MM-DDTHH:MM:SSZ` string. Epochs are
//! rendered as UTC with minute precision (`YYYY-MM-DDTHH:MMZ`, seconds
//! truncated); ISO inputs pass through byte-for-byte. The ISO branch keeps
//! its seconds, and that asymmetry is part of the output contract, so both
//! shapes must stay exactly as they are.

use chrono::DateTime;
use thiserror::Error;

/// Inputs shorter than this are treated as epoch seconds; everything else
/// is assumed to already be ISO-8601.
const EPOCH_MAX_LEN: usize = 11;

/// The epoch branch received something that is not a representable
/// second count. Rejects the whole record; a partial or guessed timestamp
/// must never be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid epoch timestamp {value:?}")]
pub struct InvalidEpoch {
    pub value: String,
}

/// Normalize a raw timestamp token.
///
/// ```
/// assert_eq!(
///     logshed_core::timestamp::normalize("1609459261").unwrap(),
///     "2021-01-01T00:01Z",
/// );
/// ```
pub fn normalize(ts: &str) -> Result<String, InvalidEpoch> {
    if ts.len() >= EPOCH_MAX_LEN {
        return Ok(ts.to_string());
    }

    let secs: i64 = ts.parse().map_err(|_| InvalidEpoch {
        value: ts.to_string(),
    })?;
    let utc = DateTime::from_timestamp(secs, 0).ok_or_else(|| InvalidEpoch {
        value: ts.to_string(),
    })?;
    Ok(utc.format("%Y-%m-%dT%H:%MZ").to_string())
}
