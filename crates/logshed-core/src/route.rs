//! Routing — decides which destinations a record reaches.
//!
//! Every record is bound for the archive destination. A record whose
//! `logId` appears in the secondary table is *additionally* bound for that
//! one secondary destination; any other `logId` routes to archive only and
//! that is not an error. The table is closed at construction time:
//! extending the routing policy means extending the table, never the
//! algorithm.

use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// A logical output destination for one record.
///
/// `Secondary` carries the logId digit it was keyed on, so the variant set
/// is closed but still extendable through configuration alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Archive,
    Secondary(u8),
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Archive => write!(f, "archive"),
            Tag::Secondary(digit) => write!(f, "secondary-{digit}"),
        }
    }
}

/// The set of tags one record must be written to. Always contains
/// [`Tag::Archive`]; contains at most one secondary tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    tags: Vec<Tag>,
}

impl RoutingDecision {
    fn archive_only() -> Self {
        Self {
            tags: vec![Tag::Archive],
        }
    }

    fn with_secondary(digit: u8) -> Self {
        Self {
            tags: vec![Tag::Archive, Tag::Secondary(digit)],
        }
    }

    /// The tags in dispatch order, archive first.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// The static tag → destination binding table.
///
/// Built once from configuration and shared for the whole run. Destination
/// names are opaque identifiers here; the runner decides what they mean
/// (for the file sink, `<output-dir>/<name>.txt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    archive: String,
    secondary: BTreeMap<u8, String>,
}

impl RouteTable {
    /// Build the table from an archive destination name and a
    /// `logId → destination name` map. Keys must be single ASCII digits
    /// (the grammar only ever captures one digit) and destination names
    /// must be non-empty and pairwise distinct, so the tag → destination
    /// mapping stays 1:1.
    pub fn new(archive: impl Into<String>, secondary: &BTreeMap<String, String>) -> Result<Self> {
        let archive = archive.into();
        if archive.is_empty() {
            bail!("archive destination name must not be empty");
        }

        let mut table = BTreeMap::new();
        for (log_id, destination) in secondary {
            let digit = match log_id.as_bytes() {
                [b] if b.is_ascii_digit() => b - b'0',
                _ => bail!("secondary route key {log_id:?} is not a single digit"),
            };
            if destination.is_empty() {
                bail!("secondary route {log_id:?} has an empty destination name");
            }
            if *destination == archive || table.values().any(|d| d == destination) {
                bail!("destination {destination:?} is bound to more than one tag");
            }
            table.insert(digit, destination.clone());
        }

        Ok(Self {
            archive,
            secondary: table,
        })
    }

    /// The default binding from the original job:
    /// archive plus `"1" → output1`, `"2" → output2`.
    pub fn defaults() -> Self {
        let secondary = BTreeMap::from([
            ("1".to_string(), "output1".to_string()),
            ("2".to_string(), "output2".to_string()),
        ]);
        Self::new("archive", &secondary).expect("default route table is valid")
    }

    /// Compute the destination tags for a record's `logId` field.
    pub fn route(&self, log_id: &str) -> RoutingDecision {
        match log_id.as_bytes() {
            [b] if b.is_ascii_digit() && self.secondary.contains_key(&(b - b'0')) => {
                RoutingDecision::with_secondary(b - b'0')
            }
            _ => RoutingDecision::archive_only(),
        }
    }

    /// Resolve a tag to its bound destination name.
    pub fn destination(&self, tag: Tag) -> Option<&str> {
        match tag {
            Tag::Archive => Some(self.archive.as_str()),
            Tag::Secondary(digit) => self.secondary.get(&digit).map(String::as_str),
        }
    }

    /// All configured `(tag, destination name)` bindings, archive first.
    pub fn bindings(&self) -> impl Iterator<Item = (Tag, &str)> {
        std::iter::once((Tag::Archive, self.archive.as_str())).chain(
            self.secondary
                .iter()
                .map(|(digit, name)| (Tag::Secondary(*digit), name.as_str())),
        )
    }
}
