//! Static line corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative input
//! lines. Valid lines conform to the flow-log grammar; malformed ones are
//! each wrong in a different way so grammar tests cover distinct failures.

use std::path::{Path, PathBuf};

/// Grammar-conforming lines covering both timestamp shapes and a spread of
/// logIds (recognized and not).
pub const CORPUS_VALID: &[&str] = &[
    "10.0.0.1 10.0.0.2 1609459261 1500 443 500 true 1",
    "192.168.1.10 172.16.0.3 1609459200 64 80 53 false 2",
    "10.0.0.5 10.0.0.6 2021-01-01T00:01:01Z 900 8080 99 true 1",
    "10.1.2.3 10.4.5.6 1700000000 123456 9999 999 false 0",
    "255.255.255.255 0.0.0.0 1000000000 1 1 1 true 9",
    "10.0.0.7 10.0.0.8 2024-06-30T23:59:59Z 42 22 21 false 3",
];

/// Lines the grammar must reject, each for a different reason.
pub const CORPUS_MALFORMED: &[&str] = &[
    "not a log line",
    "",
    "10.0.0.1 10.0.0.2 1609459261 1500 443 500 true 1 extra",
    "10.0.0.1 10.0.0.2 1609459261 1500 443 5000 true 1",
    "10.0.0.1 10.0.0.2 160945926 1500 443 500 true 1",
    "10.0.0.1 10.0.0.2 2021-01-01 00:01:01 1500 443 500 true 1",
    "10.0.0.1 10.0.0.2 1609459261 1500 443 500 maybe 1",
    "10.0.0.1 10.0.0.2 1609459261 1500 443 500 true 12",
    "10.0.0.1  10.0.0.2 1609459261 1500 443 500 true 1",
];

/// A realistic interleaving of valid and malformed lines.
pub const CORPUS_MIXED: &[&str] = &[
    "10.0.0.1 10.0.0.2 1609459261 1500 443 500 true 1",
    "not a log line",
    "192.168.1.10 172.16.0.3 1609459200 64 80 53 false 2",
    "10.1.2.3 10.4.5.6 1700000000 123456 9999 999 false 0",
    "10.0.0.1 10.0.0.2 1609459261 1500 443 5000 true 1",
    "10.0.0.5 10.0.0.6 2021-01-01T00:01:01Z 900 8080 99 true 1",
    "255.255.255.255 0.0.0.0 1000000000 1 1 1 true 9",
];

// ---------------------------------------------------------------------------
// Pipeline harness helpers
// ---------------------------------------------------------------------------

/// Write `lines` as an input file inside `dir` and return its path.
pub fn write_input(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("input.txt");
    std::fs::write(&path, lines.join("\n")).expect("writing test input");
    path
}

/// Read a destination artifact back as its lines.
pub fn read_artifact(out_dir: &Path, destination: &str) -> Vec<String> {
    let path = out_dir.join(format!("{destination}.txt"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("reading artifact {}: {e}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}
