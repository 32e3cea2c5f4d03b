//! Domain-specific assertions for logshed harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! transform guarantee was violated and for *which* input line.

/// The wire contract's key order, as it must appear in every encoded line.
pub const CONTRACT_KEY_ORDER: [&str; 8] = [
    "destinationIp",
    "destinationPort",
    "sourcePort",
    "sourceIp",
    "bytes",
    "authorized",
    "logId",
    "timestamp",
];

/// Assert that a [`Routed`](logshed_core::Routed) decision is exactly the
/// given tag list, in dispatch order.
#[macro_export]
macro_rules! assert_routes_to {
    ($routed:expr, $tags:expr) => {{
        let routed: &logshed_core::Routed = &$routed;
        let expected: &[logshed_core::Tag] = &$tags;
        if routed.decision.tags() != expected {
            panic!(
                "assert_routes_to! failed:\n  expected tags: {:?}\n  actual tags:   {:?}\n  record: {}",
                expected,
                routed.decision.tags(),
                routed.line
            );
        }
    }};
}

/// Assert that a line is rejected by the transform with the given reason.
#[macro_export]
macro_rules! assert_rejected {
    ($transform:expr, $line:expr, $reason:pat) => {{
        let line: &str = $line;
        match $transform.apply(line) {
            Err($reason) => {}
            Err(other) => panic!(
                "assert_rejected! failed: wrong reason.\n  line: {line:?}\n  got:  {other:?}"
            ),
            Ok(routed) => panic!(
                "assert_rejected! failed: line was accepted.\n  line: {line:?}\n  encoded: {}",
                routed.line
            ),
        }
    }};
}

/// Assert that an encoded JSON line carries the contract keys in their
/// exact serialized order.
pub fn assert_contract_key_order(line: &str) {
    let mut last = 0usize;
    for key in CONTRACT_KEY_ORDER {
        let needle = format!("\"{key}\":");
        match line[last..].find(&needle) {
            Some(offset) => last += offset,
            None => panic!(
                "encoded line is missing key {key:?} (or it is out of order):\n  {line}"
            ),
        }
    }
}

/// Assert that every tag in a decision resolves to a distinct destination.
pub fn assert_one_to_one_binding(routed: &logshed_core::Routed, table: &logshed_core::RouteTable) {
    let mut seen = std::collections::HashSet::new();
    for &tag in routed.decision.tags() {
        let destination = table
            .destination(tag)
            .unwrap_or_else(|| panic!("tag {tag} has no bound destination"));
        assert!(
            seen.insert(destination.to_string()),
            "destination {destination:?} bound to more than one tag in {:?}",
            routed.decision.tags()
        );
    }
}
