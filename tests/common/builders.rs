//! Test builders — ergonomic constructors for grammar-conforming lines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They do not validate their inputs, which is the point:
//! tests also need to build lines that the grammar must reject.

/// Fluent builder for one flow-log line.
///
/// Defaults produce the canonical conforming line
/// `10.0.0.1 10.0.0.2 1609459261 1500 443 500 true 1`.
pub struct FlowLineBuilder {
    dest_ip: String,
    src_ip: String,
    ts: String,
    bytes: String,
    dest_port: String,
    src_port: String,
    authorized: String,
    log_id: String,
}

impl FlowLineBuilder {
    pub fn new() -> Self {
        Self {
            dest_ip: "10.0.0.1".to_string(),
            src_ip: "10.0.0.2".to_string(),
            ts: "1609459261".to_string(),
            bytes: "1500".to_string(),
            dest_port: "443".to_string(),
            src_port: "500".to_string(),
            authorized: "true".to_string(),
            log_id: "1".to_string(),
        }
    }

    pub fn dest_ip(mut self, v: impl Into<String>) -> Self {
        self.dest_ip = v.into();
        self
    }

    pub fn src_ip(mut self, v: impl Into<String>) -> Self {
        self.src_ip = v.into();
        self
    }

    pub fn ts(mut self, v: impl Into<String>) -> Self {
        self.ts = v.into();
        self
    }

    pub fn bytes(mut self, v: impl Into<String>) -> Self {
        self.bytes = v.into();
        self
    }

    pub fn dest_port(mut self, v: impl Into<String>) -> Self {
        self.dest_port = v.into();
        self
    }

    pub fn src_port(mut self, v: impl Into<String>) -> Self {
        self.src_port = v.into();
        self
    }

    pub fn authorized(mut self, v: impl Into<String>) -> Self {
        self.authorized = v.into();
        self
    }

    pub fn log_id(mut self, v: impl Into<String>) -> Self {
        self.log_id = v.into();
        self
    }

    pub fn build(self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            self.dest_ip,
            self.src_ip,
            self.ts,
            self.bytes,
            self.dest_port,
            self.src_port,
            self.authorized,
            self.log_id,
        )
    }
}

impl Default for FlowLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Canonical epoch-timestamped line with the given logId.
pub fn line_with_log_id(log_id: &str) -> String {
    FlowLineBuilder::new().log_id(log_id).build()
}

/// Canonical line carrying an already-ISO timestamp.
pub fn iso_line(log_id: &str) -> String {
    FlowLineBuilder::new()
        .ts("2021-01-01T00:01:01Z")
        .log_id(log_id)
        .build()
}

/// Build a corpus of `n` valid lines cycling logIds 0–9.
pub fn build_corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            FlowLineBuilder::new()
                .bytes(format!("{}", 64 + i % 1400))
                .log_id(format!("{}", i % 10))
                .build()
        })
        .collect()
}
