//! logshed-io — line sources and destination sinks for logshed.
//!
//! A source yields raw lines from a file or stdin; a sink persists encoded
//! lines for one destination. Sinks are synchronous and buffered; each one
//! is driven by a single blocking writer task fed from an async channel, so
//! a destination only ever has one writer.

pub mod sink;
pub mod source;
pub mod writer;

pub use sink::{FileSink, LineSink, MemorySink};
pub use source::LineSource;
pub use writer::SinkError;
