//! Destination writer tasks.
//!
//! One writer per destination: the task owns its sink outright and drains a
//! bounded channel on a blocking thread, so concurrent dispatchers can
//! never interleave writes within a destination. The task finishes the sink
//! once the channel closes, then reports how many lines it wrote.

use crate::sink::LineSink;
use std::io;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle};

/// A destination write failed. Carries the destination name so the runner
/// can say *which* artifact is incomplete.
#[derive(Debug, Error)]
#[error("destination {destination:?}: {source}")]
pub struct SinkError {
    pub destination: String,
    #[source]
    pub source: io::Error,
}

/// Spawn the writer task for one destination. The returned handle resolves
/// once the sender side is dropped and the sink is finished.
pub fn spawn<S>(
    destination: String,
    mut sink: S,
    mut rx: mpsc::Receiver<String>,
) -> JoinHandle<Result<u64, SinkError>>
where
    S: LineSink + 'static,
{
    task::spawn_blocking(move || {
        let fail = |source: io::Error, destination: &str| SinkError {
            destination: destination.to_string(),
            source,
        };

        let mut written = 0u64;
        while let Some(line) = rx.blocking_recv() {
            sink.append(&line).map_err(|e| fail(e, &destination))?;
            written += 1;
        }
        sink.finish().map_err(|e| fail(e, &destination))?;
        tracing::debug!(%destination, written, "writer finished");
        Ok(written)
    })
}
