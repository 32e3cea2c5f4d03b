//! Pipeline runner — one batch run from source to finalized artifacts.
//!
//! Ownership is explicit: the runner builds the route table, opens one sink
//! per destination, then hands each sink to its own writer task. The
//! dispatcher holds the only senders for routed destinations, so dropping
//! it after the source drains is what lets the writers finish.

use anyhow::{anyhow, bail, Context, Result};
use logshed_core::{Config, Dispatcher, Transform};
use logshed_io::{writer, FileSink, LineSource};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Bound on in-flight lines per destination. Full channels block the
/// transform loop, which is the only back-pressure this stage provides.
const CHANNEL_CAPACITY: usize = 1024;

/// Counters reported at end of run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw lines consumed from the source.
    pub lines_read: u64,
    /// Lines that transformed into records.
    pub records: u64,
    /// Total destination writes (one record may be written N times).
    pub writes: u64,
    /// Lines rejected by the grammar or the timestamp normalizer.
    pub rejects: u64,
}

/// Run one batch: drain the source, fan records out, join every writer.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let routes = config.route_table()?;
    let transform = Transform::new(routes.clone());

    let mut destinations: Vec<String> = routes.bindings().map(|(_, n)| n.to_string()).collect();
    if let Some(rejects) = config.rejects() {
        if destinations.iter().any(|d| d == rejects) {
            bail!("rejects destination {rejects:?} is already bound to a routing tag");
        }
        destinations.push(rejects.to_string());
    }

    // One artifact, one channel, one writer per destination.
    let mut senders = HashMap::new();
    let mut writers = Vec::new();
    for name in &destinations {
        let path = config.output.dir.join(format!("{name}.txt"));
        let sink = FileSink::create(&path)
            .with_context(|| format!("creating destination artifact {}", path.display()))?;
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        senders.insert(name.clone(), tx);
        writers.push(writer::spawn(name.clone(), sink, rx));
    }

    let rejects_tx = config.rejects().and_then(|name| senders.get(name).cloned());
    let dispatcher = Dispatcher::new(&routes, &mut senders)?;
    drop(senders);

    let mut source = LineSource::open(&config.input.path)
        .await
        .with_context(|| format!("opening input {:?}", config.input.path))?;

    let mut summary = RunSummary::default();
    while let Some(line) = source.next_line().await.context("reading input")? {
        summary.lines_read += 1;
        match transform.apply(&line) {
            Ok(routed) => {
                summary.records += 1;
                summary.writes += dispatcher.dispatch(&routed.decision, &routed.line).await? as u64;
            }
            Err(reason) => {
                summary.rejects += 1;
                tracing::warn!(%reason, line = %line, "rejected line");
                if let Some(tx) = &rejects_tx {
                    tx.send(line)
                        .await
                        .map_err(|_| anyhow!("rejects destination stopped accepting writes"))?;
                }
            }
        }
    }

    // Close every channel, then wait for each artifact to be finalized.
    drop(dispatcher);
    drop(rejects_tx);
    for handle in writers {
        handle.await.context("writer task panicked")??;
    }

    tracing::info!(
        lines = summary.lines_read,
        records = summary.records,
        writes = summary.writes,
        rejects = summary.rejects,
        "run complete"
    );
    Ok(summary)
}
