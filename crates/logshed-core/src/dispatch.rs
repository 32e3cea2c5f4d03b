//! Multi-sink dispatch — delivers an encoded record to every tagged
//! destination.
//!
//! Each destination is owned by exactly one writer on the far side of a
//! bounded mpsc channel; the dispatcher only ever holds senders. That makes
//! the single-writer-per-destination discipline structural rather than a
//! configuration promise. A record with N tags produces exactly N sends,
//! each an independent copy of the encoded line — there is no transaction
//! spanning destinations.

use crate::route::{RouteTable, RoutingDecision, Tag};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::mpsc;

/// A destination write could not be performed. Fatal for the run: the
/// dispatcher never retries, that is the surrounding runner's call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The writer for this destination has stopped accepting lines.
    #[error("destination {destination:?} is no longer accepting writes")]
    SinkClosed { destination: String },
    /// A routing decision produced a tag with no bound destination.
    #[error("no destination bound for tag {tag}")]
    Unbound { tag: Tag },
}

/// Tag → destination channel bindings, fixed for the whole run.
pub struct Dispatcher {
    channels: HashMap<Tag, (String, mpsc::Sender<String>)>,
}

impl Dispatcher {
    /// Bind every tag in the route table to the sender registered under its
    /// destination name. Every configured destination must have a sender;
    /// leftover senders (e.g. a rejects channel) are simply not consumed.
    pub fn new(
        routes: &RouteTable,
        senders: &mut HashMap<String, mpsc::Sender<String>>,
    ) -> Result<Self> {
        let mut channels = HashMap::new();
        for (tag, name) in routes.bindings() {
            let tx = senders
                .remove(name)
                .ok_or_else(|| anyhow!("no sink registered for destination {name:?}"))?;
            channels.insert(tag, (name.to_string(), tx));
        }
        Ok(Self { channels })
    }

    /// Send one copy of `line` to each destination in the decision.
    /// Returns the number of writes performed; on error, writes already
    /// sent stay sent (no rollback).
    pub async fn dispatch(
        &self,
        decision: &RoutingDecision,
        line: &str,
    ) -> Result<usize, DispatchError> {
        let mut writes = 0;
        for &tag in decision.tags() {
            let (name, tx) = self
                .channels
                .get(&tag)
                .ok_or(DispatchError::Unbound { tag })?;
            tx.send(line.to_string())
                .await
                .map_err(|_| DispatchError::SinkClosed {
                    destination: name.clone(),
                })?;
            writes += 1;
        }
        Ok(writes)
    }
}
