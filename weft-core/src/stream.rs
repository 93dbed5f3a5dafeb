//! Producer/consumer streaming bridge.
//!
//! Turns an asynchronously produced sequence of nodes into a single
//! [`Node`]. The producer runs on its own thread and hands nodes over a
//! rendezvous channel; the bridge consumes them in arrival order, threading
//! the pending delimiter through each, until the producer drops its sender.
//!
//! ```no_run
//! use std::thread;
//! use weft_core::{stream, tag, text};
//!
//! let rows = stream::bridge(|| {
//!     let (tx, rx) = stream::channel();
//!     thread::spawn(move || {
//!         for i in 0..10 {
//!             let row = tag("tr", vec![tag("td", vec![text(i.to_string())])]);
//!             if tx.send(row).is_err() {
//!                 break; // consumer gave up
//!             }
//!         }
//!     });
//!     rx
//! });
//! ```
//!
//! The bridge takes a *factory*, not a channel: nothing is constructed
//! until the node actually renders, so a cache hit upstream skips the
//! producer entirely.

use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
pub use crossbeam_channel::{Receiver, Sender};

use crate::node::Node;

/// A rendezvous channel for handing nodes to a bridge: zero capacity, so
/// at most one item is in flight and the producer blocks until the bridge
/// takes it. Dropping the sender signals exhaustion.
pub fn channel() -> (Sender<Node>, Receiver<Node>) {
    crossbeam_channel::bounded(0)
}

/// Bridge a node source into a single node, consuming to exhaustion.
///
/// `open` is invoked when the bridge renders. Nodes are written in exactly
/// the order the source yields them. With no deadline this blocks for as
/// long as the producer stalls - see [`bridge_within`] for a bounded wait.
pub fn bridge<F>(open: F) -> Node
where
    F: FnOnce() -> Receiver<Node> + Send + 'static,
{
    Node::from_fn(move |mut pending, sink| {
        let source = open();
        while let Ok(node) = source.recv() {
            pending = node.render(pending, sink);
        }
        pending
    })
}

/// Bridge a node source with a bounded total wait.
///
/// One deadline is armed when the bridge starts - it is not reset per
/// item. Every take races that deadline; when it fires, the bridge stops,
/// drops the receiver, and returns the pending state as of the last
/// consumed node. This is a silent partial result, not an error.
///
/// Cancellation is cooperative: the producer is never terminated, but once
/// the receiver is dropped every later `send` fails with a `SendError`, so
/// a producer that checks its send results stops promptly. One that
/// ignores them runs out its sequence against a dead channel.
///
/// A zero `timeout` means no deadline at all, same as [`bridge`].
pub fn bridge_within<F>(open: F, timeout: Duration) -> Node
where
    F: FnOnce() -> Receiver<Node> + Send + 'static,
{
    if timeout.is_zero() {
        return bridge(open);
    }
    Node::from_fn(move |mut pending, sink| {
        let source = open();
        let deadline = Instant::now() + timeout;
        loop {
            match source.recv_deadline(deadline) {
                Ok(node) => pending = node.render(pending, sink),
                Err(RecvTimeoutError::Timeout) => {
                    log::debug!("stream deadline elapsed; abandoning source");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        pending
    })
}
