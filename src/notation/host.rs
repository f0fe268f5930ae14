//! Parsing host: offloads `parse` onto a background worker task.
//!
//!     The parser itself is synchronous and side-effect-free; this layer is
//!     the asynchronous boundary around it. Each request gets a
//!     monotonically increasing ID and is dispatched FIFO over a channel to
//!     a worker task; the caller awaits a oneshot reply keyed to that
//!     request. A per-request timeout rejects the wait (and drops the
//!     pending reply slot) even if the worker never answers.
//!
//!     Fault handling is message-passing all the way down: if the worker is
//!     gone, every in-flight oneshot completes with a receive error, each
//!     waiting caller falls back to parsing synchronously in-process, and a
//!     fresh worker is lazily respawned after a short backoff. A transport
//!     failure therefore never blocks parsing. There is no per-request
//!     cancellation and no ordering guarantee beyond FIFO dispatch.

use crate::notation::ast::diagnostics::ParseResult;
use crate::notation::parsing;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{debug, warn};

/// Per-request timeout before the pending request is rejected.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Backoff before a faulted worker is respawned.
const RESPAWN_BACKOFF: Duration = Duration::from_millis(500);

struct Request {
    id: u64,
    text: String,
    reply: oneshot::Sender<ParseResult>,
}

struct HostState {
    worker: Option<mpsc::UnboundedSender<Request>>,
    last_fault: Option<Instant>,
}

/// Handle to the background parsing worker.
pub struct ParserHost {
    state: Mutex<HostState>,
    next_id: AtomicU64,
}

impl Default for ParserHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HostState {
                worker: None,
                last_fault: None,
            }),
            next_id: AtomicU64::new(1),
        }
    }

    /// Parse on the background worker, falling back to the in-process
    /// parser when the worker is unavailable or faults mid-request.
    pub async fn parse(&self, text: &str) -> ParseResult {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let rx = {
            let mut state = self.state.lock().await;
            match self.dispatch(&mut state, id, text) {
                Some(rx) => rx,
                None => {
                    debug!(request = id, "parser worker unavailable, parsing in-process");
                    return parsing::parse(text);
                }
            }
        };

        match tokio::time::timeout(REQUEST_TIMEOUT, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => {
                // Worker dropped our reply slot: it faulted. Every other
                // in-flight request sees the same, so just record the fault
                // and answer this caller in-process.
                warn!(request = id, "parser worker faulted mid-request");
                let mut state = self.state.lock().await;
                state.worker = None;
                state.last_fault = Some(Instant::now());
                drop(state);
                parsing::parse(text)
            }
            Err(_) => {
                warn!(request = id, "parse request timed out");
                ParseResult::rejected(crate::notation::ast::diagnostics::ParseError::error(
                    0,
                    1,
                    1,
                    format!(
                        "Parse request timed out after {}s",
                        REQUEST_TIMEOUT.as_secs()
                    ),
                ))
            }
        }
    }

    /// Enqueue a request on the worker, lazily (re)spawning it when allowed.
    /// `None` means the worker is unavailable and the caller should fall
    /// back to the synchronous path.
    fn dispatch(
        &self,
        state: &mut HostState,
        id: u64,
        text: &str,
    ) -> Option<oneshot::Receiver<ParseResult>> {
        if state.worker.is_none() {
            let in_backoff = state
                .last_fault
                .is_some_and(|at| at.elapsed() < RESPAWN_BACKOFF);
            if in_backoff {
                return None;
            }
            state.worker = Some(spawn_worker());
        }

        let (reply, rx) = oneshot::channel();
        let request = Request {
            id,
            text: text.to_string(),
            reply,
        };
        if let Some(worker) = &state.worker {
            if worker.send(request).is_err() {
                warn!(request = id, "parser worker channel closed, tearing down");
                state.worker = None;
                state.last_fault = Some(Instant::now());
                return None;
            }
        }
        Some(rx)
    }

    /// Tear the worker down, as a fault would. Pending requests get reply
    /// errors and callers fall back synchronously.
    #[cfg(test)]
    async fn inject_fault(&self) {
        let mut state = self.state.lock().await;
        state.worker = None;
        state.last_fault = Some(Instant::now());
    }
}

fn spawn_worker() -> mpsc::UnboundedSender<Request> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
    tokio::spawn(async move {
        debug!("parser worker started");
        while let Some(request) = rx.recv().await {
            let result = parsing::parse(&request.text);
            // The caller may have timed out and dropped its receiver.
            let _ = request.reply.send(result);
            debug!(request = request.id, "parse request served");
        }
        debug!("parser worker stopped");
    });
    tx
}
