//! EventQueueProcessor: routes queued events to their registered handlers.
//!
//! # Dispatch passes (for beginners)
//!
//! [`EventQueueProcessor::drain`] empties the queue in *passes*.  Each pass
//! takes a snapshot of everything queued right now and dispatches it, oldest
//! first.  When a handler publishes a new event (for example a bounce handler
//! publishing `PlayerChange`), that event goes to the back of the queue and
//! is picked up by the *next* pass.  Nothing re-enters the current pass, so
//! cascades are processed breadth-first:
//!
//! ```text
//! pass 1:  Bounce(3)  Bounce(5)          -> publishes Change(3), Change(5)
//! pass 2:  Change(3)  Change(5)          -> publishes nothing
//! done
//! ```
//!
//! # Error boundary
//!
//! The processor is the error boundary for the whole dispatch cycle.  A
//! handler that returns `Err` *or panics* is logged and counted; the
//! remaining handlers for the same event and every later event still run.
//! A panicking handler may leave the fields it already wrote in place.
//!
//! A caught panic still runs the process panic hook first.  The binary
//! installs a `tracing` hook (`infrastructure::logging::install_panic_hook`),
//! so a panicking handler yields two error events: the hook's, with the
//! source location, then the processor's, naming the handler and event kind.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use ab_core::GameState;
use tracing::{error, trace, warn};

use crate::application::event_queue::EventQueue;
use crate::application::events::{EventKind, EventMessage};
use crate::application::handlers::MessageHandler;

/// Default upper bound on dispatch passes per [`EventQueueProcessor::drain`].
pub const DEFAULT_MAX_PASSES: usize = 64;

/// Summary of one [`EventQueueProcessor::drain`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Number of dispatch passes run.
    pub passes: usize,
    /// Number of events taken off the queue (including ones nobody handles).
    pub events_dispatched: usize,
    /// Handler invocations that returned `Err` or panicked.
    pub handler_failures: usize,
    /// `true` if the pass limit was hit with events still queued.
    pub exhausted: bool,
}

/// Maps each [`EventKind`] to its handlers, in registration order.
pub struct EventQueueProcessor {
    routes: HashMap<EventKind, Vec<Arc<dyn MessageHandler>>>,
    max_passes: usize,
}

impl EventQueueProcessor {
    /// Builds the routing table from `handlers`, registering each in order.
    pub fn new(handlers: impl IntoIterator<Item = Arc<dyn MessageHandler>>) -> Self {
        let mut processor = Self {
            routes: HashMap::new(),
            max_passes: DEFAULT_MAX_PASSES,
        };
        for handler in handlers {
            processor.register(handler);
        }
        processor
    }

    /// Sets the pass limit for [`drain`](Self::drain).  Values below 1 are
    /// raised to 1.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Appends `handler` to the route of every kind it declares.
    ///
    /// A kind listed twice in [`MessageHandler::handles`] is registered once.
    pub fn register(&mut self, handler: Arc<dyn MessageHandler>) {
        let mut kinds = handler.handles().to_vec();
        if kinds.is_empty() {
            warn!(handler = handler.name(), "handler declares no event kinds; never invoked");
            return;
        }
        kinds.sort();
        kinds.dedup();

        for kind in kinds {
            self.routes.entry(kind).or_default().push(Arc::clone(&handler));
        }
    }

    /// Returns the handlers registered for `kind`, in invocation order.
    pub fn handlers_for(&self, kind: EventKind) -> &[Arc<dyn MessageHandler>] {
        self.routes.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dispatches queued events until the queue is empty or the pass limit
    /// is reached.
    pub fn drain(&self, queue: &mut EventQueue, state: &mut GameState) -> DrainReport {
        let mut report = DrainReport::default();

        while !queue.is_empty() {
            if report.passes == self.max_passes {
                warn!(
                    max_passes = self.max_passes,
                    remaining = queue.len(),
                    "dispatch pass limit reached; leaving events queued"
                );
                report.exhausted = true;
                break;
            }
            report.passes += 1;

            for event in queue.take_pending() {
                report.events_dispatched += 1;
                report.handler_failures += self.dispatch(&event, queue, state);
            }
        }

        report
    }

    /// Invokes every handler for `event.kind()`.  Returns the failure count.
    fn dispatch(&self, event: &EventMessage, queue: &mut EventQueue, state: &mut GameState) -> usize {
        let handlers = self.handlers_for(event.kind());
        if handlers.is_empty() {
            trace!(kind = ?event.kind(), "no handlers registered");
            return 0;
        }

        let mut failures = 0;
        for handler in handlers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.exec(event, state, queue)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    error!(kind = ?event.kind(), handler = handler.name(), error = %e, "handler failed");
                }
                Err(payload) => {
                    failures += 1;
                    error!(
                        kind = ?event.kind(),
                        handler = handler.name(),
                        panic = panic_message(payload.as_ref()),
                        "handler panicked"
                    );
                }
            }
        }
        failures
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
