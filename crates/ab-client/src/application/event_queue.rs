//! FIFO event queue.
//!
//! A naive ordered buffer: no deduplication, no priority.  Events come out in
//! the order they were published.  The processor drains it one *pass* at a
//! time with [`EventQueue::take_pending`], so anything published while a pass
//! runs waits for the next pass.

use std::collections::VecDeque;

use crate::application::events::{EventArgs, EventKind, EventMessage};

#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<EventMessage>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a new [`EventMessage`] built from `kind` and `args`.
    pub fn publish(&mut self, kind: EventKind, args: EventArgs) {
        self.pending.push_back(EventMessage::new(kind, args));
    }

    /// Removes and returns everything currently queued, oldest first.
    pub fn take_pending(&mut self) -> VecDeque<EventMessage> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates queued events without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &EventMessage> {
        self.pending.iter()
    }
}
