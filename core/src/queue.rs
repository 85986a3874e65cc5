//! The event registry — pending events ordered by time, then by
//! registration order.
//!
//! The queue does not know about the clock. Time checks happen in the
//! manager and the context, which are the only public ways to schedule.

use crate::{
    error::{SimError, SimResult},
    event::SimEvent,
    types::SimTime,
};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;

#[derive(Default)]
pub struct EventQueue {
    buckets: BTreeMap<SimTime, VecDeque<Box<dyn SimEvent>>>,
    len:     usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event behind every event already registered for the same time.
    pub fn add_event(&mut self, event: Box<dyn SimEvent>) {
        let time = event.get_time();
        log::trace!("queue: add {} at t={time}", event.name());
        self.buckets.entry(time).or_default().push_back(event);
        self.len += 1;
    }

    /// Insert an event unless it is scheduled before `now`.
    pub(crate) fn add_checked(&mut self, now: SimTime, event: Box<dyn SimEvent>) -> SimResult<()> {
        let scheduled = event.get_time();
        if scheduled < now {
            return Err(SimError::EventInPast { now, scheduled });
        }
        log::debug!("t={now} schedule {} at t={scheduled}", event.name());
        self.add_event(event);
        Ok(())
    }

    /// Remove the earliest event. Among events sharing a time, the first
    /// registered comes out first.
    pub fn pop_earliest(&mut self) -> SimResult<Box<dyn SimEvent>> {
        let mut bucket = self.buckets.first_entry().ok_or(SimError::EmptyQueue)?;
        let event = bucket.get_mut().pop_front().ok_or(SimError::EmptyQueue)?;
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.len -= 1;
        Ok(event)
    }

    /// Time of the earliest pending event, if any.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.buckets.first_key_value().map(|(time, _)| *time)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("len", &self.len)
            .field("earliest", &self.peek_time())
            .finish()
    }
}
