//! The event manager — the dispatch loop at the heart of the kernel.
//!
//! DISPATCH CYCLE (one call to handle_next_event):
//!   1. Pop the earliest pending event (ties: first registered).
//!   2. Advance the clock to the event's time.
//!   3. Handle the event to completion.
//!
//! RULES:
//!   - The clock is borrowed, never owned. Its lifetime belongs to the caller.
//!   - Only this module sets the clock.
//!   - Events scheduled through the manager or the context may not be
//!     earlier than the clock.
//!   - An empty queue before halt is a caller error, not a stop condition.

use crate::{
    clock::SimClock,
    context::SimContext,
    error::SimResult,
    event::SimEvent,
    journal::{Journal, JournalKind},
    queue::EventQueue,
    types::{DispatchSeq, SimTime},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManagerState {
    /// Nothing dispatched yet.
    Idle,
    Running,
    /// A terminating event has been handled.
    Halted,
}

#[derive(Debug)]
pub struct EventManager<'c> {
    clock:      &'c mut SimClock,
    queue:      EventQueue,
    journal:    Journal,
    state:      ManagerState,
    dispatched: DispatchSeq,
}

impl<'c> EventManager<'c> {
    pub fn new(clock: &'c mut SimClock) -> Self {
        Self::with_journal_capacity(clock, 0)
    }

    pub fn with_journal_capacity(clock: &'c mut SimClock, capacity: usize) -> Self {
        Self {
            clock,
            queue:      EventQueue::new(),
            journal:    Journal::new(capacity),
            state:      ManagerState::Idle,
            dispatched: 0,
        }
    }

    /// Register an event. Fails if it is scheduled before the current time.
    pub fn add_event(&mut self, event: Box<dyn SimEvent>) -> SimResult<()> {
        self.queue.add_checked(self.clock.get_time(), event)
    }

    /// Pop, advance, dispatch. Fails with EmptyQueue, leaving every piece
    /// of state untouched, if nothing is pending.
    pub fn handle_next_event(&mut self) -> SimResult<()> {
        let event = self.queue.pop_earliest()?;
        let time = event.get_time();
        let name = event.name();

        self.clock.set_time(time)?;
        if self.state == ManagerState::Idle {
            self.state = ManagerState::Running;
        }

        self.dispatched += 1;
        let seq = self.dispatched;
        log::debug!("t={time} #{seq} dispatch {name} ({} pending)", self.queue.len());
        self.journal
            .record(seq, time, JournalKind::Dispatched { event: name.to_string() });

        let mut ctx = SimContext {
            clock:   &*self.clock,
            queue:   &mut self.queue,
            journal: &mut self.journal,
            seq,
            halt:    false,
        };
        event.handle(&mut ctx)?;
        let halt = ctx.halt;

        if halt {
            if self.state == ManagerState::Halted {
                log::warn!("t={time} #{seq} {name} requested halt on a halted manager");
            }
            self.state = ManagerState::Halted;
            self.journal.record(seq, time, JournalKind::Halted);
            log::info!(
                "t={time} simulation halted after {seq} dispatches ({} pending)",
                self.queue.len()
            );
        }
        Ok(())
    }

    /// Drive the loop until a terminating event halts it.
    /// Returns the number of events dispatched by this call.
    pub fn run(&mut self) -> SimResult<u64> {
        let start = self.dispatched;
        while !self.is_halted() {
            self.handle_next_event()?;
        }
        Ok(self.dispatched - start)
    }

    pub fn now(&self) -> SimTime {
        self.clock.get_time()
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ManagerState::Halted
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Time of the next event to dispatch, if any.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.peek_time()
    }

    pub fn dispatched(&self) -> DispatchSeq {
        self.dispatched
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}
