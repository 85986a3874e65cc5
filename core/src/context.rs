use crate::{
    clock::SimClock,
    error::SimResult,
    event::SimEvent,
    journal::{Journal, JournalKind},
    queue::EventQueue,
    types::{DispatchSeq, SimTime},
};

/// Mutable context handed to an event while it is being handled.
///
/// This is the only way an event reaches the kernel: it can read the
/// clock, schedule follow-up events, report text and request a halt.
pub struct SimContext<'a> {
    pub(crate) clock:   &'a SimClock,
    pub(crate) queue:   &'a mut EventQueue,
    pub(crate) journal: &'a mut Journal,
    pub(crate) seq:     DispatchSeq,
    pub(crate) halt:    bool,
}

impl SimContext<'_> {
    pub fn now(&self) -> SimTime {
        self.clock.get_time()
    }

    /// Register a follow-up event. It becomes visible to the next pop,
    /// never to the event currently being handled.
    pub fn schedule(&mut self, event: Box<dyn SimEvent>) -> SimResult<()> {
        let now = self.now();
        self.queue.add_checked(now, event)
    }

    /// Ask the manager to stop once this event returns.
    pub fn halt(&mut self) {
        self.halt = true;
    }

    pub fn halt_requested(&self) -> bool {
        self.halt
    }

    pub fn report(&mut self, text: impl Into<String>) {
        let text = text.into();
        let now = self.now();
        log::debug!("t={now} {text}");
        self.journal.record(self.seq, now, JournalKind::Report { text });
    }

    /// Number of events still pending, not counting the current one.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
