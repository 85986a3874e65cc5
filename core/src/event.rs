//! The event contract — every schedulable unit of work implements SimEvent.
//!
//! RULE: An event's time is fixed at construction.
//! RULE: handle() runs to completion before the next event is popped.
//! New event kinds are added by implementing the trait; the queue and the
//! manager never need to change.

use crate::{context::SimContext, error::SimResult, types::SimTime};
use std::fmt;

pub trait SimEvent: fmt::Debug {
    /// Stable name for this event kind. Used in the journal and logs.
    fn name(&self) -> &'static str;

    /// The time at which this event is eligible for dispatch.
    fn get_time(&self) -> SimTime;

    /// Called exactly once, by the manager, after the clock has been
    /// advanced to `get_time()`.
    ///
    /// The event may mutate any domain state it holds references to,
    /// schedule follow-up events through `ctx`, and request termination.
    fn handle(self: Box<Self>, ctx: &mut SimContext<'_>) -> SimResult<()>;
}
