//! Simulation clock — the single source of truth for current time.
//!
//! RULE: Only the event manager sets the clock, immediately before a
//! dispatch. Event bodies read it through the context and never write it.

use crate::{
    error::{SimError, SimResult},
    types::SimTime,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimClock {
    time: SimTime,
}

impl SimClock {
    pub fn new(start: SimTime) -> Self {
        Self { time: start }
    }

    pub fn get_time(&self) -> SimTime {
        self.time
    }

    /// Move the clock to `new_time`. Fails if that would move it backward;
    /// setting the current time again is allowed.
    pub fn set_time(&mut self, new_time: SimTime) -> SimResult<()> {
        if new_time < self.time {
            return Err(SimError::InvalidTimeOrdering {
                current:   self.time,
                requested: new_time,
            });
        }
        self.time = new_time;
        Ok(())
    }
}
