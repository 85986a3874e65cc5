//! Wiring a scenario into a clock and an event manager.
//!
//! The caller owns the clock; the manager borrows it for the run.
//! RULE: Every run starts from the configured state. Actors are spawned
//! per run, never shared between runs.

use crate::{
    actor::{Actor, ActorRegistry},
    clock::SimClock,
    config::ScenarioConfig,
    error::SimResult,
    journal::JournalEntry,
    manager::EventManager,
    tasks::{EndSimulation, MoveTask},
    types::{DispatchSeq, SimTime},
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct Scenario {
    pub config: ScenarioConfig,
}

/// What a finished run looks like from the outside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub dispatches: DispatchSeq,
    pub final_time: SimTime,
    pub actors:     Vec<Actor>,
    pub journal:    Vec<JournalEntry>,
}

impl Scenario {
    pub fn build(config: ScenarioConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn clock(&self) -> SimClock {
        SimClock::new(self.config.start_time)
    }

    /// Fresh actors at their configured positions.
    pub fn spawn_actors(&self) -> SimResult<ActorRegistry> {
        let mut actors = ActorRegistry::new();
        for actor in &self.config.actors {
            actors.spawn(actor.id, actor.position)?;
        }
        Ok(actors)
    }

    /// Register the terminating sentinel first, then every move in
    /// declaration order, bound to the given actors.
    pub fn install(&self, manager: &mut EventManager<'_>, actors: &ActorRegistry) -> SimResult<()> {
        manager.add_event(Box::new(EndSimulation::at(self.config.end_time())))?;
        for mv in &self.config.moves {
            let actor = actors.get(mv.actor)?;
            let task = MoveTask::new(actor, mv.direction, mv.start_time, mv.duration)
                .repeating(mv.repeat);
            manager.add_event(Box::new(task))?;
        }
        log::debug!("installed scenario: {} pending events", manager.pending());
        Ok(())
    }

    /// Run to halt on a fresh clock with freshly spawned actors.
    pub fn run(&self) -> SimResult<RunSummary> {
        let actors = self.spawn_actors()?;
        let mut clock = self.clock();
        let (dispatches, journal) = {
            let mut manager =
                EventManager::with_journal_capacity(&mut clock, self.config.journal_capacity);
            self.install(&mut manager, &actors)?;
            let dispatches = manager.run()?;
            let journal = manager.journal().entries().cloned().collect();
            (dispatches, journal)
        };
        Ok(RunSummary {
            dispatches,
            final_time: clock.get_time(),
            actors: actors.snapshot(),
            journal,
        })
    }
}
