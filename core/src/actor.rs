//! Actors and the registry that owns them.
//!
//! An actor can be the subject of several pending events at once, so it
//! is shared through `ActorRef`. Everything runs on one thread; `Rc` and
//! `RefCell` are enough.

use crate::{
    error::{SimError, SimResult},
    geometry::{Direction, Position},
    types::ActorId,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id:       ActorId,
    pub position: Position,
}

impl Actor {
    pub fn new(id: ActorId, position: Position) -> Self {
        Self { id, position }
    }

    pub fn step(&mut self, direction: Direction) -> Position {
        self.position += direction;
        self.position
    }
}

pub type ActorRef = Rc<RefCell<Actor>>;

/// Every actor in a run, keyed by id.
#[derive(Debug, Default)]
pub struct ActorRegistry {
    actors: BTreeMap<ActorId, ActorRef>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, id: ActorId, position: Position) -> SimResult<ActorRef> {
        if self.actors.contains_key(&id) {
            return Err(SimError::Config(format!("actor {id} registered twice")));
        }
        let actor = Rc::new(RefCell::new(Actor::new(id, position)));
        self.actors.insert(id, Rc::clone(&actor));
        Ok(actor)
    }

    pub fn get(&self, id: ActorId) -> SimResult<ActorRef> {
        self.actors
            .get(&id)
            .cloned()
            .ok_or(SimError::UnknownActor(id))
    }

    /// Snapshot of every actor, in id order.
    pub fn snapshot(&self) -> Vec<Actor> {
        self.actors.values().map(|a| a.borrow().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
