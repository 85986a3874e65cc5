use crate::types::{ActorId, SimTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Event queue is empty: no pending events to dispatch")]
    EmptyQueue,

    #[error("Invalid time ordering: clock is at {current}, cannot move back to {requested}")]
    InvalidTimeOrdering { current: SimTime, requested: SimTime },

    #[error("Event scheduled in the past: now {now}, scheduled {scheduled}")]
    EventInPast { now: SimTime, scheduled: SimTime },

    #[error("Actor {0} not found")]
    UnknownActor(ActorId),

    #[error("Invalid scenario: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
