//! A discrete-event simulation kernel.
//!
//! Events are registered with an [`manager::EventManager`], which pops them
//! in time order (registration order breaks ties), advances a borrowed
//! [`clock::SimClock`] to each event's time and hands the event a
//! [`context::SimContext`] to act through. A run ends when a terminating
//! event halts the manager.

pub mod actor;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod geometry;
pub mod journal;
pub mod manager;
pub mod queue;
pub mod rng;
pub mod scenario;
pub mod tasks;
pub mod types;

pub use clock::SimClock;
pub use context::SimContext;
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use manager::{EventManager, ManagerState};
pub use queue::EventQueue;
pub use types::{SimTime, END_OF_TIME};
