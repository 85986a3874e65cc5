//! Shared primitive types used across the entire simulation.

/// A point on the logical time axis. Only ever moves forward.
pub type SimTime = u64;

/// The latest representable time. The terminating sentinel lives here.
pub const END_OF_TIME: SimTime = SimTime::MAX;

/// A stable identifier for an actor in the simulation.
pub type ActorId = u32;

/// Position of an event in the global dispatch order.
pub type DispatchSeq = u64;
