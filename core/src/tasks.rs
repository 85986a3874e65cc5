//! Domain events: moving an actor and ending the run.

use crate::{
    actor::ActorRef,
    context::SimContext,
    error::SimResult,
    event::SimEvent,
    geometry::Direction,
    types::SimTime,
};

/// Moves an actor one step once `duration` has elapsed after `start_time`.
/// With `repeat > 0` the task re-schedules itself from the time it fired.
#[derive(Debug)]
pub struct MoveTask {
    pub actor:      ActorRef,
    pub direction:  Direction,
    pub start_time: SimTime,
    pub duration:   SimTime,
    pub repeat:     u32,
}

impl MoveTask {
    pub fn new(actor: ActorRef, direction: Direction, start_time: SimTime, duration: SimTime) -> Self {
        Self { actor, direction, start_time, duration, repeat: 0 }
    }

    pub fn repeating(mut self, times: u32) -> Self {
        self.repeat = times;
        self
    }
}

impl SimEvent for MoveTask {
    fn name(&self) -> &'static str { "move_task" }

    fn get_time(&self) -> SimTime {
        self.start_time.saturating_add(self.duration)
    }

    fn handle(self: Box<Self>, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let task = *self;
        let (id, position) = {
            let mut actor = task.actor.borrow_mut();
            let position = actor.step(task.direction);
            (actor.id, position)
        };
        ctx.report(format!("actor {id} moved to {position}"));

        if task.repeat > 0 {
            let next = MoveTask {
                start_time: ctx.now(),
                repeat:     task.repeat - 1,
                ..task
            };
            ctx.schedule(Box::new(next))?;
        }
        Ok(())
    }
}

/// The terminating sentinel. Its only effect is to halt the run.
#[derive(Debug, Clone, Copy)]
pub struct EndSimulation {
    pub time: SimTime,
}

impl EndSimulation {
    pub fn at(time: SimTime) -> Self {
        Self { time }
    }
}

impl SimEvent for EndSimulation {
    fn name(&self) -> &'static str { "end_simulation" }

    fn get_time(&self) -> SimTime {
        self.time
    }

    fn handle(self: Box<Self>, ctx: &mut SimContext<'_>) -> SimResult<()> {
        ctx.halt();
        Ok(())
    }
}
