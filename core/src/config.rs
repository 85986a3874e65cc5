use crate::{
    error::{SimError, SimResult},
    geometry::{Direction, Position},
    rng::{RngSlot, SimRng},
    types::{ActorId, SimTime, END_OF_TIME},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A complete scenario: who exists, what they do, when the run ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub start_time: SimTime,
    /// Time of the terminating event. Absent means the end of time.
    #[serde(default)]
    pub end_time: Option<SimTime>,
    /// Maximum journal entries kept. 0 = unlimited.
    #[serde(default)]
    pub journal_capacity: usize,
    #[serde(default)]
    pub actors: Vec<ActorConfig>,
    #[serde(default)]
    pub moves: Vec<MoveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActorConfig {
    pub id:       ActorId,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveConfig {
    pub actor:      ActorId,
    pub direction:  Direction,
    #[serde(default)]
    pub start_time: SimTime,
    pub duration:   SimTime,
    #[serde(default)]
    pub repeat:     u32,
}

impl MoveConfig {
    pub fn fire_time(&self) -> SimTime {
        self.start_time.saturating_add(self.duration)
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        log::debug!(
            "loaded scenario {path}: {} actors, {} moves",
            config.actors.len(),
            config.moves.len()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn end_time(&self) -> SimTime {
        self.end_time.unwrap_or(END_OF_TIME)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.end_time() < self.start_time {
            return Err(SimError::Config(format!(
                "end_time {} is before start_time {}",
                self.end_time(),
                self.start_time
            )));
        }

        let mut ids = BTreeSet::new();
        for actor in &self.actors {
            if !ids.insert(actor.id) {
                return Err(SimError::Config(format!("actor {} declared twice", actor.id)));
            }
        }

        for (i, mv) in self.moves.iter().enumerate() {
            if !ids.contains(&mv.actor) {
                return Err(SimError::UnknownActor(mv.actor));
            }
            if mv.fire_time() < self.start_time {
                return Err(SimError::Config(format!(
                    "move {i} fires at {} before start_time {}",
                    mv.fire_time(),
                    self.start_time
                )));
            }
            if mv.fire_time() > self.end_time() {
                log::warn!("move {i} fires after end_time and will never run");
            }
        }
        Ok(())
    }

    /// One actor at (2,2) moving one step east after 100 time units.
    pub fn default_test() -> Self {
        Self {
            start_time:       0,
            end_time:         None,
            journal_capacity: 0,
            actors: vec![ActorConfig { id: 1, position: Position::new(2, 2) }],
            moves: vec![MoveConfig {
                actor:      1,
                direction:  Direction::new(1, 0),
                start_time: 0,
                duration:   100,
                repeat:     0,
            }],
        }
    }

    /// A random but fully reproducible scenario.
    pub fn random(seed: u64, actor_count: u32) -> Self {
        let mut placement = SimRng::new(seed, RngSlot::Placement);
        let mut movement = SimRng::new(seed, RngSlot::Movement);

        let actors: Vec<ActorConfig> = (1..=actor_count)
            .map(|id| ActorConfig {
                id,
                position: Position::new(placement.offset(10), placement.offset(10)),
            })
            .collect();

        let moves = actors
            .iter()
            .map(|actor| MoveConfig {
                actor:      actor.id,
                direction:  *movement.pick(&Direction::CARDINAL),
                start_time: movement.below(10),
                duration:   movement.between(1, 50),
                repeat:     movement.below(6) as u32,
            })
            .collect();

        Self {
            start_time: 0,
            end_time: None,
            journal_capacity: 0,
            actors,
            moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = ScenarioConfig::from_json(r#"{ "actors": [], "moves": [] }"#).unwrap();
        assert_eq!(config.start_time, 0);
        assert_eq!(config.end_time(), END_OF_TIME);
        assert_eq!(config.journal_capacity, 0);
    }

    #[test]
    fn full_json_parses() {
        let json = r#"{
            "start_time": 5,
            "end_time": 500,
            "actors": [{ "id": 1, "position": { "x": 2, "y": 2 } }],
            "moves": [{ "actor": 1, "direction": { "x": 0, "y": -1 }, "start_time": 5, "duration": 20, "repeat": 3 }]
        }"#;
        let config = ScenarioConfig::from_json(json).unwrap();
        assert_eq!(config.end_time(), 500);
        assert_eq!(config.moves[0].fire_time(), 25);
        assert_eq!(config.moves[0].repeat, 3);
    }

    #[test]
    fn load_reads_scenario_file() {
        let path = std::env::temp_dir().join(format!("desim-scenario-{}.json", std::process::id()));
        let json = r#"{
            "start_time": 3,
            "end_time": 90,
            "journal_capacity": 16,
            "actors": [{ "id": 4, "position": { "x": -1, "y": 5 } }],
            "moves": [{ "actor": 4, "direction": { "x": 1, "y": 0 }, "start_time": 3, "duration": 7 }]
        }"#;
        std::fs::write(&path, json).unwrap();

        let loaded = ScenarioConfig::load(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        let config = loaded.unwrap();

        assert_eq!(config.start_time, 3);
        assert_eq!(config.end_time(), 90);
        assert_eq!(config.journal_capacity, 16);
        assert_eq!(config.actors, vec![ActorConfig { id: 4, position: Position::new(-1, 5) }]);
        assert_eq!(config.moves[0].fire_time(), 10);
        assert_eq!(config.moves[0].repeat, 0);
    }

    #[test]
    fn load_rejects_invalid_scenario_file() {
        let path = std::env::temp_dir().join(format!("desim-invalid-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "moves": [{ "actor": 1, "direction": { "x": 0, "y": 0 }, "duration": 1 }] }"#)
            .unwrap();

        let loaded = ScenarioConfig::load(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        let err = loaded.unwrap_err();
        assert!(err.to_string().contains("Actor 1 not found"), "got {err}");
    }

    #[test]
    fn rejects_duplicate_actor() {
        let mut config = ScenarioConfig::default_test();
        config.actors.push(ActorConfig { id: 1, position: Position::default() });
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_move_for_unknown_actor() {
        let mut config = ScenarioConfig::default_test();
        config.moves[0].actor = 99;
        assert!(matches!(config.validate(), Err(SimError::UnknownActor(99))));
    }

    #[test]
    fn rejects_move_before_start() {
        let mut config = ScenarioConfig::default_test();
        config.start_time = 200;
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_end_before_start() {
        let mut config = ScenarioConfig::default_test();
        config.start_time = 10;
        config.end_time = Some(5);
        config.moves.clear();
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ScenarioConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::Serialization(_)), "got {err}");
    }

    #[test]
    fn random_scenario_is_valid_and_reproducible() {
        let a = ScenarioConfig::random(42, 8);
        let b = ScenarioConfig::random(42, 8);
        assert_eq!(a, b);
        assert_eq!(a.actors.len(), 8);
        assert_eq!(a.moves.len(), 8);
        a.validate().unwrap();
    }
}
