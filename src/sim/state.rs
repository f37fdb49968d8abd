//! Game state and run bookkeeping

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::BodyKind;
use super::director::{PopulateReport, SpawnDirector};
use super::error::SpawnError;
use super::orbit::Orbiter;
use super::pool::Handle;
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Player hit an obstacle
    GameOver,
}

/// Events produced by a tick, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Collected { kind: BodyKind, value: u32 },
    Crashed { pos: Vec3 },
    Spawned { kind: BodyKind, handle: Handle, pos: Vec3 },
    /// Timed spawn produced nothing (pool empty or no room)
    SpawnSkipped { kind: BodyKind },
}

/// Collection tally for the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harvest {
    pub score: u64,
    pub food: u32,
    pub coins: u32,
    pub carrots: u32,
    pub cabbages: u32,
    pub crashes: u32,
}

impl Harvest {
    /// Record one consumed body; returns true if it was an obstacle
    pub fn record(&mut self, kind: BodyKind, value: u32) -> bool {
        match kind {
            BodyKind::Carrot => {
                self.food += value;
                self.carrots += value;
            }
            BodyKind::Cabbage => {
                self.food += value;
                self.cabbages += value;
            }
            BodyKind::Coin => {
                self.coins += value;
                self.score += value as u64;
            }
            BodyKind::Comet => {
                self.crashes += 1;
                return true;
            }
        }
        false
    }
}

/// Complete run state. Owns the spawn director; nothing is global.
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub director: SpawnDirector,
    pub orbiter: Orbiter,
    pub harvest: Harvest,
    /// Orbited body position
    pub moon: Vec3,
    pub player_pos: Vec3,
    /// Seconds survived
    pub survival_time: f32,
    /// Seconds accumulated toward the next timed spawn
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    pub contact_radius: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Result of the start-of-run population pass
    pub initial_report: PopulateReport,
}

impl GameState {
    /// Build pools and scatter the initial field around the origin
    pub fn new(config: &Config) -> Result<Self, SpawnError> {
        Self::with_moon(config, Vec3::ZERO)
    }

    pub fn with_moon(config: &Config, moon: Vec3) -> Result<Self, SpawnError> {
        let mut director = SpawnDirector::new(&config.spawn, config.seed)?;
        director.set_center(moon);
        let initial_report = director.populate_initial(config.spawn.initial_spawn_count)?;

        let orbiter = Orbiter::new(&config.orbit);
        let player_pos = orbiter.position(moon);

        Ok(Self {
            seed: config.seed,
            phase: GamePhase::Playing,
            director,
            orbiter,
            harvest: Harvest::default(),
            moon,
            player_pos,
            survival_time: 0.0,
            spawn_timer: 0.0,
            spawn_interval: config.spawn_interval,
            contact_radius: config.contact_radius,
            time_ticks: 0,
            initial_report,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_tallies_by_kind() {
        let mut harvest = Harvest::default();
        assert!(!harvest.record(BodyKind::Carrot, 2));
        assert!(!harvest.record(BodyKind::Cabbage, 3));
        assert!(!harvest.record(BodyKind::Coin, 5));
        assert!(harvest.record(BodyKind::Comet, 1));
        assert_eq!(harvest.food, 5);
        assert_eq!(harvest.carrots, 2);
        assert_eq!(harvest.cabbages, 3);
        assert_eq!(harvest.coins, 5);
        assert_eq!(harvest.score, 5);
        assert_eq!(harvest.crashes, 1);
    }

    #[test]
    fn test_new_state_populates_field() {
        let config = Config::default();
        let state = GameState::new(&config).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.initial_report.attempts, 30);
        assert_eq!(
            state.director.registry().len() as u32,
            state.initial_report.placed
        );
        assert!(state.initial_report.placed > 0);
    }
}
