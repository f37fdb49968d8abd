//! Fixed timestep simulation tick
//!
//! Drives the spawn director the way the game loop does: move the player,
//! consume whatever it touches, and top up the field on a timer.

use glam::Vec3;

use super::director::SpawnOutcome;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal steer axis in [-1, 1]
    pub steer: f32,
    /// New position of the orbited body, if it moved
    pub moon: Option<Vec3>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;
    state.survival_time += dt;

    if let Some(moon) = input.moon {
        state.moon = moon;
        state.director.set_center(moon);
    }

    // Move player
    state.orbiter.steer(input.steer);
    state.player_pos = state.orbiter.advance(state.moon, dt);
    state.director.spin_bodies(dt);

    // Consume everything in reach
    for handle in state.director.contacts(state.player_pos, state.contact_radius) {
        let Some(body) = state.director.body(handle) else {
            continue;
        };
        let (kind, value) = (body.kind, body.value);

        // Contacts come straight from the registry, so this only fails on desync
        if let Err(e) = state.director.return_handle(handle) {
            log::warn!("Dropping contact with {:?}: {}", handle, e);
            continue;
        }

        if state.harvest.record(kind, value) {
            log::info!(
                "Crashed into {} after {:.1}s",
                kind.as_str(),
                state.survival_time
            );
            events.push(GameEvent::Crashed {
                pos: state.player_pos,
            });
            state.phase = GamePhase::GameOver;
            return events;
        }
        events.push(GameEvent::Collected { kind, value });
    }

    // Timed spawns
    state.spawn_timer += dt;
    while state.spawn_timer >= state.spawn_interval {
        state.spawn_timer -= state.spawn_interval;
        match state.director.spawn_one() {
            Ok(SpawnOutcome::Placed(p)) => {
                let kind = state.director.categories()[p.category.0 as usize].kind;
                events.push(GameEvent::Spawned {
                    kind,
                    handle: p.handle,
                    pos: p.pos,
                });
            }
            Ok(SpawnOutcome::PoolExhausted { category })
            | Ok(SpawnOutcome::PlacementFailed { category }) => {
                let kind = state.director.categories()[category.0 as usize].kind;
                events.push(GameEvent::SpawnSkipped { kind });
            }
            Err(e) => log::warn!("Timed spawn failed: {}", e),
        }
    }

    events
}
