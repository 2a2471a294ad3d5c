//! Snapshot system: builds the read-only `GameSnapshot` for the host
//! shell. Never modifies the world; the render collaborator only ever
//! sees this end-of-tick copy.

use glam::DVec2;
use hecs::World;

use voidstrike_core::components::*;
use voidstrike_core::enums::{ActorKind, GamePhase};
use voidstrike_core::events::AudioEvent;
use voidstrike_core::state::{ActorView, GameSnapshot, ScenarioView, ScoreView};
use voidstrike_core::types::SimTime;

use crate::scenario::{Scenario, ScoreState};

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scenario: &Scenario,
    score: &ScoreState,
    background_offset: DVec2,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    let mut actors = Vec::new();

    for (_entity, (_ship, transform, velocity, vitals, visibility, order)) in world
        .query::<(
            &PlayerShip,
            &Transform,
            &Velocity,
            &Vitals,
            &Visibility,
            &SpawnOrder,
        )>()
        .iter()
    {
        actors.push(ActorView {
            id: order.0,
            kind: ActorKind::Player,
            position: transform.position,
            size: transform.size,
            heading_deg: velocity.heading.degrees(),
            visible: visibility.visible,
            hit_points: vitals.hit_points,
            shield_points: vitals.shield_points,
        });
    }

    for (_entity, (ship, transform, velocity, vitals, order)) in world
        .query::<(&EnemyShip, &Transform, &Velocity, &Vitals, &SpawnOrder)>()
        .iter()
    {
        actors.push(ActorView {
            id: order.0,
            kind: ActorKind::Enemy(ship.archetype),
            position: transform.position,
            size: transform.size,
            heading_deg: velocity.heading.degrees(),
            visible: true,
            hit_points: vitals.hit_points,
            shield_points: vitals.shield_points,
        });
    }

    for (_entity, (projectile, transform, velocity, order)) in world
        .query::<(&Projectile, &Transform, &Velocity, &SpawnOrder)>()
        .iter()
    {
        actors.push(ActorView {
            id: order.0,
            kind: ActorKind::Projectile(projectile.fired_by),
            position: transform.position,
            size: transform.size,
            heading_deg: velocity.heading.degrees(),
            visible: true,
            hit_points: 0,
            shield_points: 0,
        });
    }

    for (_entity, (_star, transform, order)) in
        world.query::<(&Star, &Transform, &SpawnOrder)>().iter()
    {
        actors.push(ActorView {
            id: order.0,
            kind: ActorKind::Star,
            position: transform.position,
            size: transform.size,
            heading_deg: 0.0,
            visible: true,
            hit_points: 0,
            shield_points: 0,
        });
    }

    actors.sort_by_key(|a| a.id);

    GameSnapshot {
        time: *time,
        phase,
        scenario: ScenarioView {
            state: scenario.state,
            current_wave: scenario.current_wave,
            total_waves: scenario.total_waves,
        },
        actors,
        score: ScoreView {
            score: score.score,
            enemies_destroyed: score.enemies_destroyed,
        },
        background_offset,
        audio_events,
    }
}
