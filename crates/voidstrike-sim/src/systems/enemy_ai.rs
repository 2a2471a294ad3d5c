//! Enemy AI system — runs each enemy's behavior FSM once per tick.
//!
//! Decisions are collected into a buffer and applied after iteration, then
//! fire requests are handed to the weapon system for resolution in its own
//! phase. Enemies idle while the player is hidden or gone.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{
    EnemyAiState, EnemyShip, Lifecycle, PlayerShip, Transform, Velocity, Visibility,
    WeaponLoadout,
};
use voidstrike_core::types::Heading;

use voidstrike_enemy_ai::fsm::{evaluate, EnemyContext, FireChoice};

use crate::systems::weapons::FireRequest;

/// Evaluate the FSM for every live enemy and apply the resulting state,
/// heading, and fire requests.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) -> Vec<FireRequest> {
    let player_position = match visible_player_position(world) {
        Some(position) => position,
        None => return Vec::new(),
    };

    let mut updates: Vec<(Entity, EnemyAiState, Heading, Option<FireChoice>)> = Vec::new();

    {
        let mut query = world.query::<(
            &EnemyShip,
            &Transform,
            &Velocity,
            &EnemyAiState,
            &WeaponLoadout,
            &Lifecycle,
        )>();
        for (entity, (ship, transform, velocity, state, loadout, lifecycle)) in query.iter() {
            if lifecycle.ready_for_deletion {
                continue;
            }

            let armed = loadout.armed_kinds();
            let ctx = EnemyContext {
                archetype: ship.archetype,
                state: *state,
                heading: velocity.heading,
                position: transform.position,
                player_position,
                distance_to_player: transform.position.distance(player_position),
                armed: &armed,
            };
            let update = evaluate(&ctx, rng);
            updates.push((entity, update.state, update.heading, update.fire));
        }
    }

    let mut fire_requests = Vec::new();
    for (entity, state, heading, fire) in updates {
        if let Ok(mut ai_state) = world.get::<&mut EnemyAiState>(entity) {
            *ai_state = state;
        }
        if let Ok(mut velocity) = world.get::<&mut Velocity>(entity) {
            velocity.heading = heading;
        }
        if let Some(choice) = fire {
            fire_requests.push(FireRequest {
                shooter: entity,
                choice,
            });
        }
    }

    fire_requests
}

fn visible_player_position(world: &World) -> Option<glam::DVec2> {
    world
        .query::<(&PlayerShip, &Transform, &Visibility, &Lifecycle)>()
        .iter()
        .next()
        .filter(|(_, (_, _, visibility, lifecycle))| {
            visibility.visible && !lifecycle.ready_for_deletion
        })
        .map(|(_, (_, transform, _, _))| transform.position)
}
