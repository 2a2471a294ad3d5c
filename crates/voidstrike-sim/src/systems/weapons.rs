//! Weapon system — resolves fire requests into projectile actors.
//!
//! Firing is gated by the weapon's own ammo/delay invariant; a request
//! that cannot be honored (cooldown, dry weapon, missing loadout entry)
//! is a silent no-op for that actor and never aborts the tick.

use hecs::{Entity, World};

use voidstrike_core::components::{PlayerShip, Transform, Velocity, WeaponLoadout};
use voidstrike_core::enums::FiredBy;
use voidstrike_core::events::AudioEvent;

use voidstrike_enemy_ai::fsm::FireChoice;

use crate::world_setup::{self, ProjectileSpawn};

/// A resolved AI or player decision to fire this tick.
pub struct FireRequest {
    pub shooter: Entity,
    pub choice: FireChoice,
}

/// Resolve all buffered fire requests.
pub fn run(
    world: &mut World,
    requests: Vec<FireRequest>,
    now_tick: u64,
    spawn_seq: &mut u64,
    audio_events: &mut Vec<AudioEvent>,
) {
    for request in requests {
        fire_single(world, &request, now_tick, spawn_seq, audio_events);
    }
}

/// Attempt one fire request. Returns true if a projectile was launched.
pub fn fire_single(
    world: &mut World,
    request: &FireRequest,
    now_tick: u64,
    spawn_seq: &mut u64,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let spawn = match resolve(world, request, now_tick) {
        Some(spawn) => spawn,
        None => return false,
    };

    let params = world_setup::projectile_params(spawn.kind);
    match world_setup::spawn_projectile(world, spawn_seq, spawn) {
        Ok(_) => {
            audio_events.push(AudioEvent::Play {
                sound: params.launch_sound,
            });
            true
        }
        Err(err) => {
            log::warn!("projectile spawn rejected: {err}");
            false
        }
    }
}

/// Check the gating invariant against the shooter's loadout and, on
/// success, consume a round and produce the spawn request.
fn resolve(world: &mut World, request: &FireRequest, now_tick: u64) -> Option<ProjectileSpawn> {
    let position = world.get::<&Transform>(request.shooter).ok()?.position;
    let heading = world.get::<&Velocity>(request.shooter).ok()?.heading;
    let fired_by = if world.get::<&PlayerShip>(request.shooter).is_ok() {
        FiredBy::Player
    } else {
        FiredBy::Enemy
    };

    let mut loadout = world.get::<&mut WeaponLoadout>(request.shooter).ok()?;
    let weapon = match request.choice {
        FireChoice::Primary => &mut loadout.primary,
        FireChoice::Secondary(kind) => {
            if let Err(err) = loadout.select(kind) {
                log::warn!("fire request dropped: {err}");
                return None;
            }
            loadout.selected_mut()?
        }
    };

    if !weapon.fire(now_tick) {
        return None;
    }
    let kind = weapon.kind;
    drop(loadout);

    Some(ProjectileSpawn {
        kind,
        fired_by,
        position,
        heading,
    })
}
