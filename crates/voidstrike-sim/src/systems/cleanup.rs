//! Cleanup system: the single purge point for marked actors.
//!
//! Runs exactly once at tick end. Collects every entity whose lifecycle
//! flag is set into a reusable buffer, then despawns them. No other phase
//! removes entities, so iteration elsewhere never observes a mid-tick
//! despawn.

use hecs::{Entity, World};

use voidstrike_core::components::{Lifecycle, PlayerShip};

/// What the purge observed this tick.
#[derive(Debug, Default)]
pub struct CleanupOutcome {
    pub player_destroyed: bool,
    pub purged: usize,
}

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> CleanupOutcome {
    despawn_buffer.clear();
    let mut outcome = CleanupOutcome::default();

    for (entity, (lifecycle, player)) in
        world.query_mut::<(&Lifecycle, Option<&PlayerShip>)>()
    {
        if lifecycle.ready_for_deletion {
            despawn_buffer.push(entity);
            if player.is_some() {
                outcome.player_destroyed = true;
            }
        }
    }

    outcome.purged = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    outcome
}
