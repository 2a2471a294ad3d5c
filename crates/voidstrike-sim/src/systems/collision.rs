//! Collision resolution system.
//!
//! Runs after motion integration. Marks out-of-bounds projectiles, then
//! evaluates combat intersections on a consistent copy of the combatant
//! state and writes the results back. A projectile that would intersect
//! several enemies in one tick credits only the first in ascending
//! spawn-sequence order. Damage that drops an actor to zero hit points
//! marks it for deletion in the same tick.

use hecs::{Entity, World};

use voidstrike_core::components::{
    EnemyShip, Lifecycle, PlayerShip, Projectile, SpawnOrder, Transform, Visibility, Vitals,
};
use voidstrike_core::constants::ENEMY_CONTACT_DAMAGE;
use voidstrike_core::enums::FiredBy;
use voidstrike_core::events::{AudioEvent, SoundId};
use voidstrike_core::types::{Rect, Viewport};

use crate::scenario::ScoreState;

pub fn run(
    world: &mut World,
    viewport: &Viewport,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) {
    mark_out_of_bounds_projectiles(world, viewport);
    resolve_combat(world, score, audio_events);
}

/// Projectiles despawn at the viewport boundary; any coordinate outside
/// [0, width) × [0, height) marks the round the same tick.
fn mark_out_of_bounds_projectiles(world: &mut World, viewport: &Viewport) {
    for (_entity, (_projectile, transform, lifecycle)) in
        world.query_mut::<(&Projectile, &Transform, &mut Lifecycle)>()
    {
        if !viewport.contains(transform.position) {
            lifecycle.ready_for_deletion = true;
        }
    }
}

struct EnemyCombatant {
    entity: Entity,
    order: SpawnOrder,
    bounds: Rect,
    vitals: Vitals,
    doomed: bool,
    score_multiplier: u32,
}

struct PlayerCombatant {
    entity: Entity,
    bounds: Rect,
    vitals: Vitals,
    visible: bool,
    doomed: bool,
}

struct Round {
    entity: Entity,
    order: SpawnOrder,
    bounds: Rect,
    fired_by: FiredBy,
    damage: i32,
    doomed: bool,
}

fn resolve_combat(world: &mut World, score: &mut ScoreState, audio_events: &mut Vec<AudioEvent>) {
    let mut enemies: Vec<EnemyCombatant> = world
        .query::<(&EnemyShip, &Transform, &Vitals, &Lifecycle, &SpawnOrder)>()
        .iter()
        .map(|(entity, (ship, transform, vitals, lifecycle, order))| EnemyCombatant {
            entity,
            order: *order,
            bounds: transform.bounds(),
            vitals: *vitals,
            doomed: lifecycle.ready_for_deletion || vitals.is_destroyed(),
            score_multiplier: ship.score_multiplier,
        })
        .collect();
    enemies.sort_by_key(|e| e.order);

    let mut player: Option<PlayerCombatant> = world
        .query::<(&PlayerShip, &Transform, &Vitals, &Visibility, &Lifecycle)>()
        .iter()
        .next()
        .map(|(entity, (_, transform, vitals, visibility, lifecycle))| PlayerCombatant {
            entity,
            bounds: transform.bounds(),
            vitals: *vitals,
            visible: visibility.visible,
            doomed: lifecycle.ready_for_deletion,
        });

    let mut rounds: Vec<Round> = world
        .query::<(&Projectile, &Transform, &Lifecycle, &SpawnOrder)>()
        .iter()
        .map(|(entity, (projectile, transform, lifecycle, order))| Round {
            entity,
            order: *order,
            bounds: transform.bounds(),
            fired_by: projectile.fired_by,
            damage: projectile.damage,
            doomed: lifecycle.ready_for_deletion,
        })
        .collect();
    rounds.sort_by_key(|r| r.order);

    // Player rounds vs enemies: first enemy in spawn order is credited.
    for round in rounds.iter_mut().filter(|r| r.fired_by == FiredBy::Player) {
        if round.doomed {
            continue;
        }
        if let Some(enemy) = enemies
            .iter_mut()
            .find(|e| !e.doomed && e.bounds.intersects(&round.bounds))
        {
            if enemy.vitals.apply_hit(round.damage) {
                enemy.doomed = true;
                score.score += u64::from(enemy.score_multiplier);
                score.enemies_destroyed += 1;
                audio_events.push(AudioEvent::Play {
                    sound: SoundId::Explosion,
                });
            } else {
                audio_events.push(AudioEvent::Play {
                    sound: SoundId::HullHit,
                });
            }
            round.doomed = true;
        }
    }

    // Enemy rounds and enemy bodies vs the player, only while visible.
    if let Some(player) = player.as_mut() {
        if player.visible && !player.doomed {
            for round in rounds.iter_mut().filter(|r| r.fired_by == FiredBy::Enemy) {
                if round.doomed || player.doomed {
                    continue;
                }
                if round.bounds.intersects(&player.bounds) {
                    hit_player(player, round.damage, audio_events);
                    round.doomed = true;
                }
            }

            // Direct body contact damages the player; the enemy survives.
            for enemy in enemies.iter().filter(|e| !e.doomed) {
                if player.doomed {
                    break;
                }
                if enemy.bounds.intersects(&player.bounds) {
                    hit_player(player, ENEMY_CONTACT_DAMAGE, audio_events);
                }
            }
        }
    }

    // Write results back to the world.
    for enemy in &enemies {
        if let Ok(mut vitals) = world.get::<&mut Vitals>(enemy.entity) {
            *vitals = enemy.vitals;
        }
        if enemy.doomed {
            if let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(enemy.entity) {
                lifecycle.ready_for_deletion = true;
            }
        }
    }
    if let Some(player) = &player {
        if let Ok(mut vitals) = world.get::<&mut Vitals>(player.entity) {
            *vitals = player.vitals;
        }
        if player.doomed {
            if let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(player.entity) {
                lifecycle.ready_for_deletion = true;
            }
        }
    }
    for round in &rounds {
        if round.doomed {
            if let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(round.entity) {
                lifecycle.ready_for_deletion = true;
            }
        }
    }
}

fn hit_player(player: &mut PlayerCombatant, damage: i32, audio_events: &mut Vec<AudioEvent>) {
    let shielded = player.vitals.shield_points > 0;
    if player.vitals.apply_hit(damage) {
        player.doomed = true;
        audio_events.push(AudioEvent::Play {
            sound: SoundId::Explosion,
        });
    } else {
        audio_events.push(AudioEvent::Play {
            sound: if shielded {
                SoundId::ShieldHit
            } else {
                SoundId::HullHit
            },
        });
    }
}
