//! Kinematic integration system.
//!
//! Bends guided projectiles toward their targets, translates every moving
//! actor by `heading * speed * dt`, and redirects enemies that drift past
//! the padded viewport boundary back toward the player. Enemies never
//! leave the simulation by going off-screen — only by destruction.

use glam::DVec2;
use hecs::World;

use voidstrike_core::components::{
    EnemyShip, Lifecycle, PlayerShip, Projectile, Transform, Velocity, Visibility,
};
use voidstrike_core::constants::{DT, GUIDED_TURN_STEP_DEG, VIEWPORT_ENEMY_MARGIN};
use voidstrike_core::enums::FiredBy;
use voidstrike_core::types::{Heading, Viewport};

pub fn run(world: &mut World, viewport: &Viewport) {
    steer_guided(world);
    integrate(world);
    redirect_offscreen_enemies(world, viewport);
}

/// position += heading * speed * dt for every moving actor except the
/// player, which integrates during input application.
fn integrate(world: &mut World) {
    for (_entity, (transform, velocity, player)) in
        world.query_mut::<(&mut Transform, &Velocity, Option<&PlayerShip>)>()
    {
        if player.is_some() {
            continue;
        }
        transform.position += velocity.displacement(DT);
    }
}

/// Bend seeking projectiles toward the nearest opposing actor by at most
/// the per-tick guided turn step — homing, not instantaneous.
fn steer_guided(world: &mut World) {
    let player_position = visible_player_position(world);
    let enemy_positions: Vec<DVec2> = world
        .query::<(&EnemyShip, &Transform, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, lifecycle))| !lifecycle.ready_for_deletion)
        .map(|(_, (_, transform, _))| transform.position)
        .collect();

    for (_entity, (projectile, transform, velocity)) in
        world.query_mut::<(&Projectile, &Transform, &mut Velocity)>()
    {
        if !projectile.seeks_target {
            continue;
        }

        let target = match projectile.fired_by {
            FiredBy::Enemy => player_position,
            FiredBy::Player => nearest(transform.position, &enemy_positions),
        };
        let Some(target) = target else { continue };

        let bearing = Heading::between(transform.position, target);
        if velocity.heading.separation(bearing) <= GUIDED_TURN_STEP_DEG {
            velocity.heading = bearing;
        } else {
            velocity.heading = velocity.heading.turn_step(bearing, GUIDED_TURN_STEP_DEG);
        }
    }
}

/// Enemies past the viewport padded by their own size plus a fixed margin
/// are pointed back at the player.
fn redirect_offscreen_enemies(world: &mut World, viewport: &Viewport) {
    let player_position = match visible_player_position(world) {
        Some(position) => position,
        None => return,
    };

    for (_entity, (_enemy, transform, velocity)) in
        world.query_mut::<(&EnemyShip, &Transform, &mut Velocity)>()
    {
        let padded = viewport
            .bounds()
            .expanded(transform.size + DVec2::splat(VIEWPORT_ENEMY_MARGIN));
        if !padded.contains(transform.position) {
            velocity.heading = Heading::between(transform.position, player_position);
        }
    }
}

fn nearest(from: DVec2, candidates: &[DVec2]) -> Option<DVec2> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| {
            from.distance_squared(*a)
                .total_cmp(&from.distance_squared(*b))
        })
}

fn visible_player_position(world: &World) -> Option<DVec2> {
    world
        .query::<(&PlayerShip, &Transform, &Visibility)>()
        .iter()
        .next()
        .filter(|(_, (_, _, visibility))| visibility.visible)
        .map(|(_, (_, transform, _))| transform.position)
}
