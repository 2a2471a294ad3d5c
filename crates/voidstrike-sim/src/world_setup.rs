//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the decorative starfield, enemy hulls, and
//! projectiles with appropriate component bundles. All factories validate
//! their configuration; a rejected spawn is fatal to that call only.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::*;
use voidstrike_core::constants::*;
use voidstrike_core::enums::{EnemyArchetype, FiredBy, WeaponKind};
use voidstrike_core::errors::SpawnError;
use voidstrike_core::events::SoundId;
use voidstrike_core::types::{Heading, Velocity, Viewport};

use voidstrike_enemy_ai::{fsm, profiles};

/// Kinematics of a projectile as launched. Speeds are px/s.
pub struct ProjectileParams {
    pub speed: f64,
    pub damage: i32,
    pub size: f64,
    pub seeks_target: bool,
    pub launch_sound: SoundId,
}

/// Per-kind projectile parameters.
pub fn projectile_params(kind: WeaponKind) -> ProjectileParams {
    match kind {
        WeaponKind::PulseCannon => ProjectileParams {
            speed: 900.0,
            damage: 1,
            size: 6.0,
            seeks_target: false,
            launch_sound: SoundId::PulseFire,
        },
        WeaponKind::TwinPulseCannon => ProjectileParams {
            speed: 900.0,
            damage: 2,
            size: 8.0,
            seeks_target: false,
            launch_sound: SoundId::PulseFire,
        },
        WeaponKind::PlasmaTorpedo => ProjectileParams {
            speed: 600.0,
            damage: 2,
            size: 10.0,
            seeks_target: false,
            launch_sound: SoundId::TorpedoFire,
        },
        WeaponKind::SeekerMissile => ProjectileParams {
            speed: 500.0,
            damage: 3,
            size: 10.0,
            seeks_target: true,
            launch_sound: SoundId::MissileFire,
        },
    }
}

fn next_seq(seq: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*seq);
    *seq += 1;
    order
}

/// Spawn the player ship hidden at the viewport center. The scenario
/// reveals it via a scheduled event.
pub fn spawn_player(
    world: &mut World,
    viewport: &Viewport,
    seq: &mut u64,
) -> Result<Entity, SpawnError> {
    if PLAYER_SIZE <= 0.0 || PLAYER_SPEED <= 0.0 {
        return Err(SpawnError::InvalidConfiguration {
            reason: format!(
                "player size/speed must be positive, got {PLAYER_SIZE}/{PLAYER_SPEED}"
            ),
        });
    }

    let primary = Weapon::new(
        WeaponKind::PulseCannon,
        PLAYER_PRIMARY_ROUNDS,
        ms_to_ticks(PLAYER_PRIMARY_DELAY_MS),
    );

    Ok(world.spawn((
        PlayerShip,
        Transform::new(viewport.center(), DVec2::splat(PLAYER_SIZE)),
        Velocity::new(Heading::new(270.0), PLAYER_SPEED, PLAYER_SPEED),
        Vitals::new(PLAYER_START_HIT_POINTS, 0),
        Visibility { visible: false },
        Lifecycle::default(),
        next_seq(seq),
        WeaponLoadout::new(primary),
    )))
}

/// Re-center the player and make it visible (scenario reveal).
pub fn reset_and_show_player(world: &mut World, viewport: &Viewport) {
    for (_entity, (_player, transform, visibility)) in
        world.query_mut::<(&PlayerShip, &mut Transform, &mut Visibility)>()
    {
        transform.position = viewport.center();
        visibility.visible = true;
    }
}

/// Hide the player (scenario intro).
pub fn hide_player(world: &mut World) {
    for (_entity, (_player, visibility)) in world.query_mut::<(&PlayerShip, &mut Visibility)>() {
        visibility.visible = false;
    }
}

/// Grant the scenario's starting hit-point and shield bonus to the player.
pub fn grant_player_bonus(world: &mut World, hit_points: i32, shield_points: i32) {
    for (_entity, (_player, vitals)) in world.query_mut::<(&PlayerShip, &mut Vitals)>() {
        vitals.hit_points += hit_points;
        vitals.shield_points += shield_points;
    }
}

/// Seed the decorative starfield at random on-screen positions.
pub fn spawn_starfield(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: &Viewport,
    seq: &mut u64,
    count: usize,
) {
    for _ in 0..count {
        let position = random_onscreen_position(rng, viewport);
        world.spawn((
            Star,
            Transform::new(position, DVec2::splat(STAR_SIZE)),
            Lifecycle::default(),
            next_seq(seq),
        ));
    }
}

/// Spawn a single enemy hull off-screen, heading toward the viewport
/// center. Hit points and max speed are sampled from the archetype bands.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: &Viewport,
    seq: &mut u64,
    archetype: EnemyArchetype,
) -> Result<Entity, SpawnError> {
    let profile = profiles::profile(archetype);
    if ENEMY_SIZE <= 0.0 || profile.max_speed_min <= 0.0 || profile.hit_points_min <= 0 {
        return Err(SpawnError::InvalidConfiguration {
            reason: format!("{archetype:?} profile has non-positive size/speed/hull bounds"),
        });
    }

    let position = random_offscreen_position(rng, viewport, OFFSCREEN_SPAWN_MIN, OFFSCREEN_SPAWN_MAX);
    let max_speed = rng.gen_range(profile.max_speed_min..=profile.max_speed_max);
    let hit_points = rng.gen_range(profile.hit_points_min..=profile.hit_points_max);
    let heading = Heading::between(position, viewport.center());

    Ok(world.spawn((
        EnemyShip {
            archetype,
            score_multiplier: profile.score_multiplier,
        },
        Transform::new(position, DVec2::splat(ENEMY_SIZE)),
        Velocity::new(heading, max_speed, max_speed),
        Vitals::new(hit_points, 0),
        Visibility::default(),
        Lifecycle::default(),
        next_seq(seq),
        fsm::initial_state(archetype, rng),
        profiles::roll_loadout(&profile, rng),
    )))
}

/// Spawn request for one projectile, produced by the weapon system.
pub struct ProjectileSpawn {
    pub kind: WeaponKind,
    pub fired_by: FiredBy,
    pub position: DVec2,
    pub heading: Heading,
}

/// Spawn a projectile actor from a launch request.
pub fn spawn_projectile(
    world: &mut World,
    seq: &mut u64,
    spawn: ProjectileSpawn,
) -> Result<Entity, SpawnError> {
    let params = projectile_params(spawn.kind);
    if params.speed <= 0.0 || params.size <= 0.0 {
        return Err(SpawnError::InvalidConfiguration {
            reason: format!("{:?} projectile has non-positive speed/size", spawn.kind),
        });
    }

    Ok(world.spawn((
        Projectile {
            kind: spawn.kind,
            fired_by: spawn.fired_by,
            damage: params.damage,
            seeks_target: params.seeks_target,
        },
        Transform::new(spawn.position, DVec2::splat(params.size)),
        Velocity::new(spawn.heading, params.speed, params.speed),
        Visibility::default(),
        Lifecycle::default(),
        next_seq(seq),
    )))
}

/// Uniform position inside the viewport.
pub fn random_onscreen_position(rng: &mut ChaCha8Rng, viewport: &Viewport) -> DVec2 {
    DVec2::new(
        rng.gen_range(0.0..viewport.width()),
        rng.gen_range(0.0..viewport.height()),
    )
}

/// Position beyond one of the four viewport edges, chosen uniformly, offset
/// outward by a margin in [min, max].
pub fn random_offscreen_position(
    rng: &mut ChaCha8Rng,
    viewport: &Viewport,
    min: f64,
    max: f64,
) -> DVec2 {
    let offset = rng.gen_range(min..max);
    match rng.gen_range(0..4u8) {
        0 => DVec2::new(-offset, rng.gen_range(0.0..viewport.height())),
        1 => DVec2::new(
            viewport.width() + offset,
            rng.gen_range(0.0..viewport.height()),
        ),
        2 => DVec2::new(rng.gen_range(0.0..viewport.width()), -offset),
        _ => DVec2::new(
            rng.gen_range(0.0..viewport.width()),
            viewport.height() + offset,
        ),
    }
}
