//! Enemy movement and fire-control state machine.
//!
//! `evaluate` is invoked once per tick per enemy. It never fails: any
//! inconsistency (empty loadout, degenerate geometry) degrades to "no fire
//! request this tick". Movement follows a cyclic three-state pattern shared
//! by all archetypes; thresholds come from the archetype profile.

use glam::DVec2;
use rand::Rng;

use voidstrike_core::components::EnemyAiState;
use voidstrike_core::enums::{AiMode, EnemyArchetype, WeaponKind};
use voidstrike_core::types::Heading;

use crate::profiles::{profile, BehaviorProfile};

/// Input to the behavior evaluation for a single enemy.
pub struct EnemyContext<'a> {
    pub archetype: EnemyArchetype,
    pub state: EnemyAiState,
    pub heading: Heading,
    pub position: DVec2,
    pub player_position: DVec2,
    pub distance_to_player: f64,
    /// Secondary kinds currently holding ammo, in loadout order.
    pub armed: &'a [WeaponKind],
}

/// Which weapon slot a fire request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireChoice {
    Primary,
    Secondary(WeaponKind),
}

/// Output of one behavior evaluation.
pub struct EnemyUpdate {
    pub state: EnemyAiState,
    pub heading: Heading,
    pub fire: Option<FireChoice>,
}

/// Sample the initial behavior state for a fresh hull.
pub fn initial_state<R: Rng>(archetype: EnemyArchetype, rng: &mut R) -> EnemyAiState {
    let profile = profile(archetype);
    EnemyAiState {
        mode: AiMode::Approaching,
        keep_distance: profile.base_keep_distance * (rng.gen::<f64>() + 1.0),
        fallback_distance: profile.base_fallback_distance * (rng.gen::<f64>() + 1.0),
        fall_to_heading: Heading::default(),
    }
}

/// Evaluate one tick of behavior: movement-state step plus an independent
/// weapon-selection pass.
pub fn evaluate<R: Rng>(ctx: &EnemyContext<'_>, rng: &mut R) -> EnemyUpdate {
    let profile = profile(ctx.archetype);
    let (state, heading) = step_movement(ctx, &profile, rng);
    let fire = choose_fire(ctx, &profile, heading);

    EnemyUpdate {
        state,
        heading,
        fire,
    }
}

/// Advance the movement cycle by one tick.
fn step_movement<R: Rng>(
    ctx: &EnemyContext<'_>,
    profile: &BehaviorProfile,
    rng: &mut R,
) -> (EnemyAiState, Heading) {
    let mut state = ctx.state;
    let mut heading = ctx.heading;
    let distance = ctx.distance_to_player;

    match state.mode {
        AiMode::Approaching => {
            if distance > state.keep_distance {
                heading = Heading::between(ctx.position, ctx.player_position);
            } else {
                state.mode = AiMode::MovingToFallback;
                state.fall_to_heading = heading + (180.0 + rng.gen_range(-10.0..=10.0));
                state.fallback_distance =
                    profile.base_fallback_distance * (rng.gen::<f64>() + 1.0);
            }
        }
        AiMode::MovingToFallback => {
            if heading.delta_to(state.fall_to_heading) > profile.align_tolerance_deg {
                heading = heading.turn_step(state.fall_to_heading, profile.turn_step_deg);
            }
            if distance > state.fallback_distance {
                state.mode = AiMode::MovingToApproach;
            }
        }
        AiMode::MovingToApproach => {
            let bearing = Heading::between(ctx.position, ctx.player_position);
            if heading.delta_to(bearing) > profile.align_tolerance_deg {
                heading = heading.turn_step(bearing, profile.turn_step_deg);
            } else {
                state.mode = AiMode::Approaching;
                state.keep_distance = profile.base_keep_distance * (rng.gen::<f64>() + 1.0);
            }
        }
    }

    (state, heading)
}

/// Pick a weapon for this tick, bucketed by distance from longest range to
/// shortest. A bracket only wins if the weapon is armed; firing additionally
/// requires the hull to point at the player within the aim tolerance.
fn choose_fire(
    ctx: &EnemyContext<'_>,
    profile: &BehaviorProfile,
    heading: Heading,
) -> Option<FireChoice> {
    let distance = ctx.distance_to_player;
    if distance >= profile.engagement_range {
        return None;
    }

    if let Some(bracket) = profile
        .brackets
        .iter()
        .find(|b| distance > b.min_range && ctx.armed.contains(&b.kind))
    {
        let bearing = Heading::between(ctx.position, ctx.player_position);
        if heading.separation(bearing) <= profile.aim_tolerance_deg {
            return Some(FireChoice::Secondary(bracket.kind));
        }
        return None;
    }

    if distance < profile.point_blank_range {
        return Some(FireChoice::Primary);
    }

    None
}
