//! ECS components for hecs entities.
//!
//! Components are plain data; game logic lives in systems and in the
//! behavior crate. Marker structs partition actors by kind.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AiMode, EnemyArchetype, FiredBy, WeaponKind};
use crate::errors::WeaponError;
use crate::types::{Heading, Rect};

// Velocity lives with the math types but doubles as an ECS component.
pub use crate::types::Velocity;

/// Position and sprite size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec2,
    pub size: DVec2,
}

impl Transform {
    pub fn new(position: DVec2, size: DVec2) -> Self {
        Self { position, size }
    }

    /// Axis-aligned bounding rectangle, position ± half-size.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }
}

/// Hit points and shield. The shield absorbs damage before hit points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hit_points: i32,
    pub shield_points: i32,
}

impl Vitals {
    pub fn new(hit_points: i32, shield_points: i32) -> Self {
        Self {
            hit_points,
            shield_points,
        }
    }

    /// Apply damage, shield first. Returns true if this hit was destructive.
    pub fn apply_hit(&mut self, damage: i32) -> bool {
        let absorbed = damage.min(self.shield_points);
        self.shield_points -= absorbed;
        self.hit_points -= damage - absorbed;
        self.hit_points <= 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points <= 0
    }
}

/// Whether the actor is drawn and participates in combat checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub visible: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Two-phase deletion flag. Systems mark; only the end-of-tick purge removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub ready_for_deletion: bool,
}

/// Monotonic spawn sequence number. Fixes iteration order wherever the
/// rules depend on it (collision crediting, snapshot ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks an enemy ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShip {
    pub archetype: EnemyArchetype,
    /// Score credited to the player when this hull is destroyed.
    pub score_multiplier: u32,
}

/// Marks a decorative background star. Never combat-checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star;

/// Marks a projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: WeaponKind,
    pub fired_by: FiredBy,
    pub damage: i32,
    /// Guided rounds bend toward the nearest opposing actor each tick.
    pub seeks_target: bool,
}

/// Per-enemy behavior state, owned by the actor and destroyed with it.
/// Tuning distances are resampled by the FSM at state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyAiState {
    pub mode: AiMode,
    pub keep_distance: f64,
    pub fallback_distance: f64,
    pub fall_to_heading: Heading,
}

/// A single weapon slot: ammo plus fire-rate gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub ammo_remaining: u32,
    pub fire_delay_ticks: u64,
    pub last_fired_tick: Option<u64>,
}

impl Weapon {
    pub fn new(kind: WeaponKind, ammo_remaining: u32, fire_delay_ticks: u64) -> Self {
        Self {
            kind,
            ammo_remaining,
            fire_delay_ticks,
            last_fired_tick: None,
        }
    }

    /// Gating invariant: ammo available and the fire delay elapsed.
    pub fn can_fire(&self, now_tick: u64) -> bool {
        self.ammo_remaining > 0
            && self
                .last_fired_tick
                .map_or(true, |t| now_tick.saturating_sub(t) >= self.fire_delay_ticks)
    }

    /// Attempt to fire: on success decrements one round and records the tick.
    pub fn fire(&mut self, now_tick: u64) -> bool {
        if !self.can_fire(now_tick) {
            return false;
        }
        self.ammo_remaining -= 1;
        self.last_fired_tick = Some(now_tick);
        true
    }
}

/// Per-actor weapon loadout: one primary slot plus an ordered set of
/// secondaries with a selection index (never an ownership edge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponLoadout {
    pub primary: Weapon,
    secondaries: Vec<Weapon>,
    selected: Option<usize>,
}

impl WeaponLoadout {
    pub fn new(primary: Weapon) -> Self {
        Self {
            primary,
            secondaries: Vec::new(),
            selected: None,
        }
    }

    pub fn add_secondary(&mut self, weapon: Weapon) {
        self.secondaries.push(weapon);
    }

    /// Select a secondary by kind. Selecting a zero-ammo weapon is legal;
    /// firing it is then a guaranteed no-op.
    pub fn select(&mut self, kind: WeaponKind) -> Result<(), WeaponError> {
        match self.secondaries.iter().position(|w| w.kind == kind) {
            Some(index) => {
                self.selected = Some(index);
                Ok(())
            }
            None => Err(WeaponError::NotFound { kind }),
        }
    }

    pub fn selected(&self) -> Option<&Weapon> {
        self.selected.and_then(|i| self.secondaries.get(i))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Weapon> {
        self.selected.and_then(|i| self.secondaries.get_mut(i))
    }

    pub fn secondaries(&self) -> &[Weapon] {
        &self.secondaries
    }

    /// Secondary kinds that currently have ammo, in loadout order.
    pub fn armed_kinds(&self) -> Vec<WeaponKind> {
        self.secondaries
            .iter()
            .filter(|w| w.ammo_remaining > 0)
            .map(|w| w.kind)
            .collect()
    }
}
