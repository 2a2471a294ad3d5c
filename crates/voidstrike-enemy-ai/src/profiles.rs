//! Archetype-specific behavioral profiles.
//!
//! Everything that varies between enemy archetypes is data in this module:
//! movement thresholds, hull bands, and the range-bucketed weapon
//! preference table. The FSM in `fsm.rs` never special-cases an archetype.

use rand::Rng;

use voidstrike_core::components::{Weapon, WeaponLoadout};
use voidstrike_core::constants::ms_to_ticks;
use voidstrike_core::enums::{EnemyArchetype, WeaponKind};

/// One entry of the weapon preference table. Entries are ordered longest
/// range first; the first entry whose lower bound the current distance
/// exceeds (and whose weapon is armed) wins.
#[derive(Debug, Clone, Copy)]
pub struct WeaponBracket {
    pub min_range: f64,
    pub kind: WeaponKind,
}

/// A weapon as fitted to a hull at spawn: rounds and fire cadence.
#[derive(Debug, Clone, Copy)]
pub struct WeaponFit {
    pub kind: WeaponKind,
    pub rounds: u32,
    pub fire_delay_ms: u64,
}

/// Behavioral profile for an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorProfile {
    /// Base standoff distance; per-cycle value is `base * (rand + 1)`.
    pub base_keep_distance: f64,
    /// Base retreat distance; per-cycle value is `base * (rand + 1)`.
    pub base_fallback_distance: f64,
    /// Heading rotation per tick while re-orienting (degrees).
    pub turn_step_deg: f64,
    /// Angular delta below which the ship counts as aligned (degrees).
    pub align_tolerance_deg: f64,
    /// Maximum off-bore angle at which the ship will still fire (degrees).
    pub aim_tolerance_deg: f64,
    /// No weapon is considered beyond this distance.
    pub engagement_range: f64,
    /// Inside this distance the primary cannon fires regardless of brackets.
    pub point_blank_range: f64,
    /// Weapon preference table, longest range first.
    pub brackets: &'static [WeaponBracket],
    /// Primary cannon fit.
    pub primary_fit: WeaponFit,
    /// Secondary weapons every hull of this archetype carries.
    pub secondary_fits: &'static [WeaponFit],
    /// Secondary carried only by some hulls: (odds, fit).
    pub optional_fit: Option<(f64, WeaponFit)>,
    /// Secondary selected at spawn.
    pub default_selection: WeaponKind,
    /// Hull hit-point band, sampled per spawn.
    pub hit_points_min: i32,
    pub hit_points_max: i32,
    /// Max-speed band (px/s), sampled per spawn.
    pub max_speed_min: f64,
    pub max_speed_max: f64,
    /// Score credited on destruction.
    pub score_multiplier: u32,
}

const RAIDER_BRACKETS: [WeaponBracket; 4] = [
    WeaponBracket {
        min_range: 500.0,
        kind: WeaponKind::SeekerMissile,
    },
    WeaponBracket {
        min_range: 300.0,
        kind: WeaponKind::PlasmaTorpedo,
    },
    WeaponBracket {
        min_range: 200.0,
        kind: WeaponKind::PulseCannon,
    },
    WeaponBracket {
        min_range: 100.0,
        kind: WeaponKind::TwinPulseCannon,
    },
];

const RAIDER_FITS: [WeaponFit; 3] = [
    WeaponFit {
        kind: WeaponKind::PlasmaTorpedo,
        rounds: 5,
        fire_delay_ms: 1000,
    },
    WeaponFit {
        kind: WeaponKind::PulseCannon,
        rounds: 100,
        fire_delay_ms: 500,
    },
    WeaponFit {
        kind: WeaponKind::TwinPulseCannon,
        rounds: 100,
        fire_delay_ms: 500,
    },
];

const BRAWLER_BRACKETS: [WeaponBracket; 2] = [
    WeaponBracket {
        min_range: 200.0,
        kind: WeaponKind::PulseCannon,
    },
    WeaponBracket {
        min_range: 100.0,
        kind: WeaponKind::TwinPulseCannon,
    },
];

const BRAWLER_FITS: [WeaponFit; 2] = [
    WeaponFit {
        kind: WeaponKind::PulseCannon,
        rounds: 150,
        fire_delay_ms: 400,
    },
    WeaponFit {
        kind: WeaponKind::TwinPulseCannon,
        rounds: 80,
        fire_delay_ms: 500,
    },
];

const LANCER_BRACKETS: [WeaponBracket; 2] = [
    WeaponBracket {
        min_range: 350.0,
        kind: WeaponKind::PlasmaTorpedo,
    },
    WeaponBracket {
        min_range: 150.0,
        kind: WeaponKind::PulseCannon,
    },
];

const LANCER_FITS: [WeaponFit; 2] = [
    WeaponFit {
        kind: WeaponKind::PlasmaTorpedo,
        rounds: 12,
        fire_delay_ms: 1200,
    },
    WeaponFit {
        kind: WeaponKind::PulseCannon,
        rounds: 60,
        fire_delay_ms: 500,
    },
];

/// Get the behavioral profile for a given archetype.
pub fn profile(archetype: EnemyArchetype) -> BehaviorProfile {
    match archetype {
        EnemyArchetype::Raider => BehaviorProfile {
            base_keep_distance: 100.0,
            base_fallback_distance: 400.0,
            turn_step_deg: 1.0,
            align_tolerance_deg: 10.0,
            aim_tolerance_deg: 8.0,
            engagement_range: 700.0,
            point_blank_range: 100.0,
            brackets: &RAIDER_BRACKETS,
            primary_fit: WeaponFit {
                kind: WeaponKind::PulseCannon,
                rounds: 200,
                fire_delay_ms: 300,
            },
            secondary_fits: &RAIDER_FITS,
            optional_fit: Some((
                0.5,
                WeaponFit {
                    kind: WeaponKind::SeekerMissile,
                    rounds: 10,
                    fire_delay_ms: 2000,
                },
            )),
            default_selection: WeaponKind::PulseCannon,
            hit_points_min: 2,
            hit_points_max: 4,
            max_speed_min: 190.0,
            max_speed_max: 230.0,
            score_multiplier: 25,
        },
        EnemyArchetype::Brawler => BehaviorProfile {
            base_keep_distance: 60.0,
            base_fallback_distance: 250.0,
            turn_step_deg: 1.5,
            align_tolerance_deg: 10.0,
            aim_tolerance_deg: 12.0,
            engagement_range: 400.0,
            point_blank_range: 100.0,
            brackets: &BRAWLER_BRACKETS,
            primary_fit: WeaponFit {
                kind: WeaponKind::PulseCannon,
                rounds: 300,
                fire_delay_ms: 250,
            },
            secondary_fits: &BRAWLER_FITS,
            optional_fit: None,
            default_selection: WeaponKind::PulseCannon,
            hit_points_min: 1,
            hit_points_max: 3,
            max_speed_min: 240.0,
            max_speed_max: 280.0,
            score_multiplier: 10,
        },
        EnemyArchetype::Lancer => BehaviorProfile {
            base_keep_distance: 300.0,
            base_fallback_distance: 700.0,
            turn_step_deg: 0.8,
            align_tolerance_deg: 10.0,
            aim_tolerance_deg: 6.0,
            engagement_range: 900.0,
            point_blank_range: 100.0,
            brackets: &LANCER_BRACKETS,
            primary_fit: WeaponFit {
                kind: WeaponKind::PulseCannon,
                rounds: 120,
                fire_delay_ms: 400,
            },
            secondary_fits: &LANCER_FITS,
            optional_fit: None,
            default_selection: WeaponKind::PlasmaTorpedo,
            hit_points_min: 3,
            hit_points_max: 6,
            max_speed_min: 150.0,
            max_speed_max: 180.0,
            score_multiplier: 40,
        },
    }
}

/// Build a loadout for a fresh hull of this archetype, rolling the optional
/// fit and pre-selecting the archetype's default secondary.
pub fn roll_loadout<R: Rng>(profile: &BehaviorProfile, rng: &mut R) -> WeaponLoadout {
    let fit = |f: &WeaponFit| Weapon::new(f.kind, f.rounds, ms_to_ticks(f.fire_delay_ms));

    let mut loadout = WeaponLoadout::new(fit(&profile.primary_fit));
    for f in profile.secondary_fits {
        loadout.add_secondary(fit(f));
    }
    if let Some((odds, f)) = &profile.optional_fit {
        if rng.gen_bool(*odds) {
            loadout.add_secondary(fit(f));
        }
    }
    // Default selection always names a weapon from secondary_fits.
    let _ = loadout.select(profile.default_selection);
    loadout
}
