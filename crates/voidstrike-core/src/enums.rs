//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavior/visual variant. Each archetype carries its own movement
/// thresholds and weapon preference table in `voidstrike-enemy-ai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Mid-range skirmisher; keeps a medium standoff and cycles fallback runs.
    /// Some hulls carry seeker missiles.
    Raider,
    /// Close-range bruiser with cannon armament and a short keep distance.
    Brawler,
    /// Long-range standoff platform favoring torpedoes.
    Lancer,
}

/// Movement state of the enemy behavior cycle. The cycle has no terminal
/// state; it persists for the actor's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMode {
    /// Steering toward the player until inside keep distance.
    #[default]
    Approaching,
    /// Rotating onto a retreat heading and opening distance.
    MovingToFallback,
    /// Rotating back onto the bearing to the player.
    MovingToApproach,
}

/// Weapon flavors available to loadouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Rapid-fire single cannon.
    PulseCannon,
    /// Paired cannon, heavier per-round damage.
    TwinPulseCannon,
    /// Slow heavy bolt, medium range.
    PlasmaTorpedo,
    /// Guided round that bends toward the nearest opposing actor.
    SeekerMissile,
}

/// Which side launched a projectile. Drives the friendly-fire rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiredBy {
    Player,
    Enemy,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Active,
    Paused,
    /// Scenario finished with the player alive.
    Complete,
    /// Player ship destroyed.
    GameOver,
}

/// Scenario script state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Actor kind identifier carried in render snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy(EnemyArchetype),
    Projectile(FiredBy),
    Star,
}

/// Logical input actions exposed by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalKey {
    Forward,
    Reverse,
    RotateClockwise,
    RotateCounterClockwise,
    Fire,
    Escape,
}
