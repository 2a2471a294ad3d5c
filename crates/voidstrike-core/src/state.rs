//! Game state snapshot — the read-only view built once per tick for the
//! render collaborator. Never a live reference into the world.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, GamePhase, ScenarioState};
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete end-of-tick state handed to the host shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub scenario: ScenarioView,
    pub actors: Vec<ActorView>,
    pub score: ScoreView,
    /// Accumulated background scroll offset (parallax anchor).
    pub background_offset: DVec2,
    pub audio_events: Vec<AudioEvent>,
}

/// One drawable actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    /// Stable id (spawn sequence number).
    pub id: u64,
    pub kind: ActorKind,
    pub position: DVec2,
    pub size: DVec2,
    /// Orientation in degrees.
    pub heading_deg: f64,
    pub visible: bool,
    pub hit_points: i32,
    pub shield_points: i32,
}

/// Scenario progress for the HUD.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScenarioView {
    pub state: ScenarioState,
    pub current_wave: u32,
    pub total_waves: u32,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub enemies_destroyed: u32,
}
