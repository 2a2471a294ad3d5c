//! Player commands and per-tick input state.
//!
//! Discrete commands are queued and processed at the next tick boundary.
//! Held keys are polled once per tick by the host shell into an
//! `InputState` that the engine consumes during input application.

use serde::{Deserialize, Serialize};

use crate::enums::LogicalKey;

/// Discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart) the scripted scenario.
    StartScenario,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

/// Snapshot of held logical keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub reverse: bool,
    pub rotate_clockwise: bool,
    pub rotate_counter_clockwise: bool,
    pub fire: bool,
    pub escape: bool,
}

impl InputState {
    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Forward => self.forward,
            LogicalKey::Reverse => self.reverse,
            LogicalKey::RotateClockwise => self.rotate_clockwise,
            LogicalKey::RotateCounterClockwise => self.rotate_counter_clockwise,
            LogicalKey::Fire => self.fire,
            LogicalKey::Escape => self.escape,
        }
    }
}
