//! Shared state between the game-loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use voidstrike_core::commands::PlayerCommand;
use voidstrike_core::state::GameSnapshot;

/// Commands sent into the game-loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Host-side shared state.
///
/// The latest end-of-tick snapshot is the only surface the render
/// collaborator reads; it never observes an in-progress tick.
pub struct AppState {
    /// Channel sender to the game loop thread, `None` before launch.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, replaced by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_starts_empty() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
    }
}
