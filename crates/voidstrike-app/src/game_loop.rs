//! Game loop thread — the simulation clock.
//!
//! Runs the engine at the fixed tick rate on a dedicated thread,
//! independent of any render cadence. Commands arrive via `mpsc`; the
//! end-of-tick snapshot is published into shared state for the renderer.
//! Stopping is cooperative: the loop checks its channel at the top of each
//! tick and exits on `Shutdown`, channel disconnect, or the Escape key.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use voidstrike_core::constants::TICK_RATE;
use voidstrike_core::enums::LogicalKey;
use voidstrike_core::state::GameSnapshot;
use voidstrike_sim::engine::{SimConfig, SimulationEngine};

use crate::input::{self, InputSource};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SimConfig,
    input_source: Box<dyn InputSource>,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("voidstrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, input_source, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown, channel disconnect, or Escape.
fn run_game_loop(
    config: SimConfig,
    mut input_source: Box<dyn InputSource>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands (cooperative stop point).
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Poll input once, then advance one tick.
        let input = input::sample(input_source.as_mut());
        if input.is_pressed(LogicalKey::Escape) {
            log::info!("escape pressed, stopping game loop");
            return;
        }
        let snapshot = engine.tick(&input);

        // 3. Publish the end-of-tick snapshot for the render collaborator.
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NullInput;
    use voidstrike_core::commands::PlayerCommand;
    use voidstrike_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartScenario))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartScenario)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_matches_rate() {
        let expected_nanos = 1_000_000_000u64 / TICK_RATE as u64;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            SimConfig::default(),
            Box::new(NullInput),
            Arc::clone(&latest),
        )
        .unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartScenario))
            .unwrap();

        // Wait for at least one published snapshot.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(snapshot) = latest.lock().unwrap().clone() {
                if snapshot.phase == GamePhase::Active {
                    break;
                }
            }
            assert!(Instant::now() < deadline, "no active snapshot published");
            std::thread::sleep(Duration::from_millis(5));
        }

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
