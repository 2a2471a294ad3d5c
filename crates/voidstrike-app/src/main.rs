//! Headless VOIDSTRIKE demo.
//!
//! Runs the scripted scenario synchronously for a fixed horizon with a
//! scripted pilot and logs the outcome. A renderer would instead attach
//! to the game-loop thread and read the shared snapshot slot.

use voidstrike_app::input::{self, ScriptedInput};
use voidstrike_core::commands::{InputState, PlayerCommand};
use voidstrike_core::constants::TICK_RATE;
use voidstrike_core::enums::GamePhase;
use voidstrike_sim::engine::{SimConfig, SimulationEngine};

fn main() {
    env_logger::init();

    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartScenario);

    let thrust = InputState {
        forward: true,
        fire: true,
        ..Default::default()
    };
    let spin = InputState {
        rotate_clockwise: true,
        fire: true,
        ..Default::default()
    };
    let mut pilot = ScriptedInput::default()
        .hold(InputState::default(), 60)
        .hold(thrust, 180)
        .hold(spin, 120)
        .hold(thrust, 180);

    let horizon = 60 * TICK_RATE as u64; // one minute of simulated play
    let mut last = None;
    for _ in 0..horizon {
        let snapshot = engine.tick(&input::sample(&mut pilot));
        let done = matches!(
            snapshot.phase,
            GamePhase::Complete | GamePhase::GameOver
        );
        last = Some(snapshot);
        if done {
            break;
        }
    }

    if let Some(snapshot) = last {
        log::info!(
            "finished at tick {} in phase {:?}: wave {}/{}, score {}, {} kills",
            snapshot.time.tick,
            snapshot.phase,
            snapshot.scenario.current_wave,
            snapshot.scenario.total_waves,
            snapshot.score.score,
            snapshot.score.enemies_destroyed,
        );
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::debug!("final snapshot: {json}"),
            Err(err) => log::warn!("snapshot serialization failed: {err}"),
        }
    }
}
