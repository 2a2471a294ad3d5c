//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in fixed phase order each tick, dispatches scheduled
//! events, and produces `GameSnapshot`s. Completely headless, enabling
//! deterministic testing: the same seed and input stream reproduce the
//! same snapshot stream.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::commands::{InputState, PlayerCommand};
use voidstrike_core::constants::{DEFAULT_TOTAL_WAVES, STAR_COUNT};
use voidstrike_core::enums::{GamePhase, ScenarioState};
use voidstrike_core::events::AudioEvent;
use voidstrike_core::state::GameSnapshot;
use voidstrike_core::types::{SimTime, Viewport};

use crate::scenario::{Scenario, ScoreState};
use crate::scheduler::{EventCallback, EventContext, EventScheduler, ScheduledEvent};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same simulation.
    pub seed: u64,
    /// Viewport geometry for boundary checks and spawn placement.
    pub viewport: Viewport,
    /// Waves in the scripted scenario.
    pub total_waves: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            total_waves: DEFAULT_TOTAL_WAVES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    viewport: Viewport,
    total_waves: u32,
    rng: ChaCha8Rng,
    scheduler: EventScheduler,
    scenario: Scenario,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    spawn_seq: u64,
    background_offset: DVec2,
    engine_roaring: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            viewport: config.viewport,
            total_waves: config.total_waves,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scheduler: EventScheduler::default(),
            scenario: Scenario::new(config.total_waves),
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            spawn_seq: 0,
            background_offset: DVec2::ZERO,
            engine_roaring: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(input);
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.scenario,
            &self.score,
            self.background_offset,
            audio_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Read-only access to the ECS world (render/test inspection only).
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutable world access for test scaffolding.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartScenario => {
                if matches!(
                    self.phase,
                    GamePhase::Idle | GamePhase::Complete | GamePhase::GameOver
                ) {
                    self.start_scenario();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Reset all state and launch the scripted scenario.
    fn start_scenario(&mut self) {
        self.world.clear();
        self.scheduler = EventScheduler::default();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.spawn_seq = 0;
        self.background_offset = DVec2::ZERO;
        self.engine_roaring = false;

        if let Err(err) =
            world_setup::spawn_player(&mut self.world, &self.viewport, &mut self.spawn_seq)
        {
            log::warn!("scenario aborted, player spawn rejected: {err}");
            return;
        }
        world_setup::spawn_starfield(
            &mut self.world,
            &mut self.rng,
            &self.viewport,
            &mut self.spawn_seq,
            STAR_COUNT,
        );

        self.scenario = Scenario::new(self.total_waves);
        self.scenario
            .execute(&mut self.world, &mut self.scheduler, self.time.tick);
        self.phase = GamePhase::Active;
    }

    /// Run all systems in fixed phase order.
    fn run_systems(&mut self, input: &InputState) {
        // 1. Enemy AI decisions
        let fire_requests = systems::enemy_ai::run(&mut self.world, &mut self.rng);
        // 2. Motion integration (guided steering, translation, boundary redirect)
        systems::movement::run(&mut self.world, &self.viewport);
        // 3. Collision resolution and damage
        systems::collision::run(
            &mut self.world,
            &self.viewport,
            &mut self.score,
            &mut self.audio_events,
        );
        // 4. Fire-request resolution into projectile actors
        systems::weapons::run(
            &mut self.world,
            fire_requests,
            self.time.tick,
            &mut self.spawn_seq,
            &mut self.audio_events,
        );
        // 5. Player input application (and parallax scroll)
        let shift = systems::player_control::run(
            &mut self.world,
            input,
            &self.viewport,
            self.time.tick,
            &mut self.spawn_seq,
            &mut self.audio_events,
            &mut self.engine_roaring,
        );
        self.background_offset += shift;
        // 6. Scheduled events
        for event in self.scheduler.collect_due(self.time.tick) {
            self.dispatch_event(event);
        }
        // 7. Deletion purge
        let outcome = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        if outcome.player_destroyed {
            self.phase = GamePhase::GameOver;
            log::debug!("player destroyed at tick {}", self.time.tick);
        } else if self.scenario.state == ScenarioState::Complete {
            self.phase = GamePhase::Complete;
        }
    }

    /// Invoke one due event's callback with its context payload.
    fn dispatch_event(&mut self, event: ScheduledEvent) {
        match event.callback {
            EventCallback::RevealPlayer => {
                world_setup::reset_and_show_player(&mut self.world, &self.viewport);
            }
            EventCallback::WaveCheck => {
                self.scenario.wave_check(
                    &mut self.world,
                    &mut self.scheduler,
                    &mut self.rng,
                    self.time.tick,
                    &mut self.audio_events,
                );
            }
            EventCallback::SpawnEnemy => {
                let EventContext::Spawn { archetype } = event.context else {
                    log::warn!("spawn event fired without an archetype context");
                    return;
                };
                if let Err(err) = world_setup::spawn_enemy(
                    &mut self.world,
                    &mut self.rng,
                    &self.viewport,
                    &mut self.spawn_seq,
                    archetype,
                ) {
                    log::warn!("enemy spawn rejected: {err}");
                }
            }
        }
    }
}
