//! Scenario state machine — scripted wave pacing over the event scheduler.
//!
//! `execute` hides the player, schedules the reveal and the recurring wave
//! check. Each wave-check firing with the field clear either schedules the
//! next wave's spawn events at jittered delays or, after the final wave,
//! cancels itself and completes the scenario.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{EnemyShip, Lifecycle};
use voidstrike_core::constants::*;
use voidstrike_core::enums::{EnemyArchetype, ScenarioState};
use voidstrike_core::events::{AudioEvent, SoundId};

use crate::scheduler::{EventCallback, EventContext, EventId, EventMode, EventScheduler};
use crate::world_setup;

/// Running score credited as enemies are destroyed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u64,
    pub enemies_destroyed: u32,
}

/// A scripted play session: `total_waves` waves of enemies.
#[derive(Debug)]
pub struct Scenario {
    pub state: ScenarioState,
    pub current_wave: u32,
    pub total_waves: u32,
    wave_check_event: Option<EventId>,
}

impl Scenario {
    pub fn new(total_waves: u32) -> Self {
        Self {
            state: ScenarioState::Idle,
            current_wave: 0,
            total_waves,
            wave_check_event: None,
        }
    }

    /// Idle → Running: hide the player, grant the scenario bonus, schedule
    /// the reveal and the recurring wave check.
    pub fn execute(&mut self, world: &mut World, scheduler: &mut EventScheduler, now: u64) {
        self.state = ScenarioState::Running;
        self.current_wave = 0;

        world_setup::hide_player(world);
        world_setup::grant_player_bonus(world, SCENARIO_HIT_POINT_BONUS, SCENARIO_SHIELD_BONUS);

        scheduler.schedule(
            EventMode::OneShot,
            ms_to_ticks(REVEAL_PLAYER_DELAY_MS),
            EventCallback::RevealPlayer,
            EventContext::Empty,
            now,
        );
        self.wave_check_event = Some(scheduler.schedule(
            EventMode::Recurring,
            ms_to_ticks(WAVE_CHECK_INTERVAL_MS),
            EventCallback::WaveCheck,
            EventContext::Empty,
            now,
        ));

        log::debug!("scenario started: {} waves", self.total_waves);
    }

    /// Recurring wave-check callback. Only acts while the field is clear of
    /// live enemies: completes after the final wave, otherwise schedules
    /// the next wave's spawns and advances the wave counter.
    pub fn wave_check(
        &mut self,
        world: &mut World,
        scheduler: &mut EventScheduler,
        rng: &mut ChaCha8Rng,
        now: u64,
        audio_events: &mut Vec<AudioEvent>,
    ) {
        if live_enemy_count(world) > 0 {
            return;
        }

        if self.current_wave == self.total_waves {
            if let Some(id) = self.wave_check_event.take() {
                scheduler.cancel(id);
            }
            self.state = ScenarioState::Complete;
            log::debug!("scenario complete after wave {}", self.current_wave);
            return;
        }

        let enemy_count = rng.gen_range(self.current_wave + 1..self.current_wave + 5);
        for _ in 0..enemy_count {
            let archetype = match rng.gen_range(0..3u8) {
                0 => EnemyArchetype::Raider,
                1 => EnemyArchetype::Brawler,
                _ => EnemyArchetype::Lancer,
            };
            let delay = rng.gen_range(0..=ms_to_ticks(WAVE_SPAWN_JITTER_MS));
            scheduler.schedule(
                EventMode::OneShot,
                delay,
                EventCallback::SpawnEnemy,
                EventContext::Spawn { archetype },
                now,
            );
        }

        audio_events.push(AudioEvent::Play {
            sound: SoundId::WaveChime,
        });
        self.current_wave += 1;
        log::debug!(
            "wave {}/{} inbound: {} enemies",
            self.current_wave,
            self.total_waves,
            enemy_count
        );
    }
}

/// Enemies that are alive and not already marked for deletion.
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<(&EnemyShip, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, lifecycle))| !lifecycle.ready_for_deletion)
        .count()
}
