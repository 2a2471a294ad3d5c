//! Simulation constants and tuning parameters.
//!
//! Linear speeds are pixels per second (integrated with `DT` each tick);
//! angular steps are degrees per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Convert a millisecond duration to whole ticks (rounding down, min 0).
pub const fn ms_to_ticks(ms: u64) -> u64 {
    ms * TICK_RATE as u64 / 1000
}

// --- Player ---

/// Player ship sprite size (pixels, square).
pub const PLAYER_SIZE: f64 = 32.0;

/// Player thrust speed (px/s).
pub const PLAYER_SPEED: f64 = 300.0;

/// Player rotation per tick while a rotate key is held (degrees).
pub const PLAYER_ROTATION_STEP_DEG: f64 = 3.0;

/// Hit points a fresh player ship spawns with.
pub const PLAYER_START_HIT_POINTS: i32 = 32;

/// Distance from a viewport edge inside which player motion toward that
/// edge is diverted into background scroll instead.
pub const PLAYER_WALL_MARGIN: f64 = 100.0;

/// Player primary cannon rounds.
pub const PLAYER_PRIMARY_ROUNDS: u32 = 500;

/// Player primary cannon fire delay (ms).
pub const PLAYER_PRIMARY_DELAY_MS: u64 = 150;

// --- Enemies ---

/// Enemy sprite size (pixels, square).
pub const ENEMY_SIZE: f64 = 32.0;

/// Margin beyond the viewport (plus the actor's own size) past which an
/// off-screen enemy is redirected back toward the player.
pub const VIEWPORT_ENEMY_MARGIN: f64 = 40.0;

/// Damage dealt to the player by direct enemy body contact.
pub const ENEMY_CONTACT_DAMAGE: i32 = 1;

// --- Starfield ---

/// Decorative stars seeded at scenario start.
pub const STAR_COUNT: usize = 100;

/// Star sprite size (pixels, square).
pub const STAR_SIZE: f64 = 2.0;

// --- Spawning ---

/// Off-screen spawn offset band beyond the chosen viewport edge (pixels).
pub const OFFSCREEN_SPAWN_MIN: f64 = 100.0;
pub const OFFSCREEN_SPAWN_MAX: f64 = 500.0;

// --- Guided projectiles ---

/// Maximum heading correction per tick for seeking projectiles (degrees).
pub const GUIDED_TURN_STEP_DEG: f64 = 3.0;

// --- Scenario scripting ---

/// Delay before the player is revealed after scenario start (ms).
pub const REVEAL_PLAYER_DELAY_MS: u64 = 500;

/// Recurring wave-check cadence (ms).
pub const WAVE_CHECK_INTERVAL_MS: u64 = 5000;

/// Per-enemy spawn jitter inside a wave window (ms).
pub const WAVE_SPAWN_JITTER_MS: u64 = 800;

/// Default scenario length in waves.
pub const DEFAULT_TOTAL_WAVES: u32 = 5;

/// Hit points granted to the player when a scenario starts.
pub const SCENARIO_HIT_POINT_BONUS: i32 = 100;

/// Shield points granted to the player when a scenario starts.
pub const SCENARIO_SHIELD_BONUS: i32 = 10;
