//! ECS systems that operate on the simulation world, one phase each.
//!
//! Systems are free functions over `&mut World`; they never retain state
//! across ticks and never despawn mid-phase — deletions are marked and
//! deferred to `cleanup` at tick end.

pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod movement;
pub mod player_control;
pub mod snapshot;
pub mod weapons;
