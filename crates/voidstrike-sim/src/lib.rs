//! Simulation engine for VOIDSTRIKE.
//!
//! Owns the hecs ECS world, runs systems in fixed order at each tick,
//! drives scenario scripting through the event scheduler, and produces
//! `GameSnapshot`s for the host shell.

pub mod engine;
pub mod scenario;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use voidstrike_core as core;
