//! VOIDSTRIKE host shell.
//!
//! Wires the simulation engine to its collaborators: the fixed-interval
//! game-loop thread, the input-source capability, and the shared snapshot
//! slot a renderer reads from.

pub mod game_loop;
pub mod input;
pub mod state;

pub use voidstrike_core as core;
