//! Input collaborator boundary.
//!
//! The engine never talks to a keyboard: the game loop polls an
//! `InputSource` once per tick for each logical action and hands the
//! resulting `InputState` to the engine.

use voidstrike_core::commands::InputState;
use voidstrike_core::enums::LogicalKey;

/// Capability exposed by the input collaborator.
pub trait InputSource: Send {
    fn is_pressed(&self, key: LogicalKey) -> bool;

    /// Called once per tick after sampling. Scripted sources advance here.
    fn advance(&mut self) {}
}

/// Poll every logical key once and advance the source.
pub fn sample(source: &mut dyn InputSource) -> InputState {
    let state = InputState {
        forward: source.is_pressed(LogicalKey::Forward),
        reverse: source.is_pressed(LogicalKey::Reverse),
        rotate_clockwise: source.is_pressed(LogicalKey::RotateClockwise),
        rotate_counter_clockwise: source.is_pressed(LogicalKey::RotateCounterClockwise),
        fire: source.is_pressed(LogicalKey::Fire),
        escape: source.is_pressed(LogicalKey::Escape),
    };
    source.advance();
    state
}

/// Input source with nothing pressed, ever.
#[derive(Debug, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn is_pressed(&self, _key: LogicalKey) -> bool {
        false
    }
}

/// Pre-scripted input frames, one per tick. Holds the last frame once the
/// script runs out. Used by the headless demo and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<InputState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputState>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Append `count` ticks of the same frame.
    pub fn hold(mut self, frame: InputState, count: usize) -> Self {
        self.frames.extend(std::iter::repeat(frame).take(count));
        self
    }

    fn current(&self) -> InputState {
        self.frames
            .get(self.cursor)
            .or_else(|| self.frames.last())
            .copied()
            .unwrap_or_default()
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, key: LogicalKey) -> bool {
        self.current().is_pressed(key)
    }

    fn advance(&mut self) {
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
    }
}
