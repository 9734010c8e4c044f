//! # gridsweeper
//!
//! Deterministic instruction-execution core for a directional robotic cleaner
//! on a bounded rectangular grid.
//!
//! It decouples *deciding* what the agent does (a pure fold of instructions
//! over a [`Pose`], with wall hits absorbed by the clamp policy) from
//! *presenting* it (a cadence-based [`PlaybackDriver`] that replays the trace
//! one pose per tick). The embedding UI owns bounds, the starting pose, and
//! the bounded [`InstructionProgram`]; the core owns everything the agent
//! actually does with them.

pub mod engine;
pub mod playback;
pub mod pose;
pub mod program;

pub use engine::*;
pub use playback::*;
pub use pose::*;
pub use program::*;
