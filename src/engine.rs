//! The instruction-execution engine: a pure fold of a program over a pose.
//!
//! The entry point is [`simulate`]. Given a starting [`Pose`], the
//! [`RoomBounds`], and an ordered instruction slice, it walks every
//! instruction in order and returns a [`SimulationRun`] holding the final
//! pose plus the full trace of intermediate poses for replay.
//!
//! # Clamp policy
//!
//! An `Advance` whose tentative cell falls outside `[0, width) x [0, height)`
//! is absorbed: the position is left unchanged and execution continues with
//! the next instruction. Hitting a wall is never an error and never wraps.

use crate::pose::{Orientation, Pose, RoomBounds};
use crate::program::Instruction;
use serde::{Deserialize, Serialize};

/// The outcome of one complete run: final pose plus the per-instruction trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// The pose after the last instruction. Equals the starting pose when the
    /// program was empty.
    pub final_pose: Pose,

    /// One pose per executed instruction, in execution order. Empty for an
    /// empty program.
    pub trace: Vec<Pose>,
}

impl SimulationRun {
    /// Projects the run into the display form the UI presents on completion:
    /// 1-indexed position and the orientation label.
    pub fn report(&self) -> ExecutionResult {
        ExecutionResult {
            x: self.final_pose.position.x + 1,
            y: self.final_pose.position.y + 1,
            orientation: self.final_pose.orientation(),
        }
    }
}

/// Final result of a completed (non-cancelled) run, in display form.
///
/// Positions are 1-indexed here and only here; everything else in the crate
/// speaks zero-indexed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// 1-indexed column of the final position.
    pub x: i32,

    /// 1-indexed row of the final position.
    pub y: i32,

    /// The cardinal direction faced at the end of the run.
    pub orientation: Orientation,
}

/// Executes `instructions` in order starting from `start`.
///
/// Deterministic and total: identical inputs always yield the identical run,
/// no instruction sequence can fail, and an empty sequence returns `start`
/// unchanged with an empty trace. Rotations accumulate raw degrees on the
/// pose angle; `Advance` steps one cell along [`Orientation::heading`] and is
/// absorbed when the step would leave the room.
pub fn simulate(start: Pose, bounds: RoomBounds, instructions: &[Instruction]) -> SimulationRun {
    let mut current = start;
    let mut trace = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        match instruction {
            Instruction::RotateLeft => current.angle -= 90,
            Instruction::RotateRight => current.angle += 90,
            Instruction::Advance => {
                let tentative = current.position + current.orientation().heading();
                if bounds.contains(tentative) {
                    current.position = tentative;
                }
            }
        }
        trace.push(current);
    }

    SimulationRun {
        final_pose: current,
        trace,
    }
}
