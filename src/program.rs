//! The instruction vocabulary and the bounded program buffer the UI edits.

use serde::{Deserialize, Serialize};

/// Default maximum number of instructions a program holds.
pub const DEFAULT_MAX_INSTRUCTIONS: usize = 30;

/// A single agent command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Step one cell in the direction currently faced.
    Advance,
    /// Subtract 90 degrees from the pose angle.
    RotateLeft,
    /// Add 90 degrees to the pose angle.
    RotateRight,
}

/// An ordered, bounded sequence of instructions.
///
/// This is the queue the UI edits between runs: appends past capacity and
/// removals from an empty buffer are absorbed as no-ops rather than errors,
/// so press-and-hold gestures can hammer both ends safely. The engine only
/// ever reads it (via [`as_slice`](Self::as_slice)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionProgram {
    instructions: Vec<Instruction>,
    capacity: usize,
}

impl Default for InstructionProgram {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_INSTRUCTIONS)
    }
}

impl InstructionProgram {
    /// Creates an empty program that holds at most `capacity` instructions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an instruction. Returns `false` (and leaves the program
    /// untouched) when the buffer is already at capacity.
    pub fn push(&mut self, instruction: Instruction) -> bool {
        if self.instructions.len() == self.capacity {
            return false;
        }
        self.instructions.push(instruction);
        true
    }

    /// Removes and returns the most recently appended instruction, or `None`
    /// if the program is empty.
    pub fn pop_last(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.instructions.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The instructions in execution order.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for InstructionProgram {
    /// Wraps an existing sequence; capacity becomes the larger of the
    /// sequence length and [`DEFAULT_MAX_INSTRUCTIONS`].
    fn from(instructions: Vec<Instruction>) -> Self {
        let capacity = instructions.len().max(DEFAULT_MAX_INSTRUCTIONS);
        Self {
            instructions,
            capacity,
        }
    }
}
