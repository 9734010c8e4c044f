// tests/simulation.rs
use glam::IVec2;
use gridsweeper::{
    Instruction, InstructionProgram, Orientation, Pose, RoomBounds, simulate,
};

fn program(instructions: &[Instruction]) -> InstructionProgram {
    let mut program = InstructionProgram::default();
    for &instruction in instructions {
        assert!(program.push(instruction), "program should not be full");
    }
    program
}

#[test]
fn guided_walk_through_a_4x3_room() {
    // Start at the south-west corner facing North.
    // 1. Advance to (0, 1).
    // 2. Rotate right to face East (angle 90).
    // 3. Advance twice to (2, 1).
    let program = program(&[
        Instruction::Advance,
        Instruction::RotateRight,
        Instruction::Advance,
        Instruction::Advance,
    ]);

    let run = simulate(
        Pose::new(0, 0, 0),
        RoomBounds::new(4, 3),
        program.as_slice(),
    );

    assert_eq!(
        run.trace,
        vec![
            Pose::new(0, 1, 0),
            Pose::new(0, 1, 90),
            Pose::new(1, 1, 90),
            Pose::new(2, 1, 90),
        ]
    );
    assert_eq!(run.final_pose, Pose::new(2, 1, 90));

    // Display projection is 1-indexed with the orientation label.
    let result = run.report();
    assert_eq!((result.x, result.y), (3, 2));
    assert_eq!(result.orientation, Orientation::East);
}

#[test]
fn wall_hits_are_absorbed_on_every_side() {
    // March East across a 2x2 room: the second Advance hits the east wall and
    // the pose stays put, then another right rotation and two more advances
    // pin the agent against the south wall.
    let program = program(&[
        Instruction::RotateRight,
        Instruction::Advance,
        Instruction::Advance,
        Instruction::RotateRight,
        Instruction::Advance,
        Instruction::Advance,
    ]);

    let run = simulate(
        Pose::new(0, 1, 0),
        RoomBounds::new(2, 2),
        program.as_slice(),
    );

    assert_eq!(
        run.trace,
        vec![
            Pose::new(0, 1, 90),
            Pose::new(1, 1, 90),
            Pose::new(1, 1, 90),
            Pose::new(1, 1, 180),
            Pose::new(1, 0, 180),
            Pose::new(1, 0, 180),
        ]
    );
    assert_eq!(run.final_pose.position, IVec2::new(1, 0));
}

#[test]
fn rotations_never_touch_position() {
    let program = program(&[
        Instruction::RotateLeft,
        Instruction::RotateLeft,
        Instruction::RotateLeft,
        Instruction::RotateLeft,
        Instruction::RotateRight,
    ]);

    let run = simulate(
        Pose::new(2, 2, 0),
        RoomBounds::new(5, 5),
        program.as_slice(),
    );

    assert_eq!(run.final_pose.position, IVec2::new(2, 2));
    // Four lefts and one right: -360 + 90.
    assert_eq!(run.final_pose.angle, -270);
    assert_eq!(run.final_pose.orientation(), Orientation::East);
}

#[test]
fn edited_program_runs_exactly_as_it_stands() {
    let mut program = program(&[
        Instruction::Advance,
        Instruction::Advance,
        Instruction::RotateRight,
    ]);
    // The UI removes the trailing rotation before executing.
    assert_eq!(program.pop_last(), Some(Instruction::RotateRight));

    let run = simulate(
        Pose::new(0, 0, 0),
        RoomBounds::new(3, 3),
        program.as_slice(),
    );

    assert_eq!(run.final_pose, Pose::new(0, 2, 0));
    assert_eq!(run.trace.len(), 2);
}
