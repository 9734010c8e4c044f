//! Agent pose, cardinal orientation, and room bounds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four cardinal directions the agent can face.
///
/// Always derived from a raw [`Pose`] angle at the point of use; never stored
/// alongside it, so the angle stays the single source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Resolves an accumulated rotation angle (degrees, any integer) to a
    /// cardinal orientation.
    ///
    /// Total over all of `i32`: the angle is reduced with `rem_euclid(360)`
    /// and banded by quadrant, so `0 -> North`, `90 -> East`, `180 -> South`,
    /// `270 -> West`, and negatives resolve the same as their positive
    /// congruents (`-90 -> West`).
    pub fn from_angle(angle: i32) -> Self {
        match angle.rem_euclid(360) / 90 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Unit grid step for one `Advance` in this orientation.
    ///
    /// North is `+y`, East is `+x`; the grid origin sits at the south-west
    /// corner of the room.
    pub fn heading(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::South => IVec2::new(0, -1),
            Self::West => IVec2::new(-1, 0),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::East => write!(f, "East"),
            Self::South => write!(f, "South"),
            Self::West => write!(f, "West"),
        }
    }
}

/// Position and accumulated rotation of the agent.
///
/// The angle is raw degrees and is never normalized on write: rotations add
/// and subtract 90 without bound, and [`Orientation::from_angle`] reduces at
/// the point of use. This keeps rotation composition associative and avoids
/// caring about overflow anywhere in the middle of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Zero-indexed cell position inside the room.
    pub position: IVec2,

    /// Accumulated rotation in degrees. Any integer, positive or negative.
    pub angle: i32,
}

impl Pose {
    pub fn new(x: i32, y: i32, angle: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            angle,
        }
    }

    /// The cardinal direction this pose currently faces.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_angle(self.angle)
    }
}

/// Rectangular room the agent moves in. Supplied once per run, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBounds {
    /// Number of cells along x. Valid x positions are `0..width`.
    pub width: i32,

    /// Number of cells along y. Valid y positions are `0..height`.
    pub height: i32,
}

impl RoomBounds {
    /// Creates room bounds. Dimensions are floored at 1 so the room always
    /// contains at least the origin cell.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Whether `position` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, position: IVec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}
