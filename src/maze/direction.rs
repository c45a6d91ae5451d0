use std::fmt;

use super::Coord;

/// A move from a cell toward one of its neighbors.
///
/// Orthogonal codes step to an edge-adjacent cell. Diagonal codes come in pairs
/// that reach the same diagonal cell through a different hinge: `TopRight` goes
/// up first and then right, `RightTop` goes right first and then up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    RightTop,
    Right,
    RightBottom,
    BottomRight,
    Bottom,
    BottomLeft,
    LeftBottom,
    Left,
    LeftTop,
}

impl Direction {
    /// Every direction in canonical enumeration order.
    pub const ALL: [Direction; 12] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::RightTop,
        Direction::Right,
        Direction::RightBottom,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::LeftBottom,
        Direction::Left,
        Direction::LeftTop,
    ];

    pub fn is_diagonal(self) -> bool {
        !matches!(
            self,
            Direction::Top | Direction::Right | Direction::Bottom | Direction::Left
        )
    }

    /// Offset of the first, orthogonal step. For diagonal codes this lands on the hinge cell.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::TopLeft | Direction::Top | Direction::TopRight => (0, -1),
            Direction::RightTop | Direction::Right | Direction::RightBottom => (1, 0),
            Direction::BottomRight | Direction::Bottom | Direction::BottomLeft => (0, 1),
            Direction::LeftBottom | Direction::Left | Direction::LeftTop => (-1, 0),
        }
    }

    /// Offset of the diagonal target, if this is a diagonal code.
    pub fn diagonal(self) -> Option<(i8, i8)> {
        match self {
            Direction::TopLeft | Direction::LeftTop => Some((-1, -1)),
            Direction::TopRight | Direction::RightTop => Some((1, -1)),
            Direction::BottomRight | Direction::RightBottom => Some((1, 1)),
            Direction::BottomLeft | Direction::LeftBottom => Some((-1, 1)),
            Direction::Top | Direction::Right | Direction::Bottom | Direction::Left => None,
        }
    }

    /// Name used in traces, matching the symbolic code.
    pub fn name(self) -> &'static str {
        match self {
            Direction::TopLeft => "TOP_LEFT",
            Direction::Top => "TOP",
            Direction::TopRight => "TOP_RIGHT",
            Direction::RightTop => "RIGHT_TOP",
            Direction::Right => "RIGHT",
            Direction::RightBottom => "RIGHT_BOTTOM",
            Direction::BottomRight => "BOTTOM_RIGHT",
            Direction::Bottom => "BOTTOM",
            Direction::BottomLeft => "BOTTOM_LEFT",
            Direction::LeftBottom => "LEFT_BOTTOM",
            Direction::Left => "LEFT",
            Direction::LeftTop => "LEFT_TOP",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Applies `offset` to `coord`, returning `None` if the result leaves a `size`x`size` grid.
pub fn offset_coord(coord: Coord, offset: (i8, i8), size: u8) -> Option<Coord> {
    let x = coord.0.checked_add_signed(offset.0)?;
    let y = coord.1.checked_add_signed(offset.1)?;
    (x < size && y < size).then_some((x, y))
}
