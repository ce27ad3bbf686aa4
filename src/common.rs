//! Common types: grid points, attack outcomes and board errors.

use crate::bitgrid::BitGridError;
use core::fmt;

/// Identifier of a ship in the catalog. Ids are dense and 0-based, assigned
/// in registration order.
pub type ShipId = usize;

/// A grid coordinate. Signed so that out-of-range probes (e.g. a row of -1)
/// are representable; bounds are enforced by the board and the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub r: i32,
    pub c: i32,
}

impl Point {
    pub const fn new(r: i32, c: i32) -> Self {
        Point { r, c }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Attack missed all ships.
    Miss,
    /// Attack hit an undestroyed segment of the given ship.
    Hit(ShipId),
    /// Attack hit the last live segment of the given ship.
    Sunk(ShipId),
}

impl AttackResult {
    /// Ship touched by the attack, if any.
    pub fn ship_id(&self) -> Option<ShipId> {
        match self {
            AttackResult::Miss => None,
            AttackResult::Hit(id) | AttackResult::Sunk(id) => Some(*id),
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackResult::Sunk(_))
    }
}

/// Errors returned by board operations. Every error leaves the board
/// unchanged.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit grid error (invalid size or index).
    BitGridError(BitGridError),
    /// Ship id is outside the catalog.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Attempted to remove a ship that is not on the board.
    ShipNotPlaced,
    /// Anchor or attack point lies outside the grid.
    OutOfBounds,
    /// The ship's extent from the anchor leaves the grid.
    ShipOutOfBounds,
    /// Placement overlaps another ship or a blocked cell.
    ShipOverlaps,
    /// Removal extent does not match the ship's recorded placement.
    ShipMismatch,
    /// This point was already attacked.
    AlreadyAttacked,
    /// Random placement gave up after its retry budget.
    UnableToPlaceShip,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::BitGridError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitGridError(e) => write!(f, "bit grid error: {}", e),
            BoardError::InvalidIndex => write!(f, "ship id is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            BoardError::ShipNotPlaced => write!(f, "ship is not placed on the board"),
            BoardError::OutOfBounds => write!(f, "point is outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps an occupied cell"),
            BoardError::ShipMismatch => {
                write!(f, "removal extent does not match the placed ship")
            }
            BoardError::AlreadyAttacked => write!(f, "point was already attacked"),
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}
