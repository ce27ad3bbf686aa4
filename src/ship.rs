//! Ship orientation and placement geometry.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Point, ShipId};
use crate::config::ShipDef;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

type Mask = BitGrid<u128>;

/// A ship committed to a board: anchor, orientation and occupancy mask.
///
/// The anchor is the leftmost (horizontal) or topmost (vertical) cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipPlacement {
    id: ShipId,
    length: usize,
    anchor: Point,
    orientation: Orientation,
    mask: Mask,
}

impl ShipPlacement {
    /// Build the placement of `def` at `anchor`, validating that the whole
    /// extent lies within a `rows` x `cols` grid.
    pub fn new(
        def: &ShipDef,
        anchor: Point,
        orientation: Orientation,
        rows: usize,
        cols: usize,
    ) -> Result<Self, BoardError> {
        if anchor.r < 0
            || anchor.r as usize >= rows
            || anchor.c < 0
            || anchor.c as usize >= cols
        {
            return Err(BoardError::OutOfBounds);
        }
        let len = def.length();
        match orientation {
            Orientation::Horizontal => {
                if anchor.c as usize + len > cols {
                    return Err(BoardError::ShipOutOfBounds);
                }
            }
            Orientation::Vertical => {
                if anchor.r as usize + len > rows {
                    return Err(BoardError::ShipOutOfBounds);
                }
            }
        }
        let mut mask = Mask::new(rows, cols);
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (anchor.r as usize, anchor.c as usize + i),
                Orientation::Vertical => (anchor.r as usize + i, anchor.c as usize),
            };
            mask.set(r, c)?;
        }
        Ok(ShipPlacement {
            id: def.id(),
            length: len,
            anchor,
            orientation,
            mask,
        })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on its board.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// True when the ship occupies `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }
}
