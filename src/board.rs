//! Game board state: ship placements, shot history and per-ship health.

use crate::bitgrid::BitGrid;
use crate::common::{AttackResult, BoardError, Point, ShipId};
use crate::config::{GameConfig, EMPTY_GLYPH, HIT_GLYPH, MISS_GLYPH};
use crate::ship::{Orientation, ShipPlacement};
use core::fmt;
use rand::Rng;
use std::collections::BTreeMap;

type Mask = BitGrid<u128>;

/// Board owned by one side of a match.
///
/// Tracks occupancy as one [`ShipPlacement`] per catalog ship plus an
/// aggregate mask, shot state as hit/miss masks, and remaining health per
/// ship. A ship is removed from the health map the moment its last segment
/// is hit; [`Board::all_destroyed`] is simply that map being empty.
pub struct Board<'g> {
    game: &'g GameConfig,
    ships: Vec<Option<ShipPlacement>>,
    ships_in_play: BTreeMap<ShipId, usize>,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
    blocked: Mask,
}

impl<'g> Board<'g> {
    /// Create an empty board for `game` (no ships placed).
    pub fn new(game: &'g GameConfig) -> Self {
        let (rows, cols) = (game.rows(), game.cols());
        Board {
            game,
            ships: vec![None; game.n_ships()],
            ships_in_play: BTreeMap::new(),
            ship_map: Mask::new(rows, cols),
            hits: Mask::new(rows, cols),
            misses: Mask::new(rows, cols),
            blocked: Mask::new(rows, cols),
        }
    }

    /// The configuration this board was created for.
    pub fn game(&self) -> &'g GameConfig {
        self.game
    }

    /// Aggregate occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Mask of hit cells.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// Mask of missed cells.
    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// Mask of temporarily blocked cells.
    pub fn blocked(&self) -> Mask {
        self.blocked
    }

    /// Remaining health of `id`, or `None` once destroyed or never placed.
    pub fn health(&self, id: ShipId) -> Option<usize> {
        self.ships_in_play.get(&id).copied()
    }

    /// Recorded placement of `id`, if it is on the board.
    pub fn placement(&self, id: ShipId) -> Option<&ShipPlacement> {
        self.ships.get(id).and_then(|s| s.as_ref())
    }

    /// Number of ships currently on the board (destroyed ships included).
    pub fn placed_count(&self) -> usize {
        self.ships.iter().flatten().count()
    }

    /// True when every catalog ship has been placed on this board.
    pub fn all_placed(&self) -> bool {
        self.placed_count() == self.game.n_ships()
    }

    /// True when no placed ship has a live segment left. Note that a board
    /// with no ships ever placed is vacuously all-destroyed; the match
    /// orchestrator refuses to start play in that state.
    pub fn all_destroyed(&self) -> bool {
        self.ships_in_play.is_empty()
    }

    /// Reset the board to its freshly-created state.
    pub fn clear(&mut self) {
        self.ships.iter_mut().for_each(|s| *s = None);
        self.ships_in_play.clear();
        self.ship_map.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
        self.blocked.clear_all();
    }

    /// Place catalog ship `id` with its anchor (topmost or leftmost cell) at
    /// `anchor`. Fails without mutation if the id is out of range, the ship
    /// is already placed, the anchor is off the board, the extent leaves the
    /// grid, or any extent cell is occupied or blocked.
    pub fn place_ship(
        &mut self,
        anchor: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = self.game.ship(id).ok_or(BoardError::InvalidIndex)?;
        if self.ships[id].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let placement =
            ShipPlacement::new(def, anchor, orientation, self.game.rows(), self.game.cols())?;
        let obstacles = self.ship_map | self.blocked;
        if !(obstacles & placement.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= placement.mask();
        self.ships_in_play.insert(id, def.length());
        self.ships[id] = Some(placement);
        Ok(())
    }

    /// Remove ship `id`, verifying that the given anchor and orientation
    /// describe exactly the cells it occupies. Used by the placement search
    /// to undo a failed branch.
    pub fn unplace_ship(
        &mut self,
        anchor: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = self.game.ship(id).ok_or(BoardError::InvalidIndex)?;
        let placed = match &self.ships[id] {
            Some(p) => p,
            None => return Err(BoardError::ShipNotPlaced),
        };
        let candidate =
            ShipPlacement::new(def, anchor, orientation, self.game.rows(), self.game.cols())?;
        if candidate.mask() != placed.mask() {
            return Err(BoardError::ShipMismatch);
        }
        self.ship_map &= !candidate.mask();
        self.ships[id] = None;
        self.ships_in_play.remove(&id);
        Ok(())
    }

    /// Resolve an attack at `p`.
    ///
    /// `Err` (out of bounds, repeated shot) leaves the board untouched and
    /// credits no ship. A hit decrements the ship's health; the ship leaves
    /// play exactly when its health reaches zero, reported as `Sunk`.
    pub fn attack(&mut self, p: Point) -> Result<AttackResult, BoardError> {
        if !self.game.contains(p) {
            return Err(BoardError::OutOfBounds);
        }
        let (r, c) = (p.r as usize, p.c as usize);
        if self.hits.get(r, c)? || self.misses.get(r, c)? {
            return Err(BoardError::AlreadyAttacked);
        }
        match self.ships.iter().flatten().find(|s| s.contains(r, c)) {
            Some(s) => {
                let id = s.id();
                self.hits.set(r, c)?;
                let remaining = match self.ships_in_play.get_mut(&id) {
                    Some(h) => {
                        *h -= 1;
                        *h
                    }
                    None => 0,
                };
                if remaining == 0 {
                    self.ships_in_play.remove(&id);
                    Ok(AttackResult::Sunk(id))
                } else {
                    Ok(AttackResult::Hit(id))
                }
            }
            None => {
                self.misses.set(r, c)?;
                Ok(AttackResult::Miss)
            }
        }
    }

    /// Temporarily block roughly half of the empty cells. Placed ships and
    /// shot cells are never touched. Cleared by [`Board::unblock`].
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for r in 0..self.game.rows() {
            for c in 0..self.game.cols() {
                if self.ship_map.get(r, c)?
                    || self.hits.get(r, c)?
                    || self.misses.get(r, c)?
                {
                    continue;
                }
                if rng.random::<bool>() {
                    self.blocked.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    /// Clear all temporary blocking.
    pub fn unblock(&mut self) {
        self.blocked.clear_all();
    }

    /// Renderable snapshot of the grid. With `shots_only` set, un-hit ship
    /// segments are masked (the view a player gets of the opponent board).
    pub fn view(&self, shots_only: bool) -> BoardView<'_, 'g> {
        BoardView {
            board: self,
            shots_only,
        }
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  in_play: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships_in_play
        )
    }
}

/// Display adapter produced by [`Board::view`].
pub struct BoardView<'a, 'g> {
    board: &'a Board<'g>,
    shots_only: bool,
}

impl fmt::Display for BoardView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.board;
        write!(f, "  ")?;
        for c in 0..b.game.cols() {
            write!(f, "{}", c)?;
        }
        writeln!(f)?;
        for r in 0..b.game.rows() {
            write!(f, "{} ", r)?;
            for c in 0..b.game.cols() {
                let glyph = if b.hits.get(r, c).unwrap_or(false) {
                    HIT_GLYPH
                } else if b.misses.get(r, c).unwrap_or(false) {
                    MISS_GLYPH
                } else {
                    match b.ships.iter().flatten().find(|s| s.contains(r, c)) {
                        Some(s) if !self.shots_only => b
                            .game
                            .ship(s.id())
                            .map(|d| d.symbol())
                            .unwrap_or(EMPTY_GLYPH),
                        _ => EMPTY_GLYPH,
                    }
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
