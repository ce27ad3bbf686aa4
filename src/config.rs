//! Game configuration: board dimensions and the ship catalog.
//!
//! A [`GameConfig`] is built once by the setup layer, then shared read-only
//! by boards and players for the lifetime of a match.

use crate::common::{Point, ShipId};
use core::fmt;
use rand::Rng;

/// Maximum number of board rows.
pub const MAX_ROWS: usize = 10;
/// Maximum number of board columns.
pub const MAX_COLS: usize = 10;

/// Glyph rendered for an empty cell.
pub const EMPTY_GLYPH: char = '.';
/// Glyph rendered for a missed shot.
pub const MISS_GLYPH: char = 'o';
/// Glyph rendered for a hit ship segment.
pub const HIT_GLYPH: char = 'X';

/// A registered ship: id, length, display symbol and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipDef {
    id: ShipId,
    length: usize,
    symbol: char,
    name: String,
}

impl ShipDef {
    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors rejecting a configuration. The `Display` text is the diagnostic
/// shown to the setup layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BadRows(usize),
    BadCols(usize),
    BadLength(usize),
    /// Ship length fits neither board axis.
    DoesNotFit(usize),
    UnprintableSymbol(char),
    ReservedSymbol(char),
    DuplicateSymbol(char),
    /// Total ship cells would exceed the board cells.
    BoardTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadRows(n) => {
                write!(f, "number of rows must be >= 1 and <= {}, got {}", MAX_ROWS, n)
            }
            ConfigError::BadCols(n) => {
                write!(f, "number of columns must be >= 1 and <= {}, got {}", MAX_COLS, n)
            }
            ConfigError::BadLength(len) => {
                write!(f, "bad ship length {}; it must be >= 1", len)
            }
            ConfigError::DoesNotFit(len) => {
                write!(f, "bad ship length {}; it won't fit on the board", len)
            }
            ConfigError::UnprintableSymbol(sym) => write!(
                f,
                "unprintable character {:?} must not be used as a ship symbol",
                sym
            ),
            ConfigError::ReservedSymbol(sym) => {
                write!(f, "character {} must not be used as a ship symbol", sym)
            }
            ConfigError::DuplicateSymbol(sym) => write!(
                f,
                "ship symbol {} must not be used for more than one ship",
                sym
            ),
            ConfigError::BoardTooSmall => write!(f, "board is too small to fit all ships"),
        }
    }
}

/// Board dimensions plus the ordered ship catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    ships: Vec<ShipDef>,
}

impl GameConfig {
    /// Create a configuration with an empty catalog. Dimensions are bounded
    /// to `1..=MAX_ROWS` x `1..=MAX_COLS`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < 1 || rows > MAX_ROWS {
            return Err(ConfigError::BadRows(rows));
        }
        if cols < 1 || cols > MAX_COLS {
            return Err(ConfigError::BadCols(cols));
        }
        Ok(GameConfig {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of registered ships.
    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    /// The catalog in registration (id) order.
    pub fn ships(&self) -> &[ShipDef] {
        &self.ships
    }

    /// Look up a ship definition by id.
    pub fn ship(&self, id: ShipId) -> Option<&ShipDef> {
        self.ships.get(id)
    }

    /// Sum of all registered ship lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.ships.iter().map(|s| s.length).sum()
    }

    /// True when `p` lies on the board.
    pub fn contains(&self, p: Point) -> bool {
        p.r >= 0 && (p.r as usize) < self.rows && p.c >= 0 && (p.c as usize) < self.cols
    }

    /// Uniformly random on-board point.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.rows) as i32,
            rng.random_range(0..self.cols) as i32,
        )
    }

    /// Register a ship. On success returns the assigned id; on failure the
    /// catalog is unchanged and the error carries the diagnostic.
    pub fn add_ship(&mut self, length: usize, symbol: char, name: &str) -> Result<ShipId, ConfigError> {
        if length < 1 {
            return Err(ConfigError::BadLength(length));
        }
        if length > self.rows && length > self.cols {
            return Err(ConfigError::DoesNotFit(length));
        }
        if !symbol.is_ascii() || symbol.is_ascii_control() {
            return Err(ConfigError::UnprintableSymbol(symbol));
        }
        if symbol == EMPTY_GLYPH || symbol == MISS_GLYPH || symbol == HIT_GLYPH {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        if self.total_ship_cells() + length > self.rows * self.cols {
            return Err(ConfigError::BoardTooSmall);
        }
        let id = self.ships.len();
        self.ships.push(ShipDef {
            id,
            length,
            symbol,
            name: name.to_string(),
        });
        Ok(id)
    }

    /// Register the classic five-ship roster.
    pub fn add_standard_ships(&mut self) -> Result<(), ConfigError> {
        self.add_ship(5, 'A', "aircraft carrier")?;
        self.add_ship(4, 'B', "battleship")?;
        self.add_ship(3, 'D', "destroyer")?;
        self.add_ship(3, 'S', "submarine")?;
        self.add_ship(2, 'P', "patrol boat")?;
        Ok(())
    }
}
