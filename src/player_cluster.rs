//! Deterministic baseline player: clustered placement, sweeping attack.

use crate::board::Board;
use crate::common::{Point, ShipId};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;
use crate::BoardError;
use rand::rngs::SmallRng;

/// Places every ship horizontally in a cluster down the left edge, then
/// sweeps the board cell by cell from the bottom-right corner leftward and
/// upward. No feedback is used at all.
pub struct ClusterPlayer<'g> {
    name: String,
    game: &'g GameConfig,
    last_attacked: Point,
}

impl<'g> ClusterPlayer<'g> {
    pub fn new(name: &str, game: &'g GameConfig) -> Self {
        ClusterPlayer {
            name: name.to_string(),
            game,
            last_attacked: Point::new(0, 0),
        }
    }
}

impl Player for ClusterPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        for id in 0..self.game.n_ships() {
            board.place_ship(Point::new(id as i32, 0), id as ShipId, Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Point {
        if self.last_attacked.c > 0 {
            self.last_attacked.c -= 1;
        } else {
            self.last_attacked.c = self.game.cols() as i32 - 1;
            if self.last_attacked.r > 0 {
                self.last_attacked.r -= 1;
            } else {
                self.last_attacked.r = self.game.rows() as i32 - 1;
            }
        }
        self.last_attacked
    }
}
