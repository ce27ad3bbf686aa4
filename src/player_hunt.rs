//! Player with random placement and frontier-stack targeting.

use crate::bitgrid::BitGrid;
use crate::board::Board;
use crate::common::{Point, ShipId};
use crate::config::GameConfig;
use crate::player::{all_points, remove_point, Player, TargetState};
use crate::ship::Orientation;
use crate::BoardError;
use rand::rngs::SmallRng;
use rand::Rng;

type Mask = BitGrid<u128>;

/// Random anchor draws per ship before placement gives up.
const PLACE_ATTEMPTS: usize = 100;

/// Scatters ships at random anchors (horizontal first, vertical as the
/// fallback). Attacks randomly until something is hit, then drains a stack
/// of frontier cells seeded with the orthogonal neighbors of every hit.
/// Each frontier cell is queued at most once.
pub struct HuntPlayer<'g> {
    name: String,
    game: &'g GameConfig,
    state: TargetState,
    points: Vec<Point>,
    stack: Vec<Point>,
    hits: Mask,
    misses: Mask,
    queued: Mask,
}

impl<'g> HuntPlayer<'g> {
    pub fn new(name: &str, game: &'g GameConfig) -> Self {
        HuntPlayer {
            name: name.to_string(),
            game,
            state: TargetState::Search,
            points: all_points(game),
            stack: Vec::new(),
            hits: Mask::new(game.rows(), game.cols()),
            misses: Mask::new(game.rows(), game.cols()),
            queued: Mask::new(game.rows(), game.cols()),
        }
    }

    fn marked(&self, p: Point) -> bool {
        let (r, c) = (p.r as usize, p.c as usize);
        self.hits.get(r, c).unwrap_or(false)
            || self.misses.get(r, c).unwrap_or(false)
            || self.queued.get(r, c).unwrap_or(false)
    }

    /// Queue the unmarked orthogonal neighbors of a hit.
    fn push_frontier(&mut self, p: Point) {
        let neighbors = [
            Point::new(p.r - 1, p.c),
            Point::new(p.r + 1, p.c),
            Point::new(p.r, p.c - 1),
            Point::new(p.r, p.c + 1),
        ];
        for q in neighbors {
            if self.game.contains(q) && !self.marked(q) {
                let _ = self.queued.set(q.r as usize, q.c as usize);
                self.stack.push(q);
            }
        }
    }

    fn random_search(&mut self, rng: &mut SmallRng) -> Point {
        let i = rng.random_range(0..self.points.len());
        self.points.swap_remove(i)
    }
}

impl Player for HuntPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        for id in 0..self.game.n_ships() {
            let mut placed = false;
            for _ in 0..PLACE_ATTEMPTS {
                if self.points.is_empty() {
                    break;
                }
                let i = rng.random_range(0..self.points.len());
                let anchor = self.points[i];
                if board
                    .place_ship(anchor, id as ShipId, Orientation::Horizontal)
                    .is_ok()
                    || board
                        .place_ship(anchor, id as ShipId, Orientation::Vertical)
                        .is_ok()
                {
                    self.points.swap_remove(i);
                    placed = true;
                    break;
                }
            }
            if !placed {
                self.points = all_points(self.game);
                return Err(BoardError::UnableToPlaceShip);
            }
        }
        // Anchors were consumed from the pool; rebuild it for the attack
        // phase.
        self.points = all_points(self.game);
        Ok(())
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        if self.points.is_empty() {
            log::error!("{}: no unshot points left to choose from", self.name);
            return Point::new(0, 0);
        }
        match self.state {
            TargetState::Search => self.random_search(rng),
            TargetState::Exploit => match self.stack.pop() {
                Some(p) => {
                    remove_point(p, &mut self.points);
                    p
                }
                None => {
                    log::error!("{}: frontier stack is empty", self.name);
                    self.state = TargetState::Search;
                    self.random_search(rng)
                }
            },
        }
    }

    fn record_attack_result(
        &mut self,
        p: Point,
        valid: bool,
        hit: bool,
        _destroyed: bool,
        _ship: Option<ShipId>,
    ) {
        if !valid {
            log::error!("{}: engine reported an invalid shot at {}", self.name, p);
        }
        if self.game.contains(p) {
            let (r, c) = (p.r as usize, p.c as usize);
            if hit {
                let _ = self.hits.set(r, c);
                self.push_frontier(p);
            } else {
                let _ = self.misses.set(r, c);
            }
        }
        match self.state {
            TargetState::Search => {
                if hit {
                    self.state = TargetState::Exploit;
                }
            }
            TargetState::Exploit => {
                if self.stack.is_empty() {
                    self.state = TargetState::Search;
                }
            }
        }
    }
}
