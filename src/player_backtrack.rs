//! Player with masked backtracking placement and cardinal-ray targeting.

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

/// How many fresh blocking masks to try before giving up on placement.
const PLACEMENT_RETRIES: usize = 50;

/// Candidate cells extend this many steps along each cardinal ray of a hit.
const RAY_REACH: i32 = 4;

/// Packs the whole catalog with a constructive backtracking search under a
/// random half-board blocking mask, which varies the resulting layout from
/// game to game. Attacks randomly until a ship is hit, then works through
/// candidate cells along the four cardinal rays of that hit.
pub struct BacktrackPlayer<'g> {
    name: String,
    game: &'g GameConfig,
    state: TargetState,
    last_hit: Point,
    points: Vec<Point>,
    candidates: Vec<Point>,
    rebuild: bool,
    hits: Mask,
    misses: Mask,
}

impl<'g> BacktrackPlayer<'g> {
    pub fn new(name: &str, game: &'g GameConfig) -> Self {
        BacktrackPlayer {
            name: name.to_string(),
            game,
            state: TargetState::Search,
            last_hit: Point::new(0, 0),
            points: all_points(game),
            candidates: Vec::new(),
            rebuild: false,
            hits: Mask::new(game.rows(), game.cols()),
            misses: Mask::new(game.rows(), game.cols()),
        }
    }

    fn shot(&self, p: Point) -> bool {
        let (r, c) = (p.r as usize, p.c as usize);
        self.hits.get(r, c).unwrap_or(false) || self.misses.get(r, c).unwrap_or(false)
    }

    /// Rebuild the exploit candidates: every in-bounds, unattacked cell
    /// within `RAY_REACH` steps along the four cardinal rays of the hit.
    fn build_candidates(&mut self) {
        self.candidates.clear();
        let p = self.last_hit;
        for d in 1..=RAY_REACH {
            let ray = [
                Point::new(p.r - d, p.c),
                Point::new(p.r + d, p.c),
                Point::new(p.r, p.c - d),
                Point::new(p.r, p.c + d),
            ];
            for q in ray {
                if self.game.contains(q) && !self.shot(q) {
                    self.candidates.push(q);
                }
            }
        }
        self.rebuild = false;
    }

    fn random_search(&mut self, rng: &mut SmallRng) -> Point {
        let i = rng.random_range(0..self.points.len());
        self.points.swap_remove(i)
    }

    fn calculated_shot(&mut self, rng: &mut SmallRng) -> Point {
        if self.rebuild {
            self.build_candidates();
        }
        if self.candidates.is_empty() {
            log::error!("{}: exploit candidate list is empty", self.name);
            self.state = TargetState::Search;
            return self.random_search(rng);
        }
        let i = rng.random_range(0..self.candidates.len());
        let p = self.candidates.swap_remove(i);
        remove_point(p, &mut self.points);
        if self.candidates.is_empty() {
            self.state = TargetState::Search;
        }
        p
    }
}

impl Player for BacktrackPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        for _ in 0..PLACEMENT_RETRIES {
            board.block(rng)?;
            let packed = pack_catalog(board)?;
            board.unblock();
            if packed {
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        if self.points.is_empty() {
            log::error!("{}: no unshot points left to choose from", self.name);
            return Point::new(0, 0);
        }
        match self.state {
            TargetState::Search => self.random_search(rng),
            TargetState::Exploit => self.calculated_shot(rng),
        }
    }

    fn record_attack_result(
        &mut self,
        p: Point,
        valid: bool,
        hit: bool,
        destroyed: bool,
        _ship: Option<ShipId>,
    ) {
        if self.game.contains(p) {
            let (r, c) = (p.r as usize, p.c as usize);
            if hit {
                let _ = self.hits.set(r, c);
            } else {
                let _ = self.misses.set(r, c);
            }
        }
        if !valid {
            log::error!("{}: engine reported an invalid shot at {}", self.name, p);
        }
        match self.state {
            TargetState::Search => {
                if hit && !destroyed {
                    self.state = TargetState::Exploit;
                    self.last_hit = p;
                    self.rebuild = true;
                }
            }
            TargetState::Exploit => {
                if hit && destroyed {
                    self.state = TargetState::Search;
                }
            }
        }
    }
}

/// Try to place every catalog ship on a board with no ships yet, using an
/// explicit-stack backtracking search.
///
/// The scan is row-major from the origin, horizontal preferred over vertical
/// at each candidate cell. Placing a ship restarts the scan at the origin
/// for the next one; exhausting the scan undoes the most recent placement
/// and resumes just past its anchor. Returns `Ok(false)` only after
/// backtracking past the first ship, i.e. no packing exists under the
/// current blocking mask.
pub fn pack_catalog(board: &mut Board) -> Result<bool, BoardError> {
    let game = board.game();
    let n = game.n_ships();
    let (rows, cols) = (game.rows() as i32, game.cols() as i32);
    let mut placed: Vec<(Point, Orientation)> = Vec::new();
    let (mut r, mut c) = (0i32, 0i32);
    loop {
        if placed.len() == n {
            return Ok(true);
        }
        if c >= cols {
            c = 0;
            r += 1;
        }
        if r >= rows {
            let (anchor, orientation) = match placed.pop() {
                Some(frame) => frame,
                None => return Ok(false),
            };
            board.unplace_ship(anchor, placed.len(), orientation)?;
            r = anchor.r;
            c = anchor.c + 1;
            continue;
        }
        let id = placed.len();
        let anchor = Point::new(r, c);
        if board.place_ship(anchor, id, Orientation::Horizontal).is_ok() {
            placed.push((anchor, Orientation::Horizontal));
            r = 0;
            c = 0;
        } else if board.place_ship(anchor, id, Orientation::Vertical).is_ok() {
            placed.push((anchor, Orientation::Vertical));
            r = 0;
            c = 0;
        } else {
            c += 1;
        }
    }
}
