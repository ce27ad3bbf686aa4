//! The player capability interface and the strategy factory.

use crate::board::Board;
use crate::common::{Point, ShipId};
use crate::config::GameConfig;
use crate::BoardError;
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;

/// Interface implemented by the four player variants.
///
/// A player only ever mutates its own board (during placement) and only
/// observes the opponent board through attack feedback; the orchestrator
/// never hands a strategy both boards.
pub trait Player {
    /// Display name of this player.
    fn name(&self) -> &str;

    /// Place every catalog ship onto the player's own board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next point to attack on the opponent board.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point;

    /// Feedback for the player's own last attack. `valid` is false when the
    /// board rejected the shot (out of bounds or repeated); `ship` is set
    /// whenever a ship segment was touched.
    fn record_attack_result(
        &mut self,
        _p: Point,
        _valid: bool,
        _hit: bool,
        _destroyed: bool,
        _ship: Option<ShipId>,
    ) {
    }

    /// Notification of an opponent attack against this player's board.
    fn record_opponent_attack(&mut self, _p: Point) {}

    /// True only for the interactive player.
    fn is_human(&self) -> bool {
        false
    }
}

/// Strategy tag selecting a player variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Interactive stdin-driven player.
    Human,
    /// Deterministic clustered placement and sweep attack.
    Cluster,
    /// Masked backtracking placement, ray-candidate targeting.
    Backtrack,
    /// Random placement, frontier-stack targeting.
    Hunt,
}

impl PlayerKind {
    /// The tag the factory is keyed by.
    pub fn tag(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Cluster => "cluster",
            PlayerKind::Backtrack => "backtrack",
            PlayerKind::Hunt => "hunt",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "cluster" => Ok(PlayerKind::Cluster),
            "backtrack" => Ok(PlayerKind::Backtrack),
            "hunt" => Ok(PlayerKind::Hunt),
            other => Err(format!(
                "unknown player kind {:?} (expected human, cluster, backtrack or hunt)",
                other
            )),
        }
    }
}

/// Two-state targeting model shared by the adaptive strategies: unconstrained
/// random search until a hit, localized follow-up afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TargetState {
    Search,
    Exploit,
}

/// Every point of the board in row-major order; the initial unshot pool.
pub(crate) fn all_points(game: &GameConfig) -> Vec<Point> {
    let mut points = Vec::with_capacity(game.rows() * game.cols());
    for r in 0..game.rows() {
        for c in 0..game.cols() {
            points.push(Point::new(r as i32, c as i32));
        }
    }
    points
}

/// Drop `p` from a point pool, if present.
pub(crate) fn remove_point(p: Point, pool: &mut Vec<Point>) {
    if let Some(i) = pool.iter().position(|q| *q == p) {
        pool.swap_remove(i);
    }
}

/// Construct a player of the given kind for `game`.
pub fn create_player<'g>(
    kind: PlayerKind,
    name: &str,
    game: &'g GameConfig,
) -> Box<dyn Player + 'g> {
    match kind {
        PlayerKind::Human => Box::new(crate::player_cli::CliPlayer::new(name, game)),
        PlayerKind::Cluster => Box::new(crate::player_cluster::ClusterPlayer::new(name, game)),
        PlayerKind::Backtrack => {
            Box::new(crate::player_backtrack::BacktrackPlayer::new(name, game))
        }
        PlayerKind::Hunt => Box::new(crate::player_hunt::HuntPlayer::new(name, game)),
    }
}
