//! Match orchestration: placement phase, alternating turns, termination.

use crate::board::Board;
use crate::config::GameConfig;
use crate::player::Player;
use core::fmt;
use rand::rngs::SmallRng;
use std::io::{self, Write};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlacement,
    InProgress,
    Finished,
}

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::One => write!(f, "player 1"),
            Side::Two => write!(f, "player 2"),
        }
    }
}

/// Reasons a match never starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The catalog has no ships registered.
    NoShips,
    /// Two interactive players are not supported.
    BothHuman,
    /// A side failed to place its full fleet.
    PlacementFailed(Side),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NoShips => write!(f, "no ships registered"),
            MatchError::BothHuman => write!(f, "this game does not support two human players"),
            MatchError::PlacementFailed(side) => {
                write!(f, "{} failed to place all ships", side)
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Outcome of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    pub winner: Side,
    pub turns: usize,
}

/// A single match: two boards over one shared configuration, driven by two
/// players that never touch each other's state.
pub struct Match<'g> {
    game: &'g GameConfig,
    board_one: Board<'g>,
    board_two: Board<'g>,
    phase: Phase,
}

impl<'g> Match<'g> {
    pub fn new(game: &'g GameConfig) -> Self {
        Match {
            game,
            board_one: Board::new(game),
            board_two: Board::new(game),
            phase: Phase::AwaitingPlacement,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self, side: Side) -> &Board<'g> {
        match side {
            Side::One => &self.board_one,
            Side::Two => &self.board_two,
        }
    }

    /// Run the placement phase. Fails, leaving the match unstarted, when the
    /// catalog is empty, both sides are human, or either side ends placement
    /// without its full fleet on the board (a board with missing ships would
    /// hand its opponent an instant, meaningless win).
    pub fn place(
        &mut self,
        rng: &mut SmallRng,
        p1: &mut dyn Player,
        p2: &mut dyn Player,
    ) -> Result<(), MatchError> {
        if self.game.n_ships() == 0 {
            return Err(MatchError::NoShips);
        }
        if p1.is_human() && p2.is_human() {
            return Err(MatchError::BothHuman);
        }
        if p1.place_ships(rng, &mut self.board_one).is_err() || !self.board_one.all_placed() {
            return Err(MatchError::PlacementFailed(Side::One));
        }
        if p2.place_ships(rng, &mut self.board_two).is_err() || !self.board_two.all_placed() {
            return Err(MatchError::PlacementFailed(Side::Two));
        }
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Play the match to completion and report the winner.
    ///
    /// Turns strictly alternate starting with side one. Each turn the active
    /// player picks a point, the opponent board resolves it, the result goes
    /// back to the attacker and the defender is told which point was hit;
    /// the defender's board is rendered with un-hit ships masked whenever
    /// the attacker is human. The match finishes the instant either board
    /// is fully destroyed.
    pub fn play<'a>(
        &mut self,
        rng: &mut SmallRng,
        p1: &'a mut dyn Player,
        p2: &'a mut dyn Player,
        pause: bool,
    ) -> Result<MatchReport, MatchError> {
        if self.phase == Phase::AwaitingPlacement {
            self.place(rng, p1, p2)?;
        }
        let mut one_to_move = true;
        let mut turns = 0usize;
        while !(self.board_one.all_destroyed() || self.board_two.all_destroyed()) {
            turns += 1;
            let (attacker, defender, board) = if one_to_move {
                (&mut *p1, &mut *p2, &mut self.board_two)
            } else {
                (&mut *p2, &mut *p1, &mut self.board_one)
            };
            let human = attacker.is_human();
            println!("{}'s turn. Board for {}:", attacker.name(), defender.name());
            print!("{}", board.view(human));
            let target = attacker.recommend_attack(rng);
            match board.attack(target) {
                Ok(res) => {
                    attacker.record_attack_result(
                        target,
                        true,
                        res.is_hit(),
                        res.is_sunk(),
                        res.ship_id(),
                    );
                    defender.record_opponent_attack(target);
                    let narration = match res.ship_id() {
                        Some(id) if res.is_sunk() => format!(
                            "destroyed the {}",
                            self.game.ship(id).map(|d| d.name()).unwrap_or("ship")
                        ),
                        Some(_) => "hit something".to_string(),
                        None => "missed".to_string(),
                    };
                    println!(
                        "{} attacked {} and {}, resulting in:",
                        attacker.name(),
                        target,
                        narration
                    );
                    print!("{}", board.view(human));
                }
                Err(_) => {
                    attacker.record_attack_result(target, false, false, false, None);
                    if human {
                        println!("{} wasted a shot at {}.", attacker.name(), target);
                    } else {
                        log::error!(
                            "computer player {} produced an invalid shot at {}",
                            attacker.name(),
                            target
                        );
                    }
                }
            }
            one_to_move = !one_to_move;
            if self.board_one.all_destroyed() || self.board_two.all_destroyed() {
                break;
            }
            if pause {
                wait_for_enter();
            }
        }
        self.phase = Phase::Finished;
        let winner = if self.board_one.all_destroyed() {
            Side::Two
        } else {
            Side::One
        };
        println!(
            "{} wins!",
            if winner == Side::One { p1.name() } else { p2.name() }
        );
        Ok(MatchReport { winner, turns })
    }
}

fn wait_for_enter() {
    print!("Press enter to continue: ");
    io::stdout().flush().unwrap();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
