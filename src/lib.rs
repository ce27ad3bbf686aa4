mod bitgrid;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_backtrack;
mod player_cli;
mod player_cluster;
mod player_hunt;
mod ship;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::{create_player, Player, PlayerKind};
pub use player_backtrack::{pack_catalog, BacktrackPlayer};
pub use player_cli::{parse_direction, parse_two_ints, CliPlayer};
pub use player_cluster::ClusterPlayer;
pub use player_hunt::HuntPlayer;
pub use ship::*;
