use flotilla::{
    pack_catalog, BacktrackPlayer, Board, ClusterPlayer, GameConfig, HuntPlayer, Orientation,
    Player, Point,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn standard_game() -> GameConfig {
    let mut game = GameConfig::new(10, 10).unwrap();
    game.add_standard_ships().unwrap();
    game
}

#[test]
fn test_pack_catalog_unmasked_layout_is_deterministic() {
    let game = standard_game();
    let mut board = Board::new(&game);
    assert!(pack_catalog(&mut board).unwrap());

    // row-major scan, horizontal preferred: the standard roster packs into
    // the top rows with only the second 3-ship forced vertical at the edge.
    let expected = [
        (Point::new(0, 0), Orientation::Horizontal),
        (Point::new(0, 5), Orientation::Horizontal),
        (Point::new(0, 9), Orientation::Vertical),
        (Point::new(1, 0), Orientation::Horizontal),
        (Point::new(1, 3), Orientation::Horizontal),
    ];
    for (id, (anchor, orientation)) in expected.iter().enumerate() {
        let placement = board.placement(id).unwrap();
        assert_eq!(placement.anchor(), *anchor, "ship {}", id);
        assert_eq!(placement.orientation(), *orientation, "ship {}", id);
    }
    assert_eq!(board.ship_map().count_ones(), game.total_ship_cells());
}

#[test]
fn test_pack_catalog_all_or_nothing_under_blocking() {
    let mut game = GameConfig::new(3, 3).unwrap();
    game.add_ship(3, 'A', "alpha").unwrap();
    game.add_ship(3, 'B', "bravo").unwrap();
    game.add_ship(3, 'C', "charlie").unwrap();

    for seed in 0..32u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&game);
        board.block(&mut rng).unwrap();
        let packed = pack_catalog(&mut board).unwrap();
        if packed {
            assert_eq!(board.placed_count(), 3);
            assert_eq!(board.ship_map().count_ones(), 9);
        } else {
            // exhaustive failure backtracks past the first ship
            assert_eq!(board.placed_count(), 0);
            assert!(board.ship_map().is_empty());
        }
        board.unblock();
    }
}

#[test]
fn test_backtrack_player_places_full_fleet() {
    let game = standard_game();
    for seed in [1u64, 17, 99, 12345] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = BacktrackPlayer::new("searcher", &game);
        let mut board = Board::new(&game);
        player.place_ships(&mut rng, &mut board).unwrap();
        assert!(board.all_placed());
        assert_eq!(board.ship_map().count_ones(), game.total_ship_cells());
        // the blocking mask is always lifted afterwards
        assert!(board.blocked().is_empty());
    }
}

#[test]
fn test_cluster_player_stacks_fleet_on_left_edge() {
    let game = standard_game();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut player = ClusterPlayer::new("clusterer", &game);
    let mut board = Board::new(&game);
    player.place_ships(&mut rng, &mut board).unwrap();

    for id in 0..game.n_ships() {
        let placement = board.placement(id).unwrap();
        assert_eq!(placement.anchor(), Point::new(id as i32, 0));
        assert_eq!(placement.orientation(), Orientation::Horizontal);
    }
}

#[test]
fn test_cluster_player_fails_when_rows_run_out() {
    // five ships need five rows; give it four
    let mut game = GameConfig::new(4, 10).unwrap();
    game.add_standard_ships().unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut player = ClusterPlayer::new("clusterer", &game);
    let mut board = Board::new(&game);
    assert!(player.place_ships(&mut rng, &mut board).is_err());
}

#[test]
fn test_hunt_player_places_full_fleet() {
    let game = standard_game();
    for seed in [2u64, 23, 456, 78910] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = HuntPlayer::new("hunter", &game);
        let mut board = Board::new(&game);
        player.place_ships(&mut rng, &mut board).unwrap();
        assert!(board.all_placed());
        assert_eq!(board.ship_map().count_ones(), game.total_ship_cells());
    }
}
