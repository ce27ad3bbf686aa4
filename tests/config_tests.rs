use flotilla::{ConfigError, GameConfig, Point};

#[test]
fn test_dimension_bounds() {
    assert_eq!(GameConfig::new(0, 5).unwrap_err(), ConfigError::BadRows(0));
    assert_eq!(GameConfig::new(11, 5).unwrap_err(), ConfigError::BadRows(11));
    assert_eq!(GameConfig::new(5, 0).unwrap_err(), ConfigError::BadCols(0));
    assert_eq!(GameConfig::new(5, 11).unwrap_err(), ConfigError::BadCols(11));
    assert!(GameConfig::new(1, 1).is_ok());
    assert!(GameConfig::new(10, 10).is_ok());
}

#[test]
fn test_ship_ids_are_dense_and_ordered() {
    let mut game = GameConfig::new(10, 10).unwrap();
    game.add_standard_ships().unwrap();

    assert_eq!(game.n_ships(), 5);
    for (i, def) in game.ships().iter().enumerate() {
        assert_eq!(def.id(), i);
    }
    assert_eq!(game.total_ship_cells(), 17);
    assert_eq!(game.ship(0).unwrap().name(), "aircraft carrier");
    assert_eq!(game.ship(4).unwrap().length(), 2);
    assert!(game.ship(5).is_none());
}

#[test]
fn test_length_validation() {
    let mut game = GameConfig::new(3, 5).unwrap();
    assert_eq!(
        game.add_ship(0, 'Z', "zero").unwrap_err(),
        ConfigError::BadLength(0)
    );
    // longer than both axes
    assert_eq!(
        game.add_ship(6, 'Z', "zeppelin").unwrap_err(),
        ConfigError::DoesNotFit(6)
    );
    // fits the long axis only
    assert!(game.add_ship(5, 'Z', "zeppelin").is_ok());
    assert_eq!(game.n_ships(), 1);
}

#[test]
fn test_symbol_validation() {
    let mut game = GameConfig::new(10, 10).unwrap();
    for reserved in ['.', 'o', 'X'] {
        assert_eq!(
            game.add_ship(2, reserved, "boat").unwrap_err(),
            ConfigError::ReservedSymbol(reserved)
        );
    }
    assert_eq!(
        game.add_ship(2, '\n', "boat").unwrap_err(),
        ConfigError::UnprintableSymbol('\n')
    );
    assert_eq!(
        game.add_ship(2, 'é', "boat").unwrap_err(),
        ConfigError::UnprintableSymbol('é')
    );

    game.add_ship(2, 'P', "patrol boat").unwrap();
    assert_eq!(
        game.add_ship(3, 'P', "pinnace").unwrap_err(),
        ConfigError::DuplicateSymbol('P')
    );
    // the rejected entry was not added
    assert_eq!(game.n_ships(), 1);
}

#[test]
fn test_fleet_capped_by_board_cells() {
    let mut game = GameConfig::new(2, 2).unwrap();
    game.add_ship(2, 'A', "alpha").unwrap();
    game.add_ship(2, 'B', "bravo").unwrap();
    assert_eq!(
        game.add_ship(1, 'C', "charlie").unwrap_err(),
        ConfigError::BoardTooSmall
    );
    assert_eq!(game.n_ships(), 2);
}

#[test]
fn test_contains_and_random_point() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let game = GameConfig::new(3, 5).unwrap();
    assert!(game.contains(Point::new(0, 0)));
    assert!(game.contains(Point::new(2, 4)));
    assert!(!game.contains(Point::new(-1, 0)));
    assert!(!game.contains(Point::new(3, 0)));
    assert!(!game.contains(Point::new(0, 5)));

    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        assert!(game.contains(game.random_point(&mut rng)));
    }
}
