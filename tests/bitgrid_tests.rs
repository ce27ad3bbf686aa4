use flotilla::{BitGrid, BitGridError};

#[test]
fn test_try_new_checks_capacity() {
    assert!(BitGrid::<u8>::try_new(2, 4).is_ok());
    assert_eq!(
        BitGrid::<u8>::try_new(3, 3).unwrap_err(),
        BitGridError::SizeTooLarge {
            cells: 9,
            capacity: 8
        }
    );
    assert!(BitGrid::<u128>::try_new(10, 10).is_ok());
}

#[test]
fn test_set_get_clear() {
    let mut grid = BitGrid::<u128>::new(3, 5);
    assert!(grid.is_empty());
    grid.set(2, 4).unwrap();
    grid.set(0, 0).unwrap();
    assert!(grid.get(2, 4).unwrap());
    assert!(!grid.get(1, 1).unwrap());
    assert_eq!(grid.count_ones(), 2);

    grid.clear(2, 4).unwrap();
    assert!(!grid.get(2, 4).unwrap());
    grid.clear_all();
    assert!(grid.is_empty());
}

#[test]
fn test_index_bounds() {
    let mut grid = BitGrid::<u128>::new(3, 5);
    assert_eq!(
        grid.get(3, 0).unwrap_err(),
        BitGridError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        grid.set(0, 5).unwrap_err(),
        BitGridError::IndexOutOfBounds { row: 0, col: 5 }
    );
}

#[test]
fn test_iter_set_is_row_major() {
    let mut grid = BitGrid::<u128>::new(4, 4);
    grid.set(3, 1).unwrap();
    grid.set(0, 2).unwrap();
    grid.set(1, 0).unwrap();
    let cells: Vec<_> = grid.iter_set().collect();
    assert_eq!(cells, vec![(0, 2), (1, 0), (3, 1)]);
}

#[test]
fn test_bitwise_combinators() {
    let mut a = BitGrid::<u128>::new(2, 2);
    let mut b = BitGrid::<u128>::new(2, 2);
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    b.set(0, 0).unwrap();
    b.set(1, 0).unwrap();

    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((a ^ b).count_ones(), 2);
    assert_eq!((!a).count_ones(), 2);

    let mut c = a;
    c |= b;
    assert_eq!(c.count_ones(), 3);
    c &= a;
    assert_eq!(c, a);
}
