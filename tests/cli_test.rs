use flotilla::{parse_direction, parse_two_ints, Orientation};

#[test]
fn test_parse_two_ints() {
    assert_eq!(parse_two_ints("3 5"), Some((3, 5)));
    assert_eq!(parse_two_ints("  0   9 "), Some((0, 9)));
    // negative probes are parseable; the board rejects them later
    assert_eq!(parse_two_ints("-1 0"), Some((-1, 0)));

    assert_eq!(parse_two_ints(""), None);
    assert_eq!(parse_two_ints("3"), None);
    assert_eq!(parse_two_ints("3 5 7"), None);
    assert_eq!(parse_two_ints("a b"), None);
    assert_eq!(parse_two_ints("3,5"), None);
}

#[test]
fn test_parse_direction() {
    assert_eq!(parse_direction("h"), Some(Orientation::Horizontal));
    assert_eq!(parse_direction("v"), Some(Orientation::Vertical));
    assert_eq!(parse_direction(" v "), Some(Orientation::Vertical));
    assert_eq!(parse_direction("H"), None);
    assert_eq!(parse_direction("x"), None);
    assert_eq!(parse_direction(""), None);
}
