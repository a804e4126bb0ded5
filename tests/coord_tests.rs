use minesweep::{Coord, CoordError};

#[test]
fn parses_letter_digit_pairs() {
    assert_eq!(Coord::parse("D3"), Ok(Coord::new(3, 2)));
    assert_eq!(Coord::parse("a1"), Ok(Coord::new(0, 0)));
    assert_eq!(Coord::parse("A1"), Ok(Coord::new(0, 0)));
    assert_eq!(Coord::parse("e5"), Ok(Coord::new(4, 4)));
    assert_eq!(Coord::parse("Z9"), Ok(Coord::new(25, 8)));
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(Coord::parse("D33"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("31"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse(""), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("D"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("D 3"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("3D"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("!3"), Err(CoordError::InvalidFormat));
    assert_eq!(Coord::parse("D#"), Err(CoordError::InvalidFormat));
}

#[test]
fn zero_digit_names_no_column() {
    // Well-formed but there is no column before 1.
    assert_eq!(Coord::parse("A0"), Err(CoordError::OutOfRange));
}

#[test]
fn first_row_and_column_are_in_bounds() {
    assert!(Coord::new(0, 0).in_bounds(5, 5));
    assert!(Coord::new(4, 4).in_bounds(5, 5));
    assert!(!Coord::new(5, 0).in_bounds(5, 5));
    assert!(!Coord::new(0, 5).in_bounds(5, 5));
}

#[test]
fn renders_letter_digit_form() {
    assert_eq!(Coord::new(3, 2).to_string(), "D3");
    assert_eq!(Coord::new(0, 0).to_string(), "A1");
    assert_eq!(Coord::new(4, 4).to_string(), "E5");
}
