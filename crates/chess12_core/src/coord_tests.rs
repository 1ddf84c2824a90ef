use super::*;

#[test]
fn bounded_axes_gate_on_board() {
    assert!(Coord::plane(0, 0).on_board());
    assert!(Coord::plane(7, 7).on_board());
    assert!(!Coord::plane(-1, 0).on_board());
    assert!(!Coord::plane(8, 0).on_board());
    assert!(!Coord::plane(0, -1).on_board());
    assert!(!Coord::plane(0, 8).on_board());
}

#[test]
fn unbounded_axes_never_disqualify() {
    let far = Coord::plane(3, 3).with_axis(5, -4_000).with_axis(11, 9_999);
    assert!(far.on_board());
}

#[test]
fn offset_and_with_axis() {
    let c = Coord::plane(4, 4);
    assert_eq!(c.offset(0, 2).axis(0), 6);
    assert_eq!(c.offset(7, -3).axis(7), -3);
    assert_eq!(c.with_axis(1, 0).axis(1), 0);
    // offset leaves the other axes alone
    assert_eq!(c.offset(0, 2).axis(1), 4);
}

#[test]
fn shift_applies_full_delta() {
    let mut delta = [0i16; AXES];
    delta[0] = 1;
    delta[9] = -2;
    let c = Coord::plane(2, 2).shift(&delta);
    assert_eq!(c.axis(0), 3);
    assert_eq!(c.axis(1), 2);
    assert_eq!(c.axis(9), -2);
}
