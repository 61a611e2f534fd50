use crate::bounce::Bouncer;
use crate::world::Position;

#[test]
fn test_starts_in_corner() {
    let bouncer = Bouncer::new(10, 5).unwrap();
    assert_eq!(bouncer.position(), Position::new(0, 0));
    assert_eq!(bouncer.velocity(), (1, 1));
}

#[test]
fn test_reflects_off_far_corner() {
    let mut bouncer = Bouncer::new(3, 3).unwrap();
    bouncer.step();
    assert_eq!(bouncer.position(), Position::new(1, 1));
    bouncer.step();
    assert_eq!(bouncer.position(), Position::new(2, 2));
    bouncer.step();
    assert_eq!(bouncer.position(), Position::new(1, 1));
    assert_eq!(bouncer.velocity(), (-1, -1));
}

#[test]
fn test_reflects_each_axis_independently() {
    let mut bouncer = Bouncer::with_state(5, 3, Position::new(2, 2), (1, 1)).unwrap();
    bouncer.step();
    assert_eq!(bouncer.position(), Position::new(3, 1));
    assert_eq!(bouncer.velocity(), (1, -1));
}

#[test]
fn test_single_cell_axis_holds_still() {
    let mut bouncer = Bouncer::new(1, 4).unwrap();
    for _ in 0..10 {
        bouncer.step();
        assert_eq!(bouncer.position().x, 0);
    }
}

#[test]
fn test_returns_to_start_after_full_period() {
    let mut bouncer = Bouncer::new(4, 4).unwrap();
    // Diagonal on a square: 3 steps out, 3 steps back, then bounce off the origin.
    for _ in 0..6 {
        bouncer.step();
    }
    assert_eq!(bouncer.position(), Position::new(0, 0));
    assert_eq!(bouncer.velocity(), (-1, -1));
    bouncer.step();
    assert_eq!(bouncer.position(), Position::new(1, 1));
    assert_eq!(bouncer.velocity(), (1, 1));
}

#[test]
fn test_rejects_invalid_state() {
    assert!(Bouncer::new(0, 5).is_err());
    assert!(Bouncer::with_state(5, 5, Position::new(5, 0), (1, 1)).is_err());
    assert!(Bouncer::with_state(5, 5, Position::new(0, 0), (2, 0)).is_err());
}
