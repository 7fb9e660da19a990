use super::*;

#[test]
fn track_range_check_rejects_inverted() {
    assert!(TrackRange::new(0, 0).check(0).is_ok());
    assert!(TrackRange::new(-5, 5).check(0).is_ok());
    match TrackRange::new(4, 1).check(7) {
        Err(BlobError::InvalidRange { track, min, max }) => {
            assert_eq!((track, min, max), (7, 4, 1));
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn track_range_contains_is_inclusive() {
    let r = TrackRange::new(400, 800);
    assert!(!r.contains(399));
    assert!(r.contains(400));
    assert!(r.contains(800));
    assert!(!r.contains(801));
    assert_eq!(r.span(), 401);
    assert_eq!(TrackRange::new(3, 1).span(), 0);
}

#[test]
fn tick_index_next_saturates() {
    assert_eq!(TickIndex(0).next(), TickIndex(1));
    assert_eq!(TickIndex(u64::MAX).next(), TickIndex(u64::MAX));
}

#[test]
fn track_range_check_rejects_unindexable_span() {
    let full = TrackRange::new(i64::MIN, i64::MAX);
    assert_eq!(full.span(), u64::MAX);
    assert!(matches!(full.check(3), Err(BlobError::Validation(_))));
    assert!(TrackRange::new(i64::MIN, i64::MIN).check(0).is_ok());
}
