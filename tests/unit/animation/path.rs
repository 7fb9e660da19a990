use super::*;

#[test]
fn ascending_run_is_inclusive() {
    let p = StairPath::between(0, 3);
    assert_eq!(p.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(p.len(), 4);
    assert_eq!(p.end(), 3);
}

#[test]
fn descending_run_counts_down() {
    let p = StairPath::between(1800, 1795);
    assert_eq!(p.to_vec(), vec![1800, 1799, 1798, 1797, 1796, 1795]);
    assert_eq!(p.start(), 1800);
}

#[test]
fn equal_endpoints_hold_one_value() {
    let p = StairPath::between(5, 5);
    assert_eq!(p.to_vec(), vec![5]);
    assert_eq!(p.len(), 1);
    assert!(!p.is_empty());
}

#[test]
fn get_past_end_is_none() {
    let p = StairPath::between(-1, 1);
    assert_eq!(p.get(0), Some(-1));
    assert_eq!(p.get(2), Some(1));
    assert_eq!(p.get(3), None);
}

#[test]
fn full_domain_length_saturates() {
    let p = StairPath::between(i64::MIN, i64::MAX);
    assert_eq!(p.len(), usize::MAX);
    assert_eq!(p.get(0), Some(i64::MIN));
    assert_eq!(p.get(1), Some(i64::MIN + 1));
}
