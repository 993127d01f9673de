use super::*;

fn six() -> SceneLadder {
    SceneLadder::new(vec![0.15, 0.3, 0.45, 0.6, 0.75]).unwrap()
}

#[test]
fn ladder_matches_threshold_table() {
    let l = six();
    let cases = [
        (0.0, 0),
        (0.149, 0),
        (0.15, 1),
        (0.29, 1),
        (0.3, 2),
        (0.45, 3),
        (0.5, 3),
        (0.6, 4),
        (0.74, 4),
        (0.75, 5),
        (1.0, 5),
    ];
    for (p, expected) in cases {
        assert_eq!(l.index_for(Progress::new(p)), expected, "progress {p}");
    }
}

#[test]
fn ladder_is_total_and_monotonic() {
    let l = six();
    let mut hit = [false; 6];
    let mut prev = 0;
    for i in 0..=10_000 {
        let idx = l.index_for(Progress::new(f64::from(i) / 10_000.0));
        assert!(idx < l.scene_count());
        assert!(idx >= prev);
        hit[idx] = true;
        prev = idx;
    }
    assert!(hit.iter().all(|h| *h));
}

#[test]
fn ranges_partition_unit_interval() {
    let l = six();
    assert_eq!(l.range_of(0), Some((0.0, 0.15)));
    assert_eq!(l.range_of(3), Some((0.45, 0.6)));
    assert_eq!(l.range_of(5), Some((0.75, 1.0)));
    assert_eq!(l.range_of(6), None);
}

#[test]
fn rejects_bad_thresholds() {
    assert!(SceneLadder::new(vec![0.3, 0.15]).is_err());
    assert!(SceneLadder::new(vec![0.0, 0.5]).is_err());
    assert!(SceneLadder::new(vec![0.5, 1.5]).is_err());
    assert!(SceneLadder::new(vec![0.5, 0.5]).is_err());
    assert_eq!(SceneLadder::new(Vec::new()).unwrap().scene_count(), 1);
}
