use crate::PositionSet;

#[test]
fn test_from_positions_basic() {
    let set = PositionSet::from_positions(1000, [100u32, 5, 999, 64, 63]);
    assert_eq!(set.span(), 1000);
    assert_eq!(set.count_positions(), 5);
    assert_eq!(
        set.positions().collect::<Vec<_>>(),
        vec![5, 63, 64, 100, 999]
    );
    assert!(set.contains(64));
    assert!(!set.contains(65));
}

#[test]
fn test_from_positions_duplicates() {
    let set = PositionSet::from_positions(10, [3u32, 3, 1, 3]);
    assert_eq!(set.count_positions(), 2);
    assert_eq!(set.positions().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_empty_and_full() {
    for span in [0u32, 1, 63, 64, 65, 128, 1000] {
        let empty = PositionSet::empty(span);
        assert!(empty.is_empty());
        assert_eq!(empty.count_positions(), 0);
        assert_eq!(empty.positions().count(), 0);

        let full = PositionSet::full(span);
        assert!(full.is_full());
        assert_eq!(full.count_positions(), span);
        assert_eq!(full.positions().count(), span as usize);
        if span > 0 {
            assert_eq!(full.ranges().collect::<Vec<_>>(), vec![0..span]);
        } else {
            assert_eq!(full.ranges().count(), 0);
        }
    }
}

#[test]
fn test_from_ranges_basic() {
    let span = 10_000u32;
    let ranges = vec![5u32..10, 100..200, 9000..9500];
    let set = PositionSet::from_ranges(span, ranges.clone());
    let expected: u32 = ranges.iter().map(|r| r.end - r.start).sum();
    assert_eq!(set.count_positions(), expected);
    assert_eq!(set.ranges().collect::<Vec<_>>(), ranges);

    for r in &ranges {
        assert!(set.contains(r.start));
        assert!(set.contains(r.end - 1));
        assert!(!set.contains(r.start - 1));
        assert!(!set.contains(r.end));
    }
}

#[test]
fn test_from_ranges_word_boundaries() {
    let set = PositionSet::from_ranges(256, [0u32..64, 64..65, 127..192, 200..200]);
    assert_eq!(set.ranges().collect::<Vec<_>>(), vec![0..65, 127..192]);
    assert_eq!(set.count_positions(), 65 + 65);
}

#[test]
fn test_set_range_tail() {
    let mut set = PositionSet::empty(70);
    set.set_range(60..70);
    assert_eq!(set.ranges().collect::<Vec<_>>(), vec![60..70]);
    set.reset(65);
    assert_eq!(set.ranges().collect::<Vec<_>>(), vec![60..65, 66..70]);
}

#[test]
#[should_panic]
fn test_set_out_of_span() {
    let mut set = PositionSet::empty(10);
    set.set(10);
}

#[test]
fn test_union_intersect_complement() {
    let span = 200u32;
    let a = PositionSet::from_ranges(span, [0u32..50, 100..150]);
    let b = PositionSet::from_ranges(span, [25u32..125]);

    let union = a.union(&b);
    assert_eq!(union.ranges().collect::<Vec<_>>(), vec![0..150]);

    let intersection = a.intersect(&b);
    assert_eq!(
        intersection.ranges().collect::<Vec<_>>(),
        vec![25..50, 100..125]
    );

    let mut complement = a.clone();
    complement.complement();
    assert_eq!(
        complement.ranges().collect::<Vec<_>>(),
        vec![50..100, 150..200]
    );
    assert!(complement.intersect(&a).is_empty());
    assert!(complement.union(&a).is_full());
}

#[test]
#[should_panic]
fn test_union_span_mismatch() {
    let mut a = PositionSet::empty(10);
    a.union_with(&PositionSet::empty(11));
}

#[test]
fn test_random_positions_match_reference() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let span = rng.u32(1..2000);
        let count = rng.usize(0..300);
        let positions = (0..count).map(|_| rng.u32(0..span)).collect::<Vec<_>>();
        let set = PositionSet::from_positions(span, positions.iter().copied());

        let mut expected = positions.clone();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(set.positions().collect::<Vec<_>>(), expected);

        let from_ranges = PositionSet::from_ranges(span, set.ranges());
        assert_eq!(from_ranges, set);
    }
}
