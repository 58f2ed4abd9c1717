//! Structure-invariant tests for SequenceBuilder

use rsflat::util::testing::init_test_setup;
use rsflat::{CountingSource, NestedValue, SeededSource, SequenceBuilder};
use rstest::rstest;

/// Splits one level into its integer values and nested sequences.
fn partition_level(elements: &[NestedValue]) -> (Vec<i64>, Vec<&Vec<NestedValue>>) {
    let mut ints = Vec::new();
    let mut seqs = Vec::new();
    for element in elements {
        match element {
            NestedValue::Int(v) => ints.push(*v),
            NestedValue::Seq(children) => seqs.push(children),
        }
    }
    (ints, seqs)
}

fn top_level(value: &NestedValue) -> &[NestedValue] {
    match value {
        NestedValue::Seq(elements) => elements.as_slice(),
        NestedValue::Int(_) => panic!("top level must be a sequence"),
    }
}

// ============================================================
// Structure Invariant Tests
// ============================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(14)]
#[case(2000)]
fn given_depth_when_building_then_each_level_holds_four_ints_and_one_seq(#[case] requested: i64) {
    init_test_setup();
    let builder = SequenceBuilder::new(requested);
    let effective = requested.max(1) as usize;
    assert_eq!(builder.depth(), effective);

    let mut current = top_level(builder.value());
    for level in 1..=effective {
        assert_eq!(current.len(), 5, "level {} must hold 5 elements", level);
        let (ints, seqs) = partition_level(current);
        assert!(
            ints.iter().all(|v| (1..=10).contains(v)),
            "values must lie in [1,10]"
        );
        if level == effective {
            assert_eq!(ints.len(), 5, "deepest level holds integers only");
            assert!(seqs.is_empty());
        } else {
            assert_eq!(ints.len(), 4, "level {} holds 4 integers", level);
            assert_eq!(seqs.len(), 1, "level {} holds 1 nested sequence", level);
            current = seqs[0].as_slice();
        }
    }
}

// ============================================================
// Depth Coercion Tests
// ============================================================

#[rstest]
#[case(-5)]
#[case(0)]
#[case(1)]
fn given_non_positive_or_unit_depth_when_building_then_single_flat_level(#[case] requested: i64) {
    init_test_setup();
    let builder = SequenceBuilder::new(requested);
    assert_eq!(builder.depth(), 1);

    let (ints, seqs) = partition_level(top_level(builder.value()));
    assert_eq!(ints.len(), 5);
    assert!(seqs.is_empty());
}

// ============================================================
// Source Injection Tests
// ============================================================

#[test]
fn given_equal_seeds_when_building_then_structures_match() {
    init_test_setup();
    let a = SequenceBuilder::with_source(14, &mut SeededSource::new(42));
    let b = SequenceBuilder::with_source(14, &mut SeededSource::new(42));
    assert_eq!(a.value(), b.value());
}

#[test]
fn given_counting_source_when_building_then_continuation_sits_in_last_slot() {
    init_test_setup();
    let builder = SequenceBuilder::with_source(3, &mut CountingSource::new());

    let mut current = top_level(builder.value());
    for _ in 0..2 {
        assert!(
            current[..4]
                .iter()
                .all(|e| matches!(e, NestedValue::Int(_))),
            "first four slots must be integers"
        );
        current = match &current[4] {
            NestedValue::Seq(children) => children.as_slice(),
            NestedValue::Int(_) => panic!("last slot must hold the continuation"),
        };
    }
    assert!(current.iter().all(|e| matches!(e, NestedValue::Int(_))));
}
