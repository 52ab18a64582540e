use closest::{MatchError, Matcher, MatcherConfig, Point};

fn scalars(values: &[f64]) -> Vec<Point> {
    values.iter().map(|&v| Point::Scalar(v)).collect()
}

#[test]
fn empty_collection_is_rejected() {
    let result = Matcher::memoizing(Vec::new());
    assert!(matches!(result, Err(MatchError::EmptyCollection)));
}

#[test]
fn mixed_dimensionality_reports_first_offender() {
    let cases: Vec<(Vec<Point>, usize)> = vec![
        (
            vec![Point::Scalar(1.0), Point::Vector(vec![1.0, 2.0])],
            1,
        ),
        (
            vec![
                Point::Vector(vec![1.0, 2.0]),
                Point::Vector(vec![3.0, 4.0]),
                Point::Scalar(5.0),
            ],
            2,
        ),
        (
            vec![
                Point::Vector(vec![1.0, 2.0, 3.0]),
                Point::Vector(vec![4.0, 5.0]),
                Point::Vector(vec![6.0]),
            ],
            1,
        ),
    ];

    for (points, offender) in cases {
        match Matcher::memoizing(points) {
            Err(MatchError::MixedDimensions { index, .. }) => {
                assert_eq!(index, offender, "wrong offending index reported");
            }
            Err(other) => panic!("expected MixedDimensions, got {other:?}"),
            Ok(_) => panic!("construction should fail on mixed dimensionality"),
        }
    }
}

#[test]
fn config_version_zero_is_rejected() {
    let cfg = MatcherConfig {
        version: 0,
        ..Default::default()
    };
    let result = Matcher::new(scalars(&[1.0, 2.0]), &cfg);
    assert!(matches!(
        result,
        Err(MatchError::InvalidConfigVersion { version: 0 })
    ));
}

#[test]
fn query_dimensionality_is_enforced_both_ways() {
    let mut scalar_matcher = Matcher::memoizing(scalars(&[1.0, 2.0])).expect("scalar matcher");
    let result = scalar_matcher.nearest(&Point::Vector(vec![1.0, 2.0]));
    assert!(matches!(
        result,
        Err(MatchError::DimensionMismatch {
            expected: 1,
            got: 2,
        })
    ));

    let mut plane_matcher =
        Matcher::memoizing(vec![Point::Vector(vec![0.0, 0.0])]).expect("plane matcher");
    let result = plane_matcher.nearest(&Point::Scalar(0.0));
    assert!(matches!(
        result,
        Err(MatchError::DimensionMismatch {
            expected: 2,
            got: 1,
        })
    ));
}

#[test]
fn empty_vector_query_is_a_dimension_mismatch() {
    let mut matcher = Matcher::memoizing(scalars(&[1.0])).expect("matcher");
    let result = matcher.nearest(&Point::Vector(Vec::new()));
    assert!(matches!(
        result,
        Err(MatchError::DimensionMismatch {
            expected: 1,
            got: 0,
        })
    ));
}

#[test]
fn single_element_vector_query_is_compatible_with_scalars() {
    // Dimensionality 1 either way; only the cache identity differs.
    let mut matcher = Matcher::memoizing(scalars(&[1.0, 5.0])).expect("matcher");
    let hit = matcher
        .nearest(&Point::Vector(vec![4.5]))
        .expect("lookup")
        .expect("hit");
    assert_eq!(hit.index, 1);
}

#[test]
fn failed_lookup_does_not_disturb_memoized_state() {
    let mut matcher = Matcher::memoizing(scalars(&[1.0, 5.0])).expect("matcher");

    matcher.nearest(&Point::Scalar(4.0)).expect("lookup");
    let before = matcher.cached_queries();

    let _ = matcher.nearest(&Point::Vector(vec![1.0, 2.0]));
    assert_eq!(matcher.cached_queries(), before);

    // The earlier answer is still served from cache.
    let hit = matcher
        .nearest(&Point::Scalar(4.0))
        .expect("lookup")
        .expect("hit");
    assert_eq!(hit.index, 1);
}

#[test]
fn failed_lookup_does_not_consume_entries() {
    let mut matcher = Matcher::consuming(scalars(&[1.0, 5.0])).expect("matcher");

    matcher.nearest(&Point::Scalar(1.0)).expect("lookup");
    assert_eq!(matcher.remaining(), 1);

    let _ = matcher.nearest(&Point::Vector(vec![1.0, 2.0]));
    assert_eq!(matcher.remaining(), 1);
}

#[test]
fn error_messages_are_meaningful() {
    let errors = vec![
        MatchError::EmptyCollection,
        MatchError::MixedDimensions {
            index: 1,
            expected: 2,
            got: 3,
        },
        MatchError::DimensionMismatch {
            expected: 2,
            got: 1,
        },
        MatchError::InvalidConfigVersion { version: 0 },
    ];

    for err in errors {
        let msg = format!("{err}");
        assert!(!msg.is_empty(), "error variant should have display message");
    }
}

#[test]
fn errors_are_cloneable_and_comparable() {
    let err = MatchError::DimensionMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(err, err.clone());
    assert_ne!(err, MatchError::EmptyCollection);
}
