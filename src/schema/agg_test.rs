use super::agg::AggKind;

#[test]
fn parses_supported_tags() {
    assert_eq!(AggKind::from_tag("count"), Some(AggKind::Count));
    assert_eq!(AggKind::from_tag("avg_bucket"), Some(AggKind::AvgBucket));
    assert_eq!(AggKind::from_tag("moving_avg"), Some(AggKind::MovingAvg));
    assert_eq!(
        AggKind::from_tag("moving_average"),
        Some(AggKind::MovingAvg)
    );
    assert_eq!(
        AggKind::from_tag("date_histogram"),
        Some(AggKind::DateHistogram)
    );
}

#[test]
fn unknown_tag_yields_none() {
    assert_eq!(AggKind::from_tag("geohash_grid"), None);
    assert_eq!(AggKind::from_tag(""), None);
}

#[test]
fn sibling_and_parent_pipelines_are_disjoint() {
    for kind in [
        AggKind::AvgBucket,
        AggKind::SumBucket,
        AggKind::MinBucket,
        AggKind::MaxBucket,
    ] {
        assert!(kind.is_sibling_pipeline());
        assert!(!kind.is_parent_pipeline());
    }

    for kind in [
        AggKind::CumulativeSum,
        AggKind::Derivative,
        AggKind::MovingAvg,
    ] {
        assert!(kind.is_parent_pipeline());
        assert!(!kind.is_sibling_pipeline());
    }
}

#[test]
fn collapse_fn_matches_sibling_kind() {
    assert_eq!(AggKind::AvgBucket.collapse_fn(), Some("avg"));
    assert_eq!(AggKind::SumBucket.collapse_fn(), Some("sum"));
    assert_eq!(AggKind::MinBucket.collapse_fn(), Some("min"));
    assert_eq!(AggKind::MaxBucket.collapse_fn(), Some("max"));
    assert_eq!(AggKind::Avg.collapse_fn(), None);
}

#[test]
fn buckets_have_no_formula_fn() {
    for kind in [AggKind::DateHistogram, AggKind::Terms, AggKind::Filters] {
        assert!(kind.is_bucket());
        assert_eq!(kind.formula_fn(), None);
    }
}
