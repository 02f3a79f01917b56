use super::error::ConvertError;

#[test]
fn display_names_the_failing_input() {
    let err = ConvertError::UnsupportedAggregation("geohash_grid".into());
    assert_eq!(err.to_string(), "Unsupported aggregation type: geohash_grid");

    let err = ConvertError::MissingField("bytes".into());
    assert_eq!(err.to_string(), "Field not present in data source: bytes");

    let err = ConvertError::invalid_parameter("3", "missing percentile values");
    assert_eq!(
        err.to_string(),
        "Invalid parameter for aggregation 3: missing percentile values"
    );
}

#[test]
fn log_error_does_not_panic() {
    crate::logging::init_for_tests();
    for err in [
        ConvertError::UnsupportedAggregation("x".into()),
        ConvertError::MissingField("y".into()),
        ConvertError::invalid_parameter("1", "bad"),
        ConvertError::UnresolvedReference("2[95]".into()),
        ConvertError::IncompatibleCombination("mixed siblings".into()),
    ] {
        err.log_error();
    }
}
