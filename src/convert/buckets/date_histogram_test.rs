use super::{BucketContext, convert_bucket_to_column};
use crate::convert::column::{ColumnParams, OperationType};
use crate::convert::error::ConvertError;
use crate::schema::normalize::normalize_agg;
use crate::test_helpers::factories::{LegacyVisFactory, RawAggFactory, StaticFieldsFactory};

#[test]
fn produces_a_bucketed_date_histogram_column() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().with_interval("1h").create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    assert_eq!(column.operation_type, OperationType::DateHistogram);
    assert!(column.is_bucketed);
    assert!(!column.is_split);
    assert_eq!(column.source_field.as_deref(), Some("timestamp"));
    assert_eq!(
        column.params,
        ColumnParams::DateHistogram {
            interval: "1h".into(),
            drop_partials: false,
            include_empty_rows: true,
        }
    );
}

#[test]
fn advanced_interval_syntax_falls_back_to_auto() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().with_interval(">=2h").create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    let ColumnParams::DateHistogram { interval, .. } = column.params else {
        panic!("expected date histogram params");
    };
    assert_eq!(interval, "auto");
}

#[test]
fn missing_interval_means_auto() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    let ColumnParams::DateHistogram { interval, .. } = column.params else {
        panic!("expected date histogram params");
    };
    assert_eq!(interval, "auto");
}

#[test]
fn panel_drop_partials_applies_without_series_override() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().with_drop_partial_buckets(true).create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    let ColumnParams::DateHistogram { drop_partials, .. } = column.params else {
        panic!("expected date histogram params");
    };
    assert!(drop_partials);
}

#[test]
fn series_override_wins_over_panel_default() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().with_drop_partial_buckets(true).create();
    let mut raw = RawAggFactory::date_histogram("timestamp").create();
    raw.params.override_index_pattern = true;
    raw.params.series_drop_partials = Some(false);
    let agg = normalize_agg(&raw);
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    let ColumnParams::DateHistogram { drop_partials, .. } = column.params else {
        panic!("expected date histogram params");
    };
    assert!(!drop_partials);
}

#[test]
fn drop_empty_rows_disables_include_empty_rows() {
    let fields = StaticFieldsFactory::new().create();
    let vis = LegacyVisFactory::new().create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: true,
    };

    let column = convert_bucket_to_column(&agg, &ctx, false).unwrap();
    let ColumnParams::DateHistogram {
        include_empty_rows, ..
    } = column.params
    else {
        panic!("expected date histogram params");
    };
    assert!(!include_empty_rows);
}

#[test]
fn unresolvable_date_field_aborts() {
    let fields = StaticFieldsFactory::empty().create();
    let vis = LegacyVisFactory::new().create();
    let agg = normalize_agg(&RawAggFactory::date_histogram("timestamp").create());
    let ctx = BucketContext {
        fields: &fields,
        vis: &vis,
        metric_columns: &[],
        drop_empty_rows: false,
    };

    assert_eq!(
        convert_bucket_to_column(&agg, &ctx, false).unwrap_err(),
        ConvertError::MissingField("timestamp".into())
    );
}
