use tracing::debug;

use crate::convert::buckets::{BucketContext, convert_bucket_to_column};
use crate::convert::column::{Column, ConversionResult, Layer, new_id};
use crate::convert::error::ConvertError;
use crate::convert::metrics::{MetricContext, convert_metric_to_columns};
use crate::convert::ordering::{sort_columns, visible_column_ids};
use crate::schema::datasource::FieldResolver;
use crate::schema::normalize::{normalize_agg, normalize_vis};
use crate::schema::types::{LegacyVis, RawAgg, SchemaAgg, TimeRange, VisSchemas};
use crate::shared::datetime::last_value_window;

/// Assembler options; everything defaults off.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub drop_empty_rows_in_date_histogram: bool,
}

/// Top-level entry point. Returns `None` when the visualization cannot
/// be migrated automatically; the failure is logged once here.
pub fn convert_vis(
    vis: &LegacyVis,
    fields: &dyn FieldResolver,
    time_range: Option<&TimeRange>,
) -> Option<ConversionResult> {
    match try_convert_vis(vis, fields, time_range, ConvertOptions::default()) {
        Ok(result) => Some(result),
        Err(err) => {
            err.log_error();
            None
        }
    }
}

/// Runs the full conversion, surfacing the failure cause. Every stage
/// failure is fatal; no partial layer is ever emitted.
pub fn try_convert_vis(
    vis: &LegacyVis,
    fields: &dyn FieldResolver,
    time_range: Option<&TimeRange>,
    options: ConvertOptions,
) -> Result<ConversionResult, ConvertError> {
    let schemas = normalize_vis(vis);
    validate_combination(&schemas)?;

    let custom_buckets = custom_buckets_from_siblings(&schemas.metrics);
    if custom_buckets.len() > 1 {
        return Err(ConvertError::IncompatibleCombination(
            "sibling pipeline aggregations request more than one custom bucket".to_string(),
        ));
    }

    let metrics = metrics_without_duplicates(&schemas.metrics);
    let window = last_value_window(vis.time_range_mode, vis.interval.as_deref(), time_range);
    let metric_ctx = MetricContext {
        fields,
        metrics: &metrics,
        window: window.as_deref(),
    };

    let mut metric_columns: Vec<Column> = Vec::new();
    for metric in &metrics {
        metric_columns.extend(convert_metric_to_columns(metric, &metric_ctx)?);
    }
    debug!(
        metric_columns = metric_columns.len(),
        "metric conversion complete"
    );

    let bucket_ctx = BucketContext {
        fields,
        vis,
        metric_columns: &metric_columns,
        drop_empty_rows: options.drop_empty_rows_in_date_histogram,
    };

    let mut custom_bucket_columns = Vec::new();
    if let Some(raw) = custom_buckets.first() {
        let agg = normalize_agg(raw);
        custom_bucket_columns.push(convert_bucket_to_column(&agg, &bucket_ctx, false)?);
    }

    let mut bucket_columns = Vec::new();
    for bucket in &schemas.buckets {
        bucket_columns.push(convert_bucket_to_column(bucket, &bucket_ctx, false)?);
    }

    let mut split_columns = Vec::new();
    for split in &schemas.splits {
        split_columns.push(convert_bucket_to_column(split, &bucket_ctx, true)?);
    }

    let metric_ids: Vec<String> = metric_columns.iter().map(|c| c.column_id.clone()).collect();
    let bucket_ids: Vec<String> = bucket_columns
        .iter()
        .chain(&split_columns)
        .chain(&custom_bucket_columns)
        .map(|c| c.column_id.clone())
        .collect();

    let mut all_columns = metric_columns;
    all_columns.extend(bucket_columns);
    all_columns.extend(split_columns);
    all_columns.extend(custom_bucket_columns);

    let columns = sort_columns(all_columns, &metrics, &schemas);
    let column_order = visible_column_ids(&columns);

    let layer = Layer {
        layer_id: new_id(),
        index_pattern: vis.index_pattern.clone(),
        columns,
        column_order,
    };

    Ok(ConversionResult {
        layers: vec![layer],
        metrics: metric_ids,
        buckets: bucket_ids,
        bucket_collapse_fn: bucket_collapse_fn(&schemas),
    })
}

/// Validation gate run before any conversion work: mixed sibling
/// pipeline sub-types are rejected, as are sibling pipelines combined
/// with split aggregations.
fn validate_combination(schemas: &VisSchemas) -> Result<(), ConvertError> {
    let siblings: Vec<&SchemaAgg> = schemas
        .metrics
        .iter()
        .filter(|m| m.kind.is_some_and(|k| k.is_sibling_pipeline()))
        .collect();

    let Some(first) = siblings.first() else {
        return Ok(());
    };

    if siblings.iter().any(|s| s.kind != first.kind) {
        return Err(ConvertError::IncompatibleCombination(
            "mixed sibling pipeline aggregations".to_string(),
        ));
    }

    if !schemas.splits.is_empty() {
        return Err(ConvertError::IncompatibleCombination(
            "sibling pipeline aggregations cannot be combined with splits".to_string(),
        ));
    }

    Ok(())
}

/// One metric may be both displayed and consumed by a pipeline; keep the
/// first occurrence of each aggregation id, in original order.
fn metrics_without_duplicates(metrics: &[SchemaAgg]) -> Vec<SchemaAgg> {
    let mut deduped: Vec<SchemaAgg> = Vec::new();
    for metric in metrics {
        if !deduped.iter().any(|m| m.agg_id == metric.agg_id) {
            deduped.push(metric.clone());
        }
    }
    deduped
}

/// Distinct custom buckets requested by sibling pipelines, compared by
/// definition rather than id.
fn custom_buckets_from_siblings(metrics: &[SchemaAgg]) -> Vec<RawAgg> {
    let mut buckets: Vec<RawAgg> = Vec::new();
    for metric in metrics {
        if !metric.kind.is_some_and(|k| k.is_sibling_pipeline()) {
            continue;
        }
        let Some(bucket) = metric.params.custom_bucket.as_deref() else {
            continue;
        };
        if !buckets.iter().any(|b| same_definition(b, bucket)) {
            buckets.push(bucket.clone());
        }
    }
    buckets
}

fn same_definition(a: &RawAgg, b: &RawAgg) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.id.clear();
    b.id.clear();
    a == b
}

fn bucket_collapse_fn(schemas: &VisSchemas) -> Option<String> {
    schemas
        .metrics
        .iter()
        .find(|m| m.kind.is_some_and(|k| k.is_sibling_pipeline()))
        .and_then(|m| m.kind)
        .and_then(|k| k.collapse_fn())
        .map(str::to_string)
}
