use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::agg::AggKind;

/// Which slot of the visualization an aggregation fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggGroup {
    Metric,
    Bucket,
    Split,
}

/// How the panel interprets the active time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRangeMode {
    EntireRange,
    LastValue,
}

/// Absolute time range handed in alongside the visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Standard-deviation bound selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdDevBound {
    Upper,
    Lower,
}

/// One entry of a filters bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub query: String,
    pub label: Option<String>,
    #[serde(default)]
    pub negate: bool,
}

/// Parameters attached to a legacy aggregation. All fields are optional;
/// each converter reads only the ones its kind defines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggParams {
    /// Multi-value percentiles, or the legacy single-value form.
    pub percents: Option<Vec<f64>>,
    pub percentile: Option<f64>,
    /// Multi-value percentile ranks, or the legacy single-value form.
    pub values: Option<Vec<f64>>,
    pub value: Option<f64>,
    pub sigma: Option<f64>,
    pub bound: Option<StdDevBound>,
    /// Composite pipeline reference, `<metricId>` or `<metricId>[<meta>]`.
    pub metric_ref: Option<String>,
    /// Bucket a sibling pipeline aggregates over.
    pub custom_bucket: Option<Box<RawAgg>>,
    pub size: Option<u32>,
    /// Terms ordering: `_key` or a metric aggregation id.
    pub order_by: Option<String>,
    #[serde(default)]
    pub order_desc: bool,
    #[serde(default)]
    pub override_index_pattern: bool,
    pub series_drop_partials: Option<bool>,
    pub filters: Option<Vec<FilterEntry>>,
    pub numerator: Option<String>,
    pub denominator: Option<String>,
    pub static_value: Option<f64>,
    /// Time scale unit of the `1s|1m|1h|1d` family.
    pub unit: Option<String>,
}

/// One aggregation as the legacy visualization engine describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAgg {
    pub id: String,
    pub agg_type: String,
    pub group: AggGroup,
    pub field: Option<String>,
    pub custom_label: Option<String>,
    pub label: String,
    /// Serialized field-format hint, kept opaque.
    pub format: Option<Value>,
    #[serde(default)]
    pub params: AggParams,
}

/// The legacy visualization handed to the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyVis {
    pub index_pattern: String,
    pub aggs: Vec<RawAgg>,
    /// Panel-level date interval, may carry advanced `=` syntax.
    pub interval: Option<String>,
    #[serde(default)]
    pub drop_partial_buckets: bool,
    pub time_range_mode: TimeRangeMode,
}

/// A normalized aggregation descriptor: stable kind, resolved label,
/// filled-in multi-value parameters, and the accessor index correlating
/// it with its position in the original tabular result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaAgg {
    pub agg_id: String,
    /// `None` when the legacy type tag is not in the supported set;
    /// validity is enforced by the pipeline, not the normalizer.
    pub kind: Option<AggKind>,
    pub agg_type: String,
    pub group: AggGroup,
    pub field: Option<String>,
    pub label: String,
    pub format: Option<Value>,
    pub accessor: usize,
    pub params: AggParams,
}

/// Aggregations grouped by the slot they fill, in original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisSchemas {
    pub metrics: Vec<SchemaAgg>,
    pub buckets: Vec<SchemaAgg>,
    pub splits: Vec<SchemaAgg>,
}
