use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::datasource::{FieldMeta, FieldType};
use crate::schema::types::{FilterEntry, SchemaAgg};

/// Operation the target schema runs for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Count,
    Average,
    Sum,
    Min,
    Max,
    Median,
    UniqueCount,
    Percentile,
    PercentileRank,
    CumulativeSum,
    Differences,
    MovingAverage,
    DateHistogram,
    Terms,
    Filters,
    Formula,
    StaticValue,
}

/// Time-scale unit attached to "per unit" metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeScaleUnit {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
}

impl TimeScaleUnit {
    /// Parses the legacy `1s|1m|1h|1d` unit family.
    pub fn from_legacy_unit(unit: &str) -> Option<Self> {
        match unit {
            "1s" => Some(Self::Second),
            "1m" => Some(Self::Minute),
            "1h" => Some(Self::Hour),
            "1d" => Some(Self::Day),
            _ => None,
        }
    }
}

/// Terms ordering source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsOrderBy {
    Alphabetical,
    Column { column_id: String },
}

/// Per-operation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnParams {
    None,
    Percentile {
        percentile: f64,
    },
    PercentileRank {
        value: f64,
    },
    DateHistogram {
        interval: String,
        drop_partials: bool,
        include_empty_rows: bool,
    },
    Terms {
        size: u32,
        order_by: TermsOrderBy,
        order_desc: bool,
    },
    Filters {
        filters: Vec<FilterEntry>,
    },
    Formula {
        formula: String,
    },
    StaticValue {
        value: f64,
    },
}

/// Link back to the aggregation a column was produced from. Multi-value
/// aggregations suffix the value after a `-`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub agg_id: String,
}

/// The normalized output unit: one aggregation's contribution to a
/// layer. Owned by the conversion run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub column_id: String,
    pub operation_type: OperationType,
    pub label: String,
    pub data_type: Option<FieldType>,
    pub source_field: Option<String>,
    pub is_bucketed: bool,
    pub is_split: bool,
    pub time_scale: Option<TimeScaleUnit>,
    pub window: Option<String>,
    /// Column ids this column consumes internally.
    pub references: Vec<String>,
    pub format: Option<Value>,
    pub params: ColumnParams,
    pub meta: ColumnMeta,
}

/// A renderable grouping of columns tied to one data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub layer_id: String,
    pub index_pattern: String,
    /// Every produced column, including internally referenced ones.
    pub columns: Vec<Column>,
    /// Externally visible column ids, in accessor order.
    pub column_order: Vec<String>,
}

/// Success value of a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub layers: Vec<Layer>,
    /// Column ids of the metric columns.
    pub metrics: Vec<String>,
    /// Column ids of bucket, split, and custom-bucket columns.
    pub buckets: Vec<String>,
    pub bucket_collapse_fn: Option<String>,
}

/// Generates a fresh column/layer id, unique per conversion run.
pub fn new_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Extra knobs for [`create_column`], all off by default.
#[derive(Debug, Clone, Default)]
pub struct ExtraColumnFields<'a> {
    pub is_bucketed: bool,
    pub is_split: bool,
    pub window: Option<&'a str>,
}

/// Builds a column skeleton from a descriptor: fresh id, label, data
/// type, time scale, and the meta link back to the aggregation.
pub fn create_column(
    agg: &SchemaAgg,
    operation_type: OperationType,
    field: Option<&FieldMeta>,
    extra: ExtraColumnFields<'_>,
) -> Column {
    Column {
        column_id: new_id(),
        operation_type,
        label: agg.label.clone(),
        data_type: field.map(|f| f.field_type),
        source_field: field.map(|f| f.name.clone()),
        is_bucketed: extra.is_bucketed,
        is_split: extra.is_split,
        time_scale: agg
            .params
            .unit
            .as_deref()
            .and_then(TimeScaleUnit::from_legacy_unit),
        window: extra.window.map(str::to_string),
        references: Vec::new(),
        format: agg.format.clone(),
        params: ColumnParams::None,
        meta: ColumnMeta {
            agg_id: agg.agg_id.clone(),
        },
    }
}
