mod date_histogram;
mod filters;
mod terms;

#[cfg(test)]
mod date_histogram_test;

use crate::convert::column::Column;
use crate::convert::error::ConvertError;
use crate::schema::agg::AggKind;
use crate::schema::datasource::FieldResolver;
use crate::schema::types::{LegacyVis, SchemaAgg};

/// Shared inputs of the bucket converters: the field snapshot, the panel
/// the bucket belongs to, and the already-converted metric columns
/// (needed for terms ordering).
pub struct BucketContext<'a> {
    pub fields: &'a dyn FieldResolver,
    pub vis: &'a LegacyVis,
    pub metric_columns: &'a [Column],
    pub drop_empty_rows: bool,
}

/// Converts one bucket aggregation into a column. `is_split` marks
/// buckets that partition into separate series rather than rows.
pub fn convert_bucket_to_column(
    agg: &SchemaAgg,
    ctx: &BucketContext<'_>,
    is_split: bool,
) -> Result<Column, ConvertError> {
    match agg.kind {
        Some(AggKind::DateHistogram) => {
            date_histogram::convert(agg, ctx, agg.field.as_deref(), is_split)
        }
        Some(AggKind::Terms) => terms::convert(agg, ctx, is_split),
        Some(AggKind::Filters) => filters::convert(agg, is_split),
        Some(_) | None => Err(ConvertError::UnsupportedAggregation(format!(
            "{} in a bucket slot",
            agg.agg_type
        ))),
    }
}
