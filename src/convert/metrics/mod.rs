mod basic;
mod formula;
mod parent_pipeline;
mod percentile;
mod std_dev;


pub use formula::formula_equivalent;

use crate::convert::column::Column;
use crate::convert::error::ConvertError;
use crate::schema::agg::AggKind;
use crate::schema::datasource::FieldResolver;
use crate::schema::types::SchemaAgg;

/// Pipeline references may chain through other metrics; anything deeper
/// than this is treated as unresolvable.
const MAX_REFERENCE_DEPTH: usize = 4;

/// Everything a metric converter may need: the field snapshot, the
/// deduplicated metric list for pipeline references, and the active
/// last-value window.
pub struct MetricContext<'a> {
    pub fields: &'a dyn FieldResolver,
    pub metrics: &'a [SchemaAgg],
    pub window: Option<&'a str>,
}

/// Converts one metric aggregation into columns. Most kinds produce a
/// single column; percentiles expand per value and parent pipelines emit
/// the referenced column alongside their own.
pub fn convert_metric_to_columns(
    agg: &SchemaAgg,
    ctx: &MetricContext<'_>,
) -> Result<Vec<Column>, ConvertError> {
    convert_at_depth(agg, ctx, 0)
}

pub(super) fn convert_at_depth(
    agg: &SchemaAgg,
    ctx: &MetricContext<'_>,
    depth: usize,
) -> Result<Vec<Column>, ConvertError> {
    let Some(kind) = agg.kind else {
        return Err(ConvertError::UnsupportedAggregation(agg.agg_type.clone()));
    };

    match kind {
        AggKind::Count
        | AggKind::Avg
        | AggKind::Sum
        | AggKind::Min
        | AggKind::Max
        | AggKind::Median
        | AggKind::Cardinality
        | AggKind::ValueCount => basic::convert(agg, kind, ctx).map(|column| vec![column]),
        AggKind::Percentiles => percentile::convert_percentiles(agg, ctx),
        AggKind::PercentileRanks => percentile::convert_percentile_ranks(agg, ctx),
        AggKind::StdDev => std_dev::convert(agg, ctx).map(|column| vec![column]),
        AggKind::CumulativeSum | AggKind::Derivative | AggKind::MovingAvg => {
            parent_pipeline::convert(agg, kind, ctx, depth)
        }
        AggKind::AvgBucket
        | AggKind::SumBucket
        | AggKind::MinBucket
        | AggKind::MaxBucket
        | AggKind::PositiveOnly
        | AggKind::PositiveRate
        | AggKind::FilterRatio
        | AggKind::Static => formula::convert(agg, kind, ctx).map(|column| vec![column]),
        AggKind::DateHistogram | AggKind::Terms | AggKind::Filters => Err(
            ConvertError::UnsupportedAggregation(format!("{} in a metric slot", agg.agg_type)),
        ),
    }
}

/// Formats a numeric parameter without a trailing fractional zero.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
