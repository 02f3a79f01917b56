use super::{MetricContext, format_number, std_dev};
use crate::convert::column::{Column, ColumnParams, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::convert::reference::PipelineRef;
use crate::schema::agg::AggKind;
use crate::schema::types::SchemaAgg;

/// Converts a formula-backed metric (sibling pipelines, counter rate,
/// filter ratio, static) into a single formula column.
pub fn convert(
    agg: &SchemaAgg,
    kind: AggKind,
    ctx: &MetricContext<'_>,
) -> Result<Column, ConvertError> {
    let formula = formula_equivalent(agg, kind, ctx.metrics, None, ctx.window)?;

    let mut column = create_column(
        agg,
        OperationType::Formula,
        None,
        ExtraColumnFields {
            window: ctx.window,
            ..Default::default()
        },
    );
    column.params = ColumnParams::Formula { formula };
    Ok(column)
}

/// Synthesizes the formula text for one metric, per the fixed per-kind
/// templates. `meta` carries a nested parameter supplied by a pipeline
/// reference; `window` adds the `timeRange` argument.
pub fn formula_equivalent(
    agg: &SchemaAgg,
    kind: AggKind,
    metrics: &[SchemaAgg],
    meta: Option<f64>,
    window: Option<&str>,
) -> Result<String, ConvertError> {
    match kind {
        AggKind::AvgBucket
        | AggKind::SumBucket
        | AggKind::MinBucket
        | AggKind::MaxBucket
        | AggKind::PositiveOnly => sibling_pipeline_formula(kind, agg, metrics),
        AggKind::Count => Ok("count()".to_string()),
        AggKind::Percentiles => {
            let field = required_field(agg)?;
            let value = meta.or_else(|| first_value(agg.params.percents.as_deref()));
            let arg = value
                .map(|v| format!(", percentile={}", format_number(v)))
                .unwrap_or_default();
            Ok(format!(
                "percentile({field}{arg}{})",
                time_range_arg(window)
            ))
        }
        AggKind::PercentileRanks => {
            let field = required_field(agg)?;
            let value = meta.or_else(|| first_value(agg.params.values.as_deref()));
            let arg = value
                .map(|v| format!(", value={}", format_number(v)))
                .unwrap_or_default();
            Ok(format!(
                "percentile_rank({field}{arg}{})",
                time_range_arg(window)
            ))
        }
        AggKind::CumulativeSum | AggKind::Derivative | AggKind::MovingAvg => {
            parent_pipeline_formula(kind, agg, metrics, window)
        }
        AggKind::PositiveRate => {
            let field = required_field(agg)?;
            Ok(counter_rate_formula(field))
        }
        AggKind::FilterRatio => Ok(filter_ratio_formula(agg)),
        AggKind::Static => {
            let value = agg.params.static_value.ok_or_else(|| {
                ConvertError::invalid_parameter(&agg.agg_id, "missing static value")
            })?;
            Ok(format_number(value))
        }
        AggKind::StdDev => {
            let field = required_field(agg)?;
            Ok(std_dev::bound_formula(agg, field))
        }
        AggKind::Avg
        | AggKind::Sum
        | AggKind::Min
        | AggKind::Max
        | AggKind::Median
        | AggKind::Cardinality
        | AggKind::ValueCount => {
            let function = kind
                .formula_fn()
                .ok_or_else(|| ConvertError::UnsupportedAggregation(agg.agg_type.clone()))?;
            let field = required_field(agg)?;
            Ok(format!("{function}({field}{})", time_range_arg(window)))
        }
        AggKind::DateHistogram | AggKind::Terms | AggKind::Filters => Err(
            ConvertError::UnsupportedAggregation(format!("{} has no formula", agg.agg_type)),
        ),
    }
}

/// Sibling pipeline formula: the referenced metric's own formula nested
/// inside the outer aggregation, recursing one level when the reference
/// itself points at another metric. Positive-only clamps at zero.
fn sibling_pipeline_formula(
    outer: AggKind,
    agg: &SchemaAgg,
    metrics: &[SchemaAgg],
) -> Result<String, ConvertError> {
    let reference = agg.params.metric_ref.as_deref().ok_or_else(|| {
        ConvertError::UnresolvedReference(format!("{} has no metric reference", agg.agg_id))
    })?;
    let parsed = PipelineRef::parse(reference);

    let sub = metrics
        .iter()
        .find(|m| m.agg_id == parsed.target_id)
        .ok_or_else(|| ConvertError::UnresolvedReference(reference.to_string()))?;
    let sub_kind = sub
        .kind
        .filter(|k| *k != AggKind::Static)
        .ok_or_else(|| ConvertError::UnsupportedAggregation(sub.agg_type.clone()))?;
    let sub_fn = sub_kind
        .formula_fn()
        .ok_or_else(|| ConvertError::UnsupportedAggregation(sub.agg_type.clone()))?;
    let outer_fn = outer
        .formula_fn()
        .ok_or_else(|| ConvertError::UnsupportedAggregation(agg.agg_type.clone()))?;

    let sub_field = if sub_kind == AggKind::Count {
        ""
    } else {
        sub.field.as_deref().unwrap_or("")
    };
    let clamp = if outer == AggKind::PositiveOnly {
        ", 0"
    } else {
        ""
    };

    // A sub-metric field naming another metric id is a formula of a
    // formula; compose one level deeper.
    if let Some(nested) = metrics.iter().find(|m| m.agg_id == sub_field) {
        let nested_kind = nested
            .kind
            .ok_or_else(|| ConvertError::UnsupportedAggregation(nested.agg_type.clone()))?;
        let nested_fn = nested_kind
            .formula_fn()
            .ok_or_else(|| ConvertError::UnsupportedAggregation(nested.agg_type.clone()))?;
        let nested_field = if nested_kind == AggKind::Count {
            ""
        } else {
            nested.field.as_deref().unwrap_or("")
        };
        return Ok(format!(
            "{outer_fn}({sub_fn}({nested_fn}({nested_field})){clamp})"
        ));
    }

    let extra_args = match (sub_kind, parsed.nested_meta) {
        (AggKind::Percentiles, Some(meta)) => format!(", percentile={}", format_number(meta)),
        (AggKind::PercentileRanks, Some(meta)) => format!(", value={}", format_number(meta)),
        _ => String::new(),
    };

    Ok(format!("{outer_fn}({sub_fn}({sub_field}{extra_args}){clamp})"))
}

/// Parent pipeline formula: the outer function wrapped around the
/// referenced metric's formula equivalent.
fn parent_pipeline_formula(
    kind: AggKind,
    agg: &SchemaAgg,
    metrics: &[SchemaAgg],
    window: Option<&str>,
) -> Result<String, ConvertError> {
    let reference = agg.params.metric_ref.as_deref().ok_or_else(|| {
        ConvertError::UnresolvedReference(format!("{} has no metric reference", agg.agg_id))
    })?;
    let parsed = PipelineRef::parse(reference);

    let sub = metrics
        .iter()
        .find(|m| m.agg_id == parsed.target_id && m.agg_id != agg.agg_id)
        .ok_or_else(|| ConvertError::UnresolvedReference(reference.to_string()))?;
    let sub_kind = sub
        .kind
        .ok_or_else(|| ConvertError::UnsupportedAggregation(sub.agg_type.clone()))?;

    let function = kind
        .formula_fn()
        .ok_or_else(|| ConvertError::UnsupportedAggregation(agg.agg_type.clone()))?;
    let inner = formula_equivalent(sub, sub_kind, metrics, parsed.nested_meta, window)?;
    Ok(format!("{function}({inner})"))
}

/// Monotonic counters are maxed per bucket before differencing.
fn counter_rate_formula(field: &str) -> String {
    format!("counter_rate(max({field}))")
}

/// Ratio of two filtered counts; absent queries fall back to match-all.
fn filter_ratio_formula(agg: &SchemaAgg) -> String {
    let numerator = agg.params.numerator.as_deref().unwrap_or("*");
    let denominator = agg.params.denominator.as_deref().unwrap_or("*");
    format!("count(kql='{numerator}') / count(kql='{denominator}')")
}

fn time_range_arg(window: Option<&str>) -> String {
    window
        .map(|w| format!(", timeRange='{w}'"))
        .unwrap_or_default()
}

fn required_field(agg: &SchemaAgg) -> Result<&str, ConvertError> {
    agg.field
        .as_deref()
        .ok_or_else(|| ConvertError::invalid_parameter(&agg.agg_id, "missing source field"))
}

fn first_value(values: Option<&[f64]>) -> Option<f64> {
    values.and_then(|v| v.first().copied())
}
