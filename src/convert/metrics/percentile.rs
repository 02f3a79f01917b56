use super::{MetricContext, basic::resolve_field, format_number};
use crate::convert::column::{Column, ColumnParams, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::schema::types::SchemaAgg;

/// Expands a percentiles metric into one column per requested value.
pub fn convert_percentiles(
    agg: &SchemaAgg,
    ctx: &MetricContext<'_>,
) -> Result<Vec<Column>, ConvertError> {
    let percents = required_values(agg, agg.params.percents.as_deref(), "percentile")?;
    let field = resolve_field(agg, ctx)?;

    Ok(percents
        .iter()
        .map(|&percentile| {
            let mut column = create_column(
                agg,
                OperationType::Percentile,
                Some(field),
                ExtraColumnFields {
                    window: ctx.window,
                    ..Default::default()
                },
            );
            column.params = ColumnParams::Percentile { percentile };
            if percents.len() > 1 {
                column.meta.agg_id = format!("{}-{}", agg.agg_id, format_number(percentile));
            }
            column
        })
        .collect())
}

/// Expands a percentile-ranks metric into one column per requested value.
pub fn convert_percentile_ranks(
    agg: &SchemaAgg,
    ctx: &MetricContext<'_>,
) -> Result<Vec<Column>, ConvertError> {
    let values = required_values(agg, agg.params.values.as_deref(), "percentile rank")?;
    let field = resolve_field(agg, ctx)?;

    Ok(values
        .iter()
        .map(|&value| {
            let mut column = create_column(
                agg,
                OperationType::PercentileRank,
                Some(field),
                ExtraColumnFields {
                    window: ctx.window,
                    ..Default::default()
                },
            );
            column.params = ColumnParams::PercentileRank { value };
            if values.len() > 1 {
                column.meta.agg_id = format!("{}-{}", agg.agg_id, format_number(value));
            }
            column
        })
        .collect())
}

/// A percentile-family metric needs at least one finite numeric value.
fn required_values<'a>(
    agg: &SchemaAgg,
    values: Option<&'a [f64]>,
    what: &str,
) -> Result<&'a [f64], ConvertError> {
    let values = values.filter(|v| !v.is_empty()).ok_or_else(|| {
        ConvertError::invalid_parameter(&agg.agg_id, format!("missing {what} values"))
    })?;

    if values.iter().any(|v| !v.is_finite()) {
        return Err(ConvertError::invalid_parameter(
            &agg.agg_id,
            format!("non-numeric {what} value"),
        ));
    }

    Ok(values)
}
