use super::{MetricContext, basic::resolve_field, format_number};
use crate::convert::column::{Column, ColumnParams, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::schema::types::{SchemaAgg, StdDevBound};

const DEFAULT_SIGMA: f64 = 1.5;

/// Standard deviation converts to a formula column; the upper and lower
/// bound modes band the average by sigma times the deviation.
pub fn convert(agg: &SchemaAgg, ctx: &MetricContext<'_>) -> Result<Column, ConvertError> {
    let field = resolve_field(agg, ctx)?;
    let formula = bound_formula(agg, &field.name);

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

pub(super) fn bound_formula(agg: &SchemaAgg, field: &str) -> String {
    let sigma = agg.params.sigma.unwrap_or(DEFAULT_SIGMA);
    match agg.params.bound {
        None => format!("standard_deviation({field})"),
        Some(StdDevBound::Upper) => format!(
            "average({field}) + {} * standard_deviation({field})",
            format_number(sigma)
        ),
        Some(StdDevBound::Lower) => format!(
            "average({field}) - {} * standard_deviation({field})",
            format_number(sigma)
        ),
    }
}
