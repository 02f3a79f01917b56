use super::BucketContext;
use crate::convert::column::{Column, ColumnParams, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::schema::types::SchemaAgg;

/// Converts a date-histogram bucket. Also the target of the
/// terms-on-date promotion, which passes the terms field through.
pub fn convert(
    agg: &SchemaAgg,
    ctx: &BucketContext<'_>,
    field_name: Option<&str>,
    is_split: bool,
) -> Result<Column, ConvertError> {
    let name = field_name
        .ok_or_else(|| ConvertError::invalid_parameter(&agg.agg_id, "missing date field"))?;
    let field = ctx
        .fields
        .field_by_name(name)
        .ok_or_else(|| ConvertError::MissingField(name.to_string()))?;

    let mut column = create_column(
        agg,
        OperationType::DateHistogram,
        Some(field),
        ExtraColumnFields {
            is_bucketed: true,
            is_split,
            ..Default::default()
        },
    );
    column.params = ColumnParams::DateHistogram {
        interval: interval_of(ctx.vis.interval.as_deref()),
        drop_partials: drop_partials_of(agg, ctx),
        include_empty_rows: !ctx.drop_empty_rows,
    };
    Ok(column)
}

/// The panel interval is used as-is unless it carries advanced `=`
/// syntax, which the target schema cannot express.
fn interval_of(interval: Option<&str>) -> String {
    match interval {
        Some(value) if !value.is_empty() && !value.contains('=') => value.to_string(),
        _ => "auto".to_string(),
    }
}

/// Per-series override wins over the panel default when the series runs
/// against its own index pattern.
fn drop_partials_of(agg: &SchemaAgg, ctx: &BucketContext<'_>) -> bool {
    if agg.params.override_index_pattern {
        agg.params.series_drop_partials.unwrap_or(false)
    } else {
        ctx.vis.drop_partial_buckets
    }
}
