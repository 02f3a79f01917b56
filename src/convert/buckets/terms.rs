use super::{BucketContext, date_histogram};
use crate::convert::column::{
    Column, ColumnParams, ExtraColumnFields, OperationType, TermsOrderBy, create_column,
};
use crate::convert::error::ConvertError;
use crate::convert::ordering::base_agg_id;
use crate::schema::datasource::FieldType;
use crate::schema::types::SchemaAgg;

const DEFAULT_SIZE: u32 = 5;

/// Converts a terms bucket. Terms over a date field are re-routed to the
/// date-histogram converter: grouping a date by discrete values is
/// treated as a date-histogram grouping in the target schema.
pub fn convert(
    agg: &SchemaAgg,
    ctx: &BucketContext<'_>,
    is_split: bool,
) -> Result<Column, ConvertError> {
    let name = agg
        .field
        .as_deref()
        .ok_or_else(|| ConvertError::invalid_parameter(&agg.agg_id, "missing terms field"))?;
    let field = ctx
        .fields
        .field_by_name(name)
        .ok_or_else(|| ConvertError::MissingField(name.to_string()))?;

    if field.field_type == FieldType::Date {
        return date_histogram::convert(agg, ctx, Some(name), is_split);
    }

    let mut column = create_column(
        agg,
        OperationType::Terms,
        Some(field),
        ExtraColumnFields {
            is_bucketed: true,
            is_split,
            ..Default::default()
        },
    );
    column.params = ColumnParams::Terms {
        size: agg.params.size.unwrap_or(DEFAULT_SIZE),
        order_by: order_by(agg, ctx)?,
        order_desc: agg.params.order_desc,
    };
    Ok(column)
}

/// Ordering by a metric resolves the legacy aggregation id to the
/// converted metric column.
fn order_by(agg: &SchemaAgg, ctx: &BucketContext<'_>) -> Result<TermsOrderBy, ConvertError> {
    match agg.params.order_by.as_deref() {
        None | Some("_key") | Some("_term") => Ok(TermsOrderBy::Alphabetical),
        Some(metric_id) => ctx
            .metric_columns
            .iter()
            .find(|c| base_agg_id(&c.meta.agg_id) == metric_id)
            .map(|c| TermsOrderBy::Column {
                column_id: c.column_id.clone(),
            })
            .ok_or_else(|| ConvertError::UnresolvedReference(metric_id.to_string())),
    }
}
