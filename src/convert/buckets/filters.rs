use crate::convert::column::{Column, ColumnParams, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::schema::types::SchemaAgg;

/// Converts a filters bucket. Filters carry no source field; the query
/// entries pass through with their labels and negation flags.
pub fn convert(agg: &SchemaAgg, is_split: bool) -> Result<Column, ConvertError> {
    let filters = agg
        .params
        .filters
        .clone()
        .ok_or_else(|| ConvertError::invalid_parameter(&agg.agg_id, "missing filter entries"))?;

    let mut column = create_column(
        agg,
        OperationType::Filters,
        None,
        ExtraColumnFields {
            is_bucketed: true,
            is_split,
            ..Default::default()
        },
    );
    column.params = ColumnParams::Filters { filters };
    Ok(column)
}
