use super::MetricContext;
use crate::convert::column::{Column, ExtraColumnFields, OperationType, create_column};
use crate::convert::error::ConvertError;
use crate::schema::agg::AggKind;
use crate::schema::types::SchemaAgg;

/// Converts the metrics that carry no special parameters. Count is the
/// only one without a source field; value-count maps to a fielded count.
pub fn convert(
    agg: &SchemaAgg,
    kind: AggKind,
    ctx: &MetricContext<'_>,
) -> Result<Column, ConvertError> {
    let operation = match kind {
        AggKind::Count => OperationType::Count,
        AggKind::Avg => OperationType::Average,
        AggKind::Sum => OperationType::Sum,
        AggKind::Min => OperationType::Min,
        AggKind::Max => OperationType::Max,
        AggKind::Median => OperationType::Median,
        AggKind::Cardinality => OperationType::UniqueCount,
        AggKind::ValueCount => OperationType::Count,
        other => {
            return Err(ConvertError::invalid_parameter(
                &agg.agg_id,
                format!("{other:?} is not a parameterless metric"),
            ));
        }
    };

    let field = if kind == AggKind::Count {
        None
    } else {
        Some(resolve_field(agg, ctx)?)
    };

    Ok(create_column(
        agg,
        operation,
        field,
        ExtraColumnFields {
            window: ctx.window,
            ..Default::default()
        },
    ))
}

pub(super) fn resolve_field<'a>(
    agg: &SchemaAgg,
    ctx: &MetricContext<'a>,
) -> Result<&'a crate::schema::datasource::FieldMeta, ConvertError> {
    let name = agg
        .field
        .as_deref()
        .ok_or_else(|| ConvertError::invalid_parameter(&agg.agg_id, "missing source field"))?;
    ctx.fields
        .field_by_name(name)
        .ok_or_else(|| ConvertError::MissingField(name.to_string()))
}
