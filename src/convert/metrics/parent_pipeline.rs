use super::{MAX_REFERENCE_DEPTH, MetricContext, convert_at_depth};
use crate::convert::column::{
    Column, ColumnParams, ExtraColumnFields, OperationType, create_column,
};
use crate::convert::error::ConvertError;
use crate::convert::reference::PipelineRef;
use crate::schema::agg::AggKind;
use crate::schema::types::SchemaAgg;

/// Converts a parent pipeline metric (cumulative sum, derivative, moving
/// average): the referenced metric becomes its own column and the outer
/// column points at it through `references`.
pub fn convert(
    agg: &SchemaAgg,
    kind: AggKind,
    ctx: &MetricContext<'_>,
    depth: usize,
) -> Result<Vec<Column>, ConvertError> {
    if depth >= MAX_REFERENCE_DEPTH {
        return Err(ConvertError::UnresolvedReference(format!(
            "{}: reference chain too deep",
            agg.agg_id
        )));
    }

    let operation = match kind {
        AggKind::CumulativeSum => OperationType::CumulativeSum,
        AggKind::Derivative => OperationType::Differences,
        AggKind::MovingAvg => OperationType::MovingAverage,
        other => {
            return Err(ConvertError::invalid_parameter(
                &agg.agg_id,
                format!("{other:?} is not a parent pipeline metric"),
            ));
        }
    };

    let reference = agg.params.metric_ref.as_deref().ok_or_else(|| {
        ConvertError::UnresolvedReference(format!("{} has no metric reference", agg.agg_id))
    })?;
    let parsed = PipelineRef::parse(reference);

    let target = ctx
        .metrics
        .iter()
        .find(|m| m.agg_id == parsed.target_id && m.agg_id != agg.agg_id)
        .ok_or_else(|| ConvertError::UnresolvedReference(reference.to_string()))?;

    let mut columns = convert_at_depth(target, ctx, depth + 1)?;
    let referenced_id = select_reference(&columns, parsed.nested_meta)
        .ok_or_else(|| ConvertError::UnresolvedReference(reference.to_string()))?;

    let mut outer = create_column(
        agg,
        operation,
        None,
        ExtraColumnFields {
            window: ctx.window,
            ..Default::default()
        },
    );
    outer.references = vec![referenced_id];
    columns.push(outer);
    Ok(columns)
}

/// Multi-value referenced metrics expand into several columns; the
/// nested meta picks which one the pipeline consumes. Without a meta,
/// the referenced metric's own column is last in the sub-conversion
/// output (chained pipelines emit their dependencies first).
fn select_reference(columns: &[Column], nested_meta: Option<f64>) -> Option<String> {
    if let Some(meta) = nested_meta {
        let matched = columns.iter().find(|c| match c.params {
            ColumnParams::Percentile { percentile } => percentile == meta,
            ColumnParams::PercentileRank { value } => value == meta,
            _ => false,
        });
        if let Some(column) = matched {
            return Some(column.column_id.clone());
        }
    }
    columns.last().map(|c| c.column_id.clone())
}
