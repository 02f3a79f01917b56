use super::agg::AggKind;
use super::types::{AggGroup, LegacyVis, RawAgg, SchemaAgg, VisSchemas};

/// Normalizes the raw aggregation list into grouped descriptors: stable
/// kind, effective label, filled-in multi-value parameters, and accessor
/// indices assigned in metric, bucket, split priority.
///
/// Pure and infallible; unrecognized type tags are carried as
/// `kind: None` and rejected later by the pipeline.
pub fn normalize_vis(vis: &LegacyVis) -> VisSchemas {
    let mut schemas = VisSchemas::default();

    for raw in &vis.aggs {
        match raw.group {
            AggGroup::Metric => schemas.metrics.push(normalize_agg(raw)),
            AggGroup::Bucket => schemas.buckets.push(normalize_agg(raw)),
            AggGroup::Split => schemas.splits.push(normalize_agg(raw)),
        }
    }

    let mut accessor = 0;
    for agg in schemas
        .metrics
        .iter_mut()
        .chain(schemas.buckets.iter_mut())
        .chain(schemas.splits.iter_mut())
    {
        agg.accessor = accessor;
        accessor += 1;
    }

    schemas
}

/// Normalizes one raw aggregation into a descriptor.
pub fn normalize_agg(raw: &RawAgg) -> SchemaAgg {
    let kind = AggKind::from_tag(&raw.agg_type);
    let mut params = raw.params.clone();

    // Legacy configs may carry a single scalar where the target schema
    // expects a multi-value array.
    if kind == Some(AggKind::Percentiles) && params.percents.is_none() {
        params.percents = params.percentile.map(|p| vec![p]);
    }
    if kind == Some(AggKind::PercentileRanks) && params.values.is_none() {
        params.values = params.value.map(|v| vec![v]);
    }

    let label = match &raw.custom_label {
        Some(custom) if !custom.is_empty() => custom.clone(),
        _ => raw.label.clone(),
    };

    SchemaAgg {
        agg_id: raw.id.clone(),
        kind,
        agg_type: raw.agg_type.clone(),
        group: raw.group,
        field: raw.field.clone(),
        label,
        format: raw.format.clone(),
        accessor: 0,
        params,
    }
}
