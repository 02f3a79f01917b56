use indexmap::IndexMap;

use crate::convert::column::Column;
use crate::schema::types::{SchemaAgg, VisSchemas};

/// Strips the multi-value suffix from an internal meta aggregation id.
pub fn base_agg_id(agg_id: &str) -> &str {
    agg_id.split('-').next().unwrap_or(agg_id)
}

/// Sorts columns by the accessor index of their originating aggregation.
/// The map is built metric first, then buckets, then splits; columns
/// with no originating accessor (custom buckets) sort last.
pub fn sort_columns(
    mut columns: Vec<Column>,
    deduped_metrics: &[SchemaAgg],
    schemas: &VisSchemas,
) -> Vec<Column> {
    let mut order: IndexMap<&str, usize> = IndexMap::new();
    for agg in deduped_metrics
        .iter()
        .chain(&schemas.buckets)
        .chain(&schemas.splits)
    {
        order.entry(agg.agg_id.as_str()).or_insert(agg.accessor);
    }

    columns.sort_by_key(|column| {
        order
            .get(base_agg_id(&column.meta.agg_id))
            .copied()
            .unwrap_or(usize::MAX)
    });
    columns
}

/// A column is referenced when another column consumes it internally.
pub fn is_referenced(columns: &[Column], column_id: &str) -> bool {
    columns
        .iter()
        .any(|column| column.references.iter().any(|r| r == column_id))
}

/// Externally visible column ids: referenced-only columns stay in the
/// full set but leave the visible order.
pub fn visible_column_ids(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .filter(|column| !is_referenced(columns, &column.column_id))
        .map(|column| column.column_id.clone())
        .collect()
}
