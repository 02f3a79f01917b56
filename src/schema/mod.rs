pub mod agg;
pub mod datasource;
pub mod normalize;
pub mod types;

#[cfg(test)]
mod agg_test;

pub use agg::AggKind;
pub use datasource::{FieldMeta, FieldResolver, FieldType, StaticFields};
pub use normalize::{normalize_agg, normalize_vis};
pub use types::{
    AggGroup, AggParams, FilterEntry, LegacyVis, RawAgg, SchemaAgg, StdDevBound, TimeRange,
    TimeRangeMode, VisSchemas,
};
