pub mod buckets;
pub mod column;
pub mod error;
pub mod metrics;
pub mod ordering;
pub mod pipeline;
pub mod reference;

#[cfg(test)]
mod error_test;

pub use column::{
    Column, ColumnMeta, ColumnParams, ConversionResult, Layer, OperationType, TermsOrderBy,
    TimeScaleUnit,
};
pub use error::ConvertError;
pub use pipeline::{ConvertOptions, convert_vis, try_convert_vis};
pub use reference::PipelineRef;
