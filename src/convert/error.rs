use thiserror::Error;
use tracing::{debug, error};

/// Errors that abort a conversion. Every variant is fatal to the whole
/// run; there is no partial layer emission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unsupported aggregation type: {0}")]
    UnsupportedAggregation(String),

    #[error("Field not present in data source: {0}")]
    MissingField(String),

    #[error("Invalid parameter for aggregation {agg_id}: {reason}")]
    InvalidParameter { agg_id: String, reason: String },

    #[error("Unresolved pipeline reference: {0}")]
    UnresolvedReference(String),

    #[error("Unsupported aggregation combination: {0}")]
    IncompatibleCombination(String),
}

impl ConvertError {
    pub fn invalid_parameter(agg_id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            agg_id: agg_id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn log_error(&self) {
        match self {
            ConvertError::UnsupportedAggregation(tag) => {
                error!("Unsupported aggregation type: {}", tag);
                debug!("Aggregation type {} is outside the supported set", tag);
            }
            ConvertError::MissingField(name) => {
                error!("Field not present in data source: {}", name);
                debug!("Field lookup failed for '{}'", name);
            }
            ConvertError::InvalidParameter { agg_id, reason } => {
                error!("Invalid parameter for aggregation {}: {}", agg_id, reason);
                debug!("Parameter validation failed: {:?}", self);
            }
            ConvertError::UnresolvedReference(reference) => {
                error!("Unresolved pipeline reference: {}", reference);
                debug!("No known metric matches reference '{}'", reference);
            }
            ConvertError::IncompatibleCombination(reason) => {
                error!("Unsupported aggregation combination: {}", reason);
                debug!("Combination rejected before conversion: {}", reason);
            }
        }
    }
}
