/// Structured form of the composite pipeline reference the legacy model
/// encodes as `<metricId>` or `<metricId>[<meta>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRef {
    pub target_id: String,
    /// Nested parameter of the referenced metric, e.g. which percentile
    /// to read. A bracket segment that is not a finite number is treated
    /// as absent.
    pub nested_meta: Option<f64>,
}

impl PipelineRef {
    /// Parses the bracket notation once at the boundary, so the rest of
    /// the conversion never re-parses strings.
    pub fn parse(reference: &str) -> Self {
        let Some((target_id, rest)) = reference.split_once('[') else {
            return Self {
                target_id: reference.to_string(),
                nested_meta: None,
            };
        };

        let nested_meta = rest
            .strip_suffix(']')
            .unwrap_or(rest)
            .parse::<f64>()
            .ok()
            .filter(|meta| meta.is_finite());

        Self {
            target_id: target_id.to_string(),
            nested_meta,
        }
    }
}
