use serde::{Deserialize, Serialize};

/// Closed set of aggregation kinds the conversion understands. Legacy
/// type tags outside this set make the whole conversion abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggKind {
    Count,
    Avg,
    Sum,
    Min,
    Max,
    Median,
    Cardinality,
    ValueCount,
    Percentiles,
    PercentileRanks,
    StdDev,
    AvgBucket,
    SumBucket,
    MinBucket,
    MaxBucket,
    PositiveOnly,
    CumulativeSum,
    Derivative,
    MovingAvg,
    PositiveRate,
    FilterRatio,
    Static,
    DateHistogram,
    Terms,
    Filters,
}

impl AggKind {
    /// Parses a legacy aggregation type tag. Unknown tags yield `None`;
    /// consumers treat that as an unsupported aggregation.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "count" => Some(Self::Count),
            "avg" => Some(Self::Avg),
            "sum" => Some(Self::Sum),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "median" => Some(Self::Median),
            "cardinality" => Some(Self::Cardinality),
            "value_count" => Some(Self::ValueCount),
            "percentiles" | "percentile" => Some(Self::Percentiles),
            "percentile_ranks" | "percentile_rank" => Some(Self::PercentileRanks),
            "std_dev" | "std_deviation" => Some(Self::StdDev),
            "avg_bucket" => Some(Self::AvgBucket),
            "sum_bucket" => Some(Self::SumBucket),
            "min_bucket" => Some(Self::MinBucket),
            "max_bucket" => Some(Self::MaxBucket),
            "positive_only" => Some(Self::PositiveOnly),
            "cumulative_sum" => Some(Self::CumulativeSum),
            "derivative" => Some(Self::Derivative),
            "moving_avg" | "moving_average" => Some(Self::MovingAvg),
            "positive_rate" => Some(Self::PositiveRate),
            "filter_ratio" => Some(Self::FilterRatio),
            "static" => Some(Self::Static),
            "date_histogram" => Some(Self::DateHistogram),
            "terms" => Some(Self::Terms),
            "filters" => Some(Self::Filters),
            _ => None,
        }
    }

    /// Sibling pipeline: a metric computed over the bucket results of
    /// another aggregation at the same level.
    pub fn is_sibling_pipeline(self) -> bool {
        matches!(
            self,
            Self::AvgBucket | Self::SumBucket | Self::MinBucket | Self::MaxBucket
        )
    }

    /// Parent pipeline: a metric computed from the sequential series of
    /// another aggregation's per-bucket results.
    pub fn is_parent_pipeline(self) -> bool {
        matches!(
            self,
            Self::CumulativeSum | Self::Derivative | Self::MovingAvg
        )
    }

    pub fn is_bucket(self) -> bool {
        matches!(self, Self::DateHistogram | Self::Terms | Self::Filters)
    }

    /// Metrics that carry no special parameters beyond an optional field.
    pub fn is_metric_without_params(self) -> bool {
        matches!(
            self,
            Self::Count
                | Self::Avg
                | Self::Sum
                | Self::Min
                | Self::Max
                | Self::Median
                | Self::Cardinality
                | Self::ValueCount
        )
    }

    /// Function name used when synthesizing a formula for this kind.
    pub fn formula_fn(self) -> Option<&'static str> {
        match self {
            Self::Count | Self::ValueCount => Some("count"),
            Self::Avg => Some("average"),
            Self::Sum => Some("sum"),
            Self::Min => Some("min"),
            Self::Max => Some("max"),
            Self::Median => Some("median"),
            Self::Cardinality => Some("unique_count"),
            Self::Percentiles => Some("percentile"),
            Self::PercentileRanks => Some("percentile_rank"),
            Self::StdDev => Some("standard_deviation"),
            Self::AvgBucket => Some("overall_average"),
            Self::SumBucket => Some("overall_sum"),
            Self::MinBucket => Some("overall_min"),
            Self::MaxBucket => Some("overall_max"),
            Self::PositiveOnly => Some("pick_max"),
            Self::CumulativeSum => Some("cumulative_sum"),
            Self::Derivative => Some("differences"),
            Self::MovingAvg => Some("moving_average"),
            Self::PositiveRate => Some("counter_rate"),
            Self::FilterRatio | Self::Static => None,
            Self::DateHistogram | Self::Terms | Self::Filters => None,
        }
    }

    /// Collapse function a sibling pipeline implies for its buckets.
    pub fn collapse_fn(self) -> Option<&'static str> {
        match self {
            Self::AvgBucket => Some("avg"),
            Self::SumBucket => Some("sum"),
            Self::MinBucket => Some("min"),
            Self::MaxBucket => Some("max"),
            _ => None,
        }
    }
}
