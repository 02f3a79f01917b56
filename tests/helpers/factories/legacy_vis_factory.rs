use crate::schema::types::{LegacyVis, RawAgg, TimeRangeMode};

pub struct LegacyVisFactory {
    inner: LegacyVis,
}

impl LegacyVisFactory {
    pub fn new() -> Self {
        Self {
            inner: LegacyVis {
                index_pattern: "logs-*".into(),
                aggs: Vec::new(),
                interval: None,
                drop_partial_buckets: false,
                time_range_mode: TimeRangeMode::EntireRange,
            },
        }
    }

    pub fn with_agg(mut self, agg: RawAgg) -> Self {
        self.inner.aggs.push(agg);
        self
    }

    pub fn with_interval(mut self, interval: &str) -> Self {
        self.inner.interval = Some(interval.into());
        self
    }

    pub fn with_drop_partial_buckets(mut self, drop: bool) -> Self {
        self.inner.drop_partial_buckets = drop;
        self
    }

    pub fn with_time_range_mode(mut self, mode: TimeRangeMode) -> Self {
        self.inner.time_range_mode = mode;
        self
    }

    pub fn create(self) -> LegacyVis {
        self.inner
    }
}

impl Default for LegacyVisFactory {
    fn default() -> Self {
        Self::new()
    }
}
