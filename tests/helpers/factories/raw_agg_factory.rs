use crate::schema::types::{AggGroup, FilterEntry, RawAgg, StdDevBound};

pub struct RawAggFactory {
    inner: RawAgg,
}

impl RawAggFactory {
    pub fn metric(agg_type: &str) -> Self {
        Self {
            inner: RawAgg {
                id: "1".into(),
                agg_type: agg_type.into(),
                group: AggGroup::Metric,
                field: None,
                custom_label: None,
                label: format!("{agg_type} label"),
                format: None,
                params: Default::default(),
            },
        }
    }

    pub fn count() -> Self {
        Self::metric("count")
    }

    pub fn avg(field: &str) -> Self {
        Self::metric("avg").with_field(field)
    }

    pub fn percentile(field: &str, percent: f64) -> Self {
        let mut factory = Self::metric("percentiles").with_field(field);
        factory.inner.params.percentile = Some(percent);
        factory
    }

    pub fn terms(field: &str) -> Self {
        let mut factory = Self::metric("terms").with_field(field);
        factory.inner.group = AggGroup::Bucket;
        factory
    }

    pub fn date_histogram(field: &str) -> Self {
        let mut factory = Self::metric("date_histogram").with_field(field);
        factory.inner.group = AggGroup::Bucket;
        factory
    }

    pub fn filters(queries: &[&str]) -> Self {
        let mut factory = Self::metric("filters");
        factory.inner.group = AggGroup::Bucket;
        factory.inner.params.filters = Some(
            queries
                .iter()
                .map(|q| FilterEntry {
                    query: q.to_string(),
                    label: None,
                    negate: false,
                })
                .collect(),
        );
        factory
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.inner.id = id.into();
        self
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.inner.field = Some(field.into());
        self
    }

    pub fn with_group(mut self, group: AggGroup) -> Self {
        self.inner.group = group;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.inner.label = label.into();
        self
    }

    pub fn with_custom_label(mut self, label: &str) -> Self {
        self.inner.custom_label = Some(label.into());
        self
    }

    pub fn with_percents(mut self, percents: &[f64]) -> Self {
        self.inner.params.percents = Some(percents.to_vec());
        self
    }

    pub fn with_values(mut self, values: &[f64]) -> Self {
        self.inner.params.values = Some(values.to_vec());
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.inner.params.value = Some(value);
        self
    }

    pub fn with_metric_ref(mut self, reference: &str) -> Self {
        self.inner.params.metric_ref = Some(reference.into());
        self
    }

    pub fn with_custom_bucket(mut self, bucket: RawAgg) -> Self {
        self.inner.params.custom_bucket = Some(Box::new(bucket));
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.inner.params.size = Some(size);
        self
    }

    pub fn with_order_by(mut self, order_by: &str, desc: bool) -> Self {
        self.inner.params.order_by = Some(order_by.into());
        self.inner.params.order_desc = desc;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.inner.params.sigma = Some(sigma);
        self
    }

    pub fn with_bound(mut self, bound: StdDevBound) -> Self {
        self.inner.params.bound = Some(bound);
        self
    }

    pub fn with_static_value(mut self, value: f64) -> Self {
        self.inner.params.static_value = Some(value);
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.inner.params.unit = Some(unit.into());
        self
    }

    pub fn with_numerator(mut self, query: &str) -> Self {
        self.inner.params.numerator = Some(query.into());
        self
    }

    pub fn with_denominator(mut self, query: &str) -> Self {
        self.inner.params.denominator = Some(query.into());
        self
    }

    pub fn create(self) -> RawAgg {
        self.inner
    }
}
