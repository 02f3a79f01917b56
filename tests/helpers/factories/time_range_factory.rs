use chrono::{DateTime, Utc};

use crate::schema::types::TimeRange;

pub struct TimeRangeFactory;

impl TimeRangeFactory {
    /// One full day: 2020-01-01T00:00:00Z to 2020-01-02T00:00:00Z.
    pub fn day() -> TimeRange {
        Self::between("2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z")
    }

    pub fn between(from: &str, to: &str) -> TimeRange {
        TimeRange {
            from: parse(from),
            to: parse(to),
        }
    }
}

fn parse(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC3339 timestamp")
        .with_timezone(&Utc)
}
