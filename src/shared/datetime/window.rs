use crate::schema::types::{TimeRange, TimeRangeMode};
use crate::shared::config::CONFIG;

/// Millisecond sizes of the calendar units a window string may use,
/// smallest first.
const WINDOW_UNITS: [(i64, &str); 4] = [
    (1_000, "s"),
    (60_000, "m"),
    (3_600_000, "h"),
    (86_400_000, "d"),
];

/// Computes the window string used to bound "last value" metrics.
///
/// Returns `None` unless the panel is in last-value mode. An explicitly
/// configured interval is used verbatim; otherwise the window is derived
/// from the absolute time range.
pub fn last_value_window(
    mode: TimeRangeMode,
    interval: Option<&str>,
    range: Option<&TimeRange>,
) -> Option<String> {
    if mode != TimeRangeMode::LastValue {
        return None;
    }

    if let Some(interval) = interval
        && !interval.is_empty()
        && interval != "auto"
    {
        return Some(interval.to_string());
    }

    range.map(auto_window)
}

/// Derives an automatic window from a time range: the span is divided by
/// the configured target bar count, then expressed in the smallest
/// calendar unit that holds an integer count of the resulting duration.
fn auto_window(range: &TimeRange) -> String {
    let span_ms = (range.to - range.from).num_milliseconds().max(1);
    let target_bars = i64::from(CONFIG.window.target_bars).max(1);
    let duration_ms = (span_ms / target_bars).max(1);

    for (unit_ms, suffix) in WINDOW_UNITS {
        if duration_ms % unit_ms == 0 {
            return format!("{}{}", duration_ms / unit_ms, suffix);
        }
    }

    format!("{duration_ms}ms")
}
