use chrono::{DateTime, Days, NaiveDate, Utc};

/// Date-only `[start, end)` range sent as `window_start__gte` / `window_start__lt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchWindow {
    /// Window beginning on the calendar day of `now` and spanning `days` days.
    /// Time of day is discarded.
    #[must_use]
    pub fn starting_at(now: DateTime<Utc>, days: u64) -> Self {
        let start = now.date_naive();
        let end = start.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("window_start__gte", self.start.format("%Y-%m-%d").to_string()),
            ("window_start__lt", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}

impl std::fmt::Display for FetchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
