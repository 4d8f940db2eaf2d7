use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Named look-back window measured from "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeWindow {
    Week,
    #[default]
    Month,
    Year,
}

impl RelativeWindow {
    /// Lenient parse of a query value. Unknown or missing values fall back
    /// to [`RelativeWindow::Month`].
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("week") => RelativeWindow::Week,
            Some("year") => RelativeWindow::Year,
            _ => RelativeWindow::Month,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            RelativeWindow::Week => "week",
            RelativeWindow::Month => "month",
            RelativeWindow::Year => "year",
        }
    }

    /// Inclusive lower bound of the window.
    ///
    /// Calendar months clamp to the last day of a shorter month
    /// (31 March minus one month is 28/29 February). If the subtraction
    /// leaves chrono's representable range the window is unbounded.
    pub fn lower_bound(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = match self {
            RelativeWindow::Week => now.checked_sub_signed(Duration::days(7)),
            RelativeWindow::Month => now.checked_sub_months(Months::new(1)),
            RelativeWindow::Year => now.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Display for RelativeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Which transactions a statistics query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum StatisticsRange {
    /// Calendar dates, both ends inclusive. The whole `end` day counts.
    Between { start: NaiveDate, end: NaiveDate },
    /// From `now` minus the window, open-ended towards the future.
    Relative { window: RelativeWindow },
    /// Every transaction in the ledger.
    AllTime,
}

impl StatisticsRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        StatisticsRange::Between { start, end }
    }

    pub fn relative(window: RelativeWindow) -> Self {
        StatisticsRange::Relative { window }
    }

    /// Build a range from raw query parameters.
    ///
    /// Explicit dates win when both parse as `YYYY-MM-DD`. Anything else
    /// selects a relative window, falling back to the last month when the
    /// window is missing or unrecognized. [`StatisticsRange::AllTime`] is
    /// never produced here; callers must ask for it explicitly.
    pub fn from_query(start: Option<&str>, end: Option<&str>, window: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
        };

        match (parse(start), parse(end)) {
            (Some(start), Some(end)) => StatisticsRange::between(start, end),
            _ => StatisticsRange::relative(RelativeWindow::parse_or_default(window)),
        }
    }

    /// Whether a transaction dated `date` falls inside this range.
    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            StatisticsRange::Between { start, end } => {
                let day = date.date_naive();
                *start <= day && day <= *end
            }
            StatisticsRange::Relative { window } => date >= window.lower_bound(now),
            StatisticsRange::AllTime => true,
        }
    }
}

impl Default for StatisticsRange {
    fn default() -> Self {
        StatisticsRange::relative(RelativeWindow::default())
    }
}
