// Search query construction.
// Turns the time window and language filters into a GitHub search expression.

use chrono::{Days, NaiveDate};

/// Minimum star count a repository needs to show up at all.
pub const MIN_STARS: u32 = 50;

/// Time range for trending repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl TimeWindow {
    /// Parse a window name, falling back to a week for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "day" => TimeWindow::Day,
            "week" => TimeWindow::Week,
            "month" => TimeWindow::Month,
            "year" => TimeWindow::Year,
            _ => TimeWindow::default(),
        }
    }

    /// Number of days covered by this window.
    pub fn days(&self) -> u64 {
        match self {
            TimeWindow::Day => 1,
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::Year => 365,
        }
    }
}

/// Filters that shape the search expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub window: TimeWindow,
    pub language: Option<String>,
    /// Spoken language, passed through as another `language:` clause.
    pub spoken: Option<String>,
}

/// Earliest creation date included for the given window.
pub fn cutoff_date(window: TimeWindow, today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(window.days()))
        .unwrap_or(NaiveDate::MIN)
}

/// Build the search expression for `today`.
pub fn build_query(filters: &SearchFilters, today: NaiveDate) -> String {
    let since = cutoff_date(filters.window, today);
    let mut parts = vec![format!("created:>{}", since.format("%Y-%m-%d"))];

    if let Some(lang) = &filters.language {
        parts.push(format!("language:{}", lang.to_lowercase()));
    }
    if let Some(spoken) = &filters.spoken {
        parts.push(format!("language:{}", spoken.to_lowercase()));
    }

    parts.push(format!("stars:>{}", MIN_STARS));
    parts.push("fork:false".to_string());
    parts.join(" ")
}
