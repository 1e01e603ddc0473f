//! # Dashboard summary and statistics
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`DashboardSummary`] / [`SummaryRecord`] | `GET /dashboard/summary?filter={this-week,previous-week}` |
//! | [`DashboardStat`] / [`Visits`] | `GET /dashboard/stat?filter={yearly,monthly}` |
//!
//! Summary counters arrive as numeric strings; [`SummaryRecord::in_thousands`]
//! renders them the way the cards show them (`"12.345k"`). Statistics are keyed
//! by lowercase weekday name and may omit days, which read as zero.

use std::collections::BTreeMap;

use serde::Deserialize;
use store::models::string_or_number;

/// Weekday keys in display order.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Which week the summary cards show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFilter {
    #[default]
    ThisWeek,
    PreviousWeek,
}

impl SummaryFilter {
    pub const ALL: [SummaryFilter; 2] = [SummaryFilter::ThisWeek, SummaryFilter::PreviousWeek];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThisWeek => "this-week",
            Self::PreviousWeek => "previous-week",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ThisWeek => "This Week",
            Self::PreviousWeek => "Previous Week",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Aggregation window of the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatFilter {
    #[default]
    Yearly,
    Monthly,
}

impl StatFilter {
    pub const ALL: [StatFilter; 2] = [StatFilter::Yearly, StatFilter::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yearly => "Yearly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Counters for one week.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SummaryRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub active_users: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub clicks: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub appearance: String,
}

impl SummaryRecord {
    /// Render a counter in thousands, e.g. `"12345"` → `"12.345k"`.
    /// Values without leading digits render as `"0k"`.
    pub fn in_thousands(raw: &str) -> String {
        let digits: String = raw
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value = digits.parse::<u64>().unwrap_or(0);
        format!("{}k", value as f64 / 1000.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardSummary {
    #[serde(default)]
    pub current: SummaryRecord,
    #[serde(default)]
    pub previous: SummaryRecord,
}

impl DashboardSummary {
    /// The record matching the filter the summary was requested with.
    pub fn for_filter(&self, filter: SummaryFilter) -> &SummaryRecord {
        match filter {
            SummaryFilter::ThisWeek => &self.current,
            SummaryFilter::PreviousWeek => &self.previous,
        }
    }
}

/// Website visits per device class.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct Visits {
    #[serde(default)]
    pub desktop: u64,
    #[serde(default)]
    pub mobile: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardStat {
    #[serde(default)]
    pub website_visits: BTreeMap<String, Visits>,
    #[serde(default)]
    pub offers_sent: BTreeMap<String, u64>,
}

impl DashboardStat {
    pub fn visits_on(&self, day: &str) -> Visits {
        self.website_visits.get(day).copied().unwrap_or_default()
    }

    pub fn offers_on(&self, day: &str) -> u64 {
        self.offers_sent.get(day).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_thousands() {
        assert_eq!(SummaryRecord::in_thousands("12345"), "12.345k");
        assert_eq!(SummaryRecord::in_thousands("12000"), "12k");
        assert_eq!(SummaryRecord::in_thousands("999"), "0.999k");
        assert_eq!(SummaryRecord::in_thousands("42abc"), "0.042k");
        assert_eq!(SummaryRecord::in_thousands(""), "0k");
        assert_eq!(SummaryRecord::in_thousands("n/a"), "0k");
    }

    #[test]
    fn test_summary_picks_week() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"current": {"active_users": "8000", "clicks": 1200, "appearance": "300"},
                "previous": {"active_users": "7000", "clicks": "1100", "appearance": "250"}}"#,
        )
        .unwrap();
        assert_eq!(summary.for_filter(SummaryFilter::ThisWeek).clicks, "1200");
        assert_eq!(summary.for_filter(SummaryFilter::PreviousWeek).active_users, "7000");
    }

    #[test]
    fn test_stat_missing_days_are_zero() {
        let stat: DashboardStat = serde_json::from_str(
            r#"{"website_visits": {"monday": {"desktop": 10, "mobile": 4}, "tuesday": {"desktop": 3}},
                "offers_sent": {"friday": 9}}"#,
        )
        .unwrap();
        assert_eq!(stat.visits_on("monday"), Visits { desktop: 10, mobile: 4 });
        assert_eq!(stat.visits_on("tuesday").mobile, 0);
        assert_eq!(stat.visits_on("sunday"), Visits::default());
        assert_eq!(stat.offers_on("friday"), 9);
        assert_eq!(stat.offers_on("monday"), 0);
    }

    #[test]
    fn test_filter_wire_values() {
        assert_eq!(SummaryFilter::default().as_str(), "this-week");
        assert_eq!(SummaryFilter::parse("previous-week"), Some(SummaryFilter::PreviousWeek));
        assert_eq!(StatFilter::parse("monthly"), Some(StatFilter::Monthly));
        assert_eq!(StatFilter::parse("weekly"), None);
    }
}
