//! Report time ranges and the date windows they resolve to.

use crate::error::{StudioError, StudioResult};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "range", rename_all = "snake_case")]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    Year,
    Custom {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    Global,
}

impl TimeRange {
    /// Resolve against `today`. Predefined ranges bound only the start so
    /// that rows dated ahead (advances on upcoming events) stay visible.
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        let start = match self {
            Self::Week => today.checked_sub_days(Days::new(7)),
            Self::Month => today.with_day(1),
            Self::Quarter => {
                let first_month = (today.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(today.year(), first_month, 1)
            }
            Self::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::Custom { start, end } => {
                return DateWindow { start: Some(*start), end: *end };
            }
            Self::Global => None,
        };
        DateWindow { start, end: None }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Week => "Last 7 days".into(),
            Self::Month => "This month".into(),
            Self::Quarter => "This quarter".into(),
            Self::Year => "This year".into(),
            Self::Custom { start, end: Some(end) } => format!("{start} to {end}"),
            Self::Custom { start, end: None } => format!("Since {start}"),
            Self::Global => "All time".into(),
        }
    }
}

impl FromStr for TimeRange {
    type Err = StudioError;

    /// Parses the named ranges. `custom` needs a start date and is built
    /// directly instead.
    fn from_str(s: &str) -> StudioResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            "global" | "all" | "all_time" => Ok(Self::Global),
            other => Err(StudioError::UnknownTimeRange { value: other.to_string() }),
        }
    }
}

/// Inclusive date bounds; `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn predefined_ranges_resolve_start_dates() {
        let today = d(2024, 8, 14);
        assert_eq!(TimeRange::Week.window(today).start, Some(d(2024, 8, 7)));
        assert_eq!(TimeRange::Month.window(today).start, Some(d(2024, 8, 1)));
        assert_eq!(TimeRange::Quarter.window(today).start, Some(d(2024, 7, 1)));
        assert_eq!(TimeRange::Year.window(today).start, Some(d(2024, 1, 1)));
        assert!(TimeRange::Global.window(today).is_unbounded());
    }

    #[test]
    fn custom_window_is_inclusive() {
        let w = TimeRange::Custom { start: d(2024, 1, 10), end: Some(d(2024, 1, 20)) }
            .window(d(2024, 6, 1));
        assert!(w.contains(d(2024, 1, 10)));
        assert!(w.contains(d(2024, 1, 20)));
        assert!(!w.contains(d(2024, 1, 21)));
        assert!(!w.contains(d(2024, 1, 9)));
    }

    #[test]
    fn parses_named_ranges() {
        assert_eq!("Month".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert_eq!("all".parse::<TimeRange>().unwrap(), TimeRange::Global);
        assert!("fortnight".parse::<TimeRange>().is_err());
    }
}
