use chrono::{Duration, NaiveDate};

use crate::Workout;

/// Relative time window ending at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    Month,
    ThreeMonths,
    Year,
    All,
}

impl TimeRange {
    /// Window width in days, `None` for `All`.
    #[must_use]
    pub fn days(self) -> Option<i64> {
        match self {
            TimeRange::Week => Some(7),
            TimeRange::Month => Some(30),
            TimeRange::ThreeMonths => Some(90),
            TimeRange::Year => Some(365),
            TimeRange::All => None,
        }
    }
}

/// Workouts with a date in `[now - range, now]`, in input order.
///
/// `All` returns the entire input unchanged.
#[must_use]
pub fn filter_by_range(workouts: &[Workout], range: TimeRange, now: NaiveDate) -> Vec<&Workout> {
    let Some(days) = range.days() else {
        return workouts.iter().collect();
    };

    let lower_bound = now - Duration::days(days);
    workouts
        .iter()
        .filter(|w| w.date >= lower_bound && w.date <= now)
        .collect()
}
