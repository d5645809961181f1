use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::Workout;

/// A maximal run of consecutive calendar days, each with at least one
/// workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streak {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutStreaks {
    pub current: u32,
    pub longest: u32,
    pub history: Vec<Streak>,
}

/// Streaks over the full workout history.
///
/// Only distinct calendar days count; several workouts on one day extend a
/// streak by a single day. The trailing streak is part of the history even
/// though no later gap closed it. `current` is the trailing streak length
/// unless the last training day is more than one day before `now`, in
/// which case the streak is stale and `current` is zero.
#[must_use]
pub fn workout_streaks(workouts: &[Workout], now: NaiveDate) -> WorkoutStreaks {
    let days: BTreeSet<NaiveDate> = workouts.iter().map(|w| w.date).collect();
    let Some(first) = days.first().copied() else {
        return WorkoutStreaks::default();
    };

    let mut history = Vec::new();
    let mut start = first;
    let mut end = first;
    let mut length = 1;
    let mut longest = 0;

    for day in days.iter().copied().skip(1) {
        if (day - end).num_days() == 1 {
            end = day;
            length += 1;
        } else {
            history.push(Streak { start, end, days: length });
            longest = longest.max(length);
            start = day;
            end = day;
            length = 1;
        }
    }
    history.push(Streak { start, end, days: length });
    longest = longest.max(length);

    let current = if (now - end).num_days() <= 1 { length } else { 0 };

    WorkoutStreaks {
        current,
        longest,
        history,
    }
}
