use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{MuscleGroup, TimeRange, Workout, filter_by_range};

/// Volume and workout count of one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeDataPoint {
    pub date: NaiveDate,
    pub volume: f32,
    pub workouts: u32,
}

/// Daily volume buckets over the given range, ascending by date.
///
/// Multiple workouts on the same calendar day merge into one bucket.
#[must_use]
pub fn volume_over_time(
    workouts: &[Workout],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<VolumeDataPoint> {
    let mut buckets: BTreeMap<NaiveDate, (f32, u32)> = BTreeMap::new();

    for workout in filter_by_range(workouts, range, now) {
        let entry = buckets.entry(workout.date).or_insert((0.0, 0));
        entry.0 += workout.volume();
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (volume, workouts))| VolumeDataPoint {
            date,
            volume,
            workouts,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyDataPoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// Workouts per calendar day over the given range, ascending by date.
#[must_use]
pub fn workout_frequency(
    workouts: &[Workout],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<FrequencyDataPoint> {
    let mut buckets: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for workout in filter_by_range(workouts, range, now) {
        *buckets.entry(workout.date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| FrequencyDataPoint { date, count })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodFrequency {
    pub label: String,
    pub count: u32,
}

/// Workouts per ISO week (`YYYY-Wnn`) or per month (`YYYY-MM`), ascending
/// by label.
///
/// Labels are zero-padded and year-prefixed, so the lexicographic order is
/// chronological. The week year is the ISO week-numbering year, which may
/// differ from the calendar year at year boundaries.
#[must_use]
pub fn frequency_by_period(
    workouts: &[Workout],
    period: Period,
    range: TimeRange,
    now: NaiveDate,
) -> Vec<PeriodFrequency> {
    let mut buckets: BTreeMap<String, u32> = BTreeMap::new();

    for workout in filter_by_range(workouts, range, now) {
        let label = match period {
            Period::Week => {
                let week = workout.date.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Period::Month => {
                format!("{:04}-{:02}", workout.date.year(), workout.date.month())
            }
        };
        *buckets.entry(label).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(label, count)| PeriodFrequency { label, count })
        .collect()
}

/// Share of one muscle group in the trained exercise instances.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleGroupDistribution {
    pub muscle_group: MuscleGroup,
    pub count: u32,
    pub percentage: f32,
    pub volume: f32,
}

/// Exercise-instance counts and volumes per muscle group, descending by
/// count.
///
/// Every exercise instance counts: a workout with three chest exercises
/// contributes three to the chest count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn muscle_group_distribution(
    workouts: &[Workout],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<MuscleGroupDistribution> {
    let mut groups: BTreeMap<MuscleGroup, (u32, f32)> = BTreeMap::new();

    for workout in filter_by_range(workouts, range, now) {
        for exercise in &workout.exercises {
            let entry = groups.entry(exercise.muscle_group).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += exercise.volume();
        }
    }

    let total: u32 = groups.values().map(|(count, _)| count).sum();

    let mut result = groups
        .into_iter()
        .map(|(muscle_group, (count, volume))| MuscleGroupDistribution {
            muscle_group,
            count,
            percentage: if total > 0 {
                count as f32 / total as f32 * 100.0
            } else {
                0.0
            },
            volume,
        })
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
