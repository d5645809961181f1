use chrono::NaiveDate;

use crate::{
    MuscleGroup, PersonalRecord, TimeRange, Workout, filter_by_range, muscle_group_distribution,
    personal_records,
};

/// Summary of the training history within one range.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedStats {
    pub total_workouts: u32,
    pub total_volume: f32,
    /// Total duration in minutes.
    pub total_duration: u32,
    pub average_workout_duration: f32,
    /// Per-set approximation in seconds, not per rest interval.
    pub average_rest_time: f32,
    pub average_sets_per_workout: f32,
    pub most_trained_muscle_group: Option<MuscleGroup>,
    pub least_trained_muscle_group: Option<MuscleGroup>,
    pub personal_records: Vec<PersonalRecord>,
}

/// Rollup of the aggregation, record and average metrics for one range.
///
/// Degenerate inputs never fail: every division by zero yields 0 and the
/// muscle groups are `None` without data. The nested distribution and
/// record computations run over the already filtered workouts with
/// `TimeRange::All`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn detailed_stats(workouts: &[Workout], range: TimeRange, now: NaiveDate) -> DetailedStats {
    let filtered = filter_by_range(workouts, range, now)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    let total_workouts = filtered.len() as u32;
    let total_volume = filtered.iter().map(Workout::volume).sum();
    let total_duration = filtered.iter().map(|w| w.duration).sum::<u32>();

    let mut total_rest_time = 0.0_f32;
    let mut total_sets = 0_u32;
    for workout in &filtered {
        for exercise in &workout.exercises {
            let set_count = exercise.sets.len() as u32;
            if let Some(rest_time) = exercise.rest_time {
                total_rest_time += u32::from(rest_time) as f32 * set_count.saturating_sub(1) as f32;
            }
            total_sets += set_count;
        }
    }

    let average_workout_duration = if total_workouts > 0 {
        total_duration as f32 / total_workouts as f32
    } else {
        0.0
    };
    let average_rest_time = if total_sets > 0 {
        total_rest_time / total_sets as f32
    } else {
        0.0
    };
    let average_sets_per_workout = if total_workouts > 0 {
        total_sets as f32 / total_workouts as f32
    } else {
        0.0
    };

    let distribution = muscle_group_distribution(&filtered, TimeRange::All, now);

    DetailedStats {
        total_workouts,
        total_volume,
        total_duration,
        average_workout_duration,
        average_rest_time,
        average_sets_per_workout,
        most_trained_muscle_group: distribution.first().map(|d| d.muscle_group),
        least_trained_muscle_group: distribution.last().map(|d| d.muscle_group),
        personal_records: personal_records(&filtered, TimeRange::All, now),
    }
}
