use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{ExerciseID, Name, Reps, TimeRange, Weight, Workout, filter_by_range};

/// Best-set result of one workout for a tracked exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub weight: Weight,
    pub reps: Reps,
    pub volume: f32,
    pub is_pr: bool,
}

/// Progress series for one exercise, ascending by date.
///
/// Exercises are matched by exact name equality. Each qualifying workout
/// contributes the completed set maximizing `weight * reps`; its `volume`
/// is the whole exercise volume of that workout. A point is a PR when it
/// raises the running maximum of either the single-set weight (over all
/// completed sets) or the exercise volume. Both maxima start at zero and
/// never decrease.
#[must_use]
pub fn exercise_progress(
    workouts: &[Workout],
    exercise_name: &Name,
    range: TimeRange,
    now: NaiveDate,
) -> Vec<ProgressPoint> {
    let mut filtered = filter_by_range(workouts, range, now);
    filtered.sort_by_key(|w| w.date);

    let mut max_weight = 0.0_f32;
    let mut max_volume = 0.0_f32;
    let mut points = Vec::new();

    for workout in filtered {
        let Some(exercise) = workout.exercises.iter().find(|e| e.name == *exercise_name) else {
            continue;
        };
        let Some(best_set) = exercise.best_set() else {
            continue;
        };

        let max_set_weight = exercise.max_completed_weight().map_or(0.0, f32::from);
        let volume = exercise.volume();
        let is_pr = max_set_weight > max_weight || volume > max_volume;
        max_weight = max_weight.max(max_set_weight);
        max_volume = max_volume.max(volume);

        points.push(ProgressPoint {
            date: workout.date,
            weight: best_set.weight,
            reps: best_set.reps,
            volume,
            is_pr,
        });
    }

    points
}

/// All-time (within range) best set of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub weight: Weight,
    pub reps: Reps,
    pub date: NaiveDate,
    pub volume: f32,
}

/// One record per exercise name, descending by record volume.
///
/// The record is the completed set with the highest `weight * reps` across
/// the filtered workouts; the earliest occurrence wins on ties.
#[must_use]
pub fn personal_records(
    workouts: &[Workout],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<PersonalRecord> {
    let mut filtered = filter_by_range(workouts, range, now);
    filtered.sort_by_key(|w| w.date);

    let mut records: BTreeMap<Name, PersonalRecord> = BTreeMap::new();

    for workout in filtered {
        for exercise in &workout.exercises {
            let Some(best_set) = exercise.best_set() else {
                continue;
            };
            let volume = best_set.weight * best_set.reps;
            match records.get(&exercise.name) {
                Some(record) if volume <= record.volume => {}
                _ => {
                    records.insert(
                        exercise.name.clone(),
                        PersonalRecord {
                            exercise_id: exercise.id,
                            exercise_name: exercise.name.clone(),
                            weight: best_set.weight,
                            reps: best_set.reps,
                            date: workout.date,
                            volume,
                        },
                    );
                }
            }
        }
    }

    let mut result = records.into_values().collect::<Vec<_>>();
    result.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    result
}

/// Sorted distinct exercise names across all workouts.
#[must_use]
pub fn unique_exercise_names(workouts: &[Workout]) -> Vec<Name> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter().map(|e| e.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Date of the all-time record for one exercise.
#[must_use]
pub fn exercise_pr_date(
    workouts: &[Workout],
    exercise_name: &Name,
    now: NaiveDate,
) -> Option<NaiveDate> {
    personal_records(workouts, TimeRange::All, now)
        .into_iter()
        .find(|r| r.exercise_name == *exercise_name)
        .map(|r| r.date)
}
