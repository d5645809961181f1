use chrono::{Local, NaiveDate};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, DetailedStats, Exercise, FrequencyDataPoint,
    MuscleGroupDistribution, Name, Period, PeriodFrequency, PersonalRecord, ProgressPoint,
    ReadError, StrengthTrend, SyncError, TimeRange, TrendMetric, TrendMetrics, UpdateError,
    VolumeDataPoint, WorkoutStreaks, aggregation, progress, stats, streak, trend,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        exercises: Vec<Exercise>,
        duration: u32,
    ) -> Result<Workout, CreateError>;
    async fn modify_workout(
        &self,
        id: WorkoutID,
        name: Option<Name>,
        exercises: Option<Vec<Exercise>>,
        duration: Option<u32>,
        completed: Option<bool>,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    async fn volume_over_time(
        &self,
        range: TimeRange,
    ) -> Result<Vec<VolumeDataPoint>, ReadError> {
        Ok(aggregation::volume_over_time(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }

    async fn workout_frequency(
        &self,
        range: TimeRange,
    ) -> Result<Vec<FrequencyDataPoint>, ReadError> {
        Ok(aggregation::workout_frequency(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }

    async fn frequency_by_period(
        &self,
        period: Period,
        range: TimeRange,
    ) -> Result<Vec<PeriodFrequency>, ReadError> {
        Ok(aggregation::frequency_by_period(
            &self.get_workouts().await?,
            period,
            range,
            today(),
        ))
    }

    async fn muscle_group_distribution(
        &self,
        range: TimeRange,
    ) -> Result<Vec<MuscleGroupDistribution>, ReadError> {
        Ok(aggregation::muscle_group_distribution(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }

    async fn exercise_progress(
        &self,
        exercise_name: &Name,
        range: TimeRange,
    ) -> Result<Vec<ProgressPoint>, ReadError> {
        Ok(progress::exercise_progress(
            &self.get_workouts().await?,
            exercise_name,
            range,
            today(),
        ))
    }

    async fn personal_records(
        &self,
        range: TimeRange,
    ) -> Result<Vec<PersonalRecord>, ReadError> {
        Ok(progress::personal_records(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }

    async fn unique_exercise_names(&self) -> Result<Vec<Name>, ReadError> {
        Ok(progress::unique_exercise_names(&self.get_workouts().await?))
    }

    async fn workout_streaks(&self) -> Result<WorkoutStreaks, ReadError> {
        Ok(streak::workout_streaks(&self.get_workouts().await?, today()))
    }

    async fn trend_metrics(
        &self,
        metric: TrendMetric,
        range: TimeRange,
    ) -> Result<TrendMetrics, ReadError> {
        Ok(trend::trend_metrics(
            &self.get_workouts().await?,
            metric,
            range,
            today(),
        ))
    }

    async fn strength_trends(&self, range: TimeRange) -> Result<Vec<StrengthTrend>, ReadError> {
        Ok(trend::strength_trends(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }

    async fn detailed_stats(&self, range: TimeRange) -> Result<DetailedStats, ReadError> {
        Ok(stats::detailed_stats(
            &self.get_workouts().await?,
            range,
            today(),
        ))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn sync_workouts(&self) -> Result<Vec<Workout>, SyncError>;
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        exercises: Vec<Exercise>,
        duration: u32,
    ) -> Result<Workout, CreateError>;
    async fn modify_workout(
        &self,
        id: WorkoutID,
        name: Option<Name>,
        exercises: Option<Vec<Exercise>>,
        duration: Option<u32>,
        completed: Option<bool>,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// A logged workout session.
///
/// Workouts are not required to be date-sorted in storage. Every analytics
/// function sorts internally before relying on order.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
    /// Duration in minutes.
    pub duration: u32,
    pub completed: bool,
}

impl Workout {
    /// Total volume over completed sets of all exercises.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.exercises.iter().map(Exercise::volume).sum()
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Equipment, ExerciseID, MuscleGroup, Reps, Set, Weight};

    use super::*;

    fn set(weight: f32, reps: u32, completed: bool) -> Set {
        Set {
            reps: Reps::new(reps).unwrap(),
            weight: Weight::new(weight).unwrap(),
            completed,
        }
    }

    fn exercise(id: u128, name: &str, sets: Vec<Set>) -> Exercise {
        Exercise {
            id: ExerciseID::from(id),
            name: Name::new(name).unwrap(),
            muscle_group: MuscleGroup::Chest,
            equipment: Equipment::Barbell,
            sets,
            rest_time: None,
        }
    }

    fn workout(exercises: Vec<Exercise>) -> Workout {
        Workout {
            id: 1.into(),
            name: Name::new("Push Day").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            exercises,
            duration: 60,
            completed: true,
        }
    }

    #[rstest]
    #[case::no_exercises(vec![], 0.0)]
    #[case::sum_of_exercise_volumes(
        vec![
            exercise(1, "Bench Press", vec![set(100.0, 5, true), set(100.0, 5, false)]),
            exercise(2, "Overhead Press", vec![set(60.0, 8, true)]),
        ],
        980.0
    )]
    fn test_workout_volume(#[case] exercises: Vec<Exercise>, #[case] expected: f32) {
        assert_eq!(workout(exercises).volume(), expected);
    }

    #[test]
    fn test_workout_volume_additivity() {
        let workout = workout(vec![
            exercise(1, "Bench Press", vec![set(100.0, 5, true), set(80.0, 8, true)]),
            exercise(2, "Squat", vec![set(140.0, 3, true), set(140.0, 3, false)]),
        ]);
        assert_eq!(
            workout.volume(),
            workout.exercises.iter().map(Exercise::volume).sum::<f32>()
        );
    }

    #[rstest]
    #[case::no_exercises(vec![], 0)]
    #[case::counts_incomplete_sets(
        vec![
            exercise(1, "Bench Press", vec![set(100.0, 5, true), set(100.0, 5, false)]),
            exercise(2, "Squat", vec![set(140.0, 3, true)]),
        ],
        3
    )]
    fn test_workout_set_count(#[case] exercises: Vec<Exercise>, #[case] expected: usize) {
        assert_eq!(workout(exercises).set_count(), expected);
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
    }
}
