#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod aggregation;
mod error;
mod exercise;
mod name;
mod progress;
mod range;
mod service;
mod set;
mod stats;
mod streak;
mod trend;
mod workout;

pub use aggregation::{
    FrequencyDataPoint, MuscleGroupDistribution, Period, PeriodFrequency, VolumeDataPoint,
    frequency_by_period, muscle_group_distribution, volume_over_time, workout_frequency,
};
pub use error::{CreateError, DeleteError, ReadError, StorageError, SyncError, UpdateError};
pub use exercise::{Equipment, Exercise, ExerciseID, MuscleGroup, Property};
pub use name::{Name, NameError};
pub use progress::{
    PersonalRecord, ProgressPoint, exercise_pr_date, exercise_progress, personal_records,
    unique_exercise_names,
};
pub use range::{TimeRange, filter_by_range};
pub use service::Service;
pub use set::{Reps, RepsError, Set, Time, TimeError, Weight, WeightError};
pub use stats::{DetailedStats, detailed_stats};
pub use streak::{Streak, WorkoutStreaks, workout_streaks};
pub use trend::{
    StrengthTrend, Trend, TrendMetric, TrendMetrics, strength_trends, trend_metrics,
};
pub use workout::{Workout, WorkoutID, WorkoutRepository, WorkoutService};
