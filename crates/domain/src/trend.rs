use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::{Name, TimeRange, Weight, Workout, filter_by_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendMetric {
    Workouts,
    Volume,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A metric total compared between two adjacent, equal-length windows.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendMetrics {
    pub value: f32,
    pub previous_value: f32,
    pub change: f32,
    pub change_percentage: f32,
    pub trend: Trend,
}

impl TrendMetrics {
    const NEUTRAL: TrendMetrics = TrendMetrics {
        value: 0.0,
        previous_value: 0.0,
        change: 0.0,
        change_percentage: 0.0,
        trend: Trend::Neutral,
    };
}

/// Metric total of `[now - W, now]` against `[now - 2W, now - W)`.
///
/// The change percentage is zero whenever the previous window total is
/// zero. `TimeRange::All` has no window width and yields the neutral
/// result.
#[must_use]
pub fn trend_metrics(
    workouts: &[Workout],
    metric: TrendMetric,
    range: TimeRange,
    now: NaiveDate,
) -> TrendMetrics {
    let Some(window) = range.days() else {
        return TrendMetrics::NEUTRAL;
    };

    let current_start = now - Duration::days(window);
    let previous_start = now - Duration::days(2 * window);

    let value = total(
        workouts
            .iter()
            .filter(|w| w.date >= current_start && w.date <= now),
        metric,
    );
    let previous_value = total(
        workouts
            .iter()
            .filter(|w| w.date >= previous_start && w.date < current_start),
        metric,
    );

    let change = value - previous_value;
    let change_percentage = if previous_value > 0.0 {
        change / previous_value * 100.0
    } else {
        0.0
    };
    let trend = if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Neutral
    };

    TrendMetrics {
        value,
        previous_value,
        change,
        change_percentage,
        trend,
    }
}

#[allow(clippy::cast_precision_loss)]
fn total<'a>(workouts: impl Iterator<Item = &'a Workout>, metric: TrendMetric) -> f32 {
    match metric {
        TrendMetric::Workouts => workouts.count() as f32,
        TrendMetric::Volume => workouts.map(Workout::volume).sum(),
        TrendMetric::Duration => workouts.map(|w| w.duration as f32).sum(),
    }
}

/// First-to-last development of one exercise's best-set weight.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthTrend {
    pub exercise_name: Name,
    pub current_weight: Weight,
    pub previous_weight: Weight,
    pub change: f32,
    pub change_percentage: f32,
    pub trend: Trend,
}

/// Best-set weight trends per exercise, descending by change percentage.
///
/// Exercises with fewer than two best sets in the range are omitted.
/// Changes within ±0.1 kg count as neutral.
#[must_use]
pub fn strength_trends(
    workouts: &[Workout],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<StrengthTrend> {
    let mut filtered = filter_by_range(workouts, range, now);
    filtered.sort_by_key(|w| w.date);

    let mut series: BTreeMap<Name, Vec<Weight>> = BTreeMap::new();
    for workout in filtered {
        for exercise in &workout.exercises {
            if let Some(best_set) = exercise.best_set() {
                series
                    .entry(exercise.name.clone())
                    .or_default()
                    .push(best_set.weight);
            }
        }
    }

    let mut trends = series
        .into_iter()
        .filter_map(|(exercise_name, weights)| {
            if weights.len() < 2 {
                return None;
            }
            let first = *weights.first()?;
            let last = *weights.last()?;
            let change = f32::from(last) - f32::from(first);
            let change_percentage = if f32::from(first) > 0.0 {
                change / f32::from(first) * 100.0
            } else {
                0.0
            };
            let trend = if change > 0.1 {
                Trend::Up
            } else if change < -0.1 {
                Trend::Down
            } else {
                Trend::Neutral
            };
            Some(StrengthTrend {
                exercise_name,
                current_weight: last,
                previous_weight: first,
                change,
                change_percentage,
                trend,
            })
        })
        .collect::<Vec<_>>();
    trends.sort_by(|a, b| b.change_percentage.total_cmp(&a.change_percentage));
    trends
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Equipment, Exercise, ExerciseID, MuscleGroup, Reps, Set};

    use super::*;

    fn set(weight: f32, reps: u32) -> Set {
        Set {
            reps: Reps::new(reps).unwrap(),
            weight: Weight::new(weight).unwrap(),
            completed: true,
        }
    }

    fn exercise(name: &str, sets: Vec<Set>) -> Exercise {
        Exercise {
            id: ExerciseID::from(1),
            name: Name::new(name).unwrap(),
            muscle_group: MuscleGroup::Chest,
            equipment: Equipment::Barbell,
            sets,
            rest_time: None,
        }
    }

    fn workout(id: u128, date: NaiveDate, duration: u32, exercises: Vec<Exercise>) -> Workout {
        Workout {
            id: id.into(),
            name: Name::new("W").unwrap(),
            date,
            exercises,
            duration,
            completed: true,
        }
    }

    fn from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_trend_metrics_volume_up() {
        // Current week totals 1000, previous week 500.
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![
            workout(
                1,
                from_ymd(2024, 6, 12),
                60,
                vec![exercise("Bench Press", vec![set(100.0, 10)])],
            ),
            workout(
                2,
                from_ymd(2024, 6, 4),
                60,
                vec![exercise("Bench Press", vec![set(100.0, 5)])],
            ),
        ];

        let metrics = trend_metrics(&workouts, TrendMetric::Volume, TimeRange::Week, now);

        assert_eq!(metrics.value, 1000.0);
        assert_eq!(metrics.previous_value, 500.0);
        assert_eq!(metrics.change, 500.0);
        assert_approx_eq!(metrics.change_percentage, 100.0, 0.001);
        assert_eq!(metrics.trend, Trend::Up);
    }

    #[rstest]
    #[case::workouts(TrendMetric::Workouts, 2.0, 1.0)]
    #[case::duration(TrendMetric::Duration, 105.0, 30.0)]
    fn test_trend_metrics_selectors(
        #[case] metric: TrendMetric,
        #[case] value: f32,
        #[case] previous_value: f32,
    ) {
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![
            workout(1, from_ymd(2024, 6, 15), 60, vec![]),
            workout(2, from_ymd(2024, 6, 10), 45, vec![]),
            workout(3, from_ymd(2024, 6, 2), 30, vec![]),
        ];

        let metrics = trend_metrics(&workouts, metric, TimeRange::Week, now);
        assert_eq!(metrics.value, value);
        assert_eq!(metrics.previous_value, previous_value);
    }

    #[test]
    fn test_trend_metrics_window_boundary() {
        // A workout exactly one window back belongs to the current window,
        // not the previous one.
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![workout(1, from_ymd(2024, 6, 8), 60, vec![])];

        let metrics = trend_metrics(&workouts, TrendMetric::Workouts, TimeRange::Week, now);
        assert_eq!(metrics.value, 1.0);
        assert_eq!(metrics.previous_value, 0.0);
    }

    #[rstest]
    #[case::no_previous_data(vec![workout(1, from_ymd(2024, 6, 12), 60, vec![])], 0.0)]
    #[case::no_data_at_all(vec![], 0.0)]
    fn test_trend_metrics_division_safety(
        #[case] workouts: Vec<Workout>,
        #[case] expected: f32,
    ) {
        let metrics = trend_metrics(
            &workouts,
            TrendMetric::Workouts,
            TimeRange::Week,
            from_ymd(2024, 6, 15),
        );
        assert_eq!(metrics.change_percentage, expected);
        assert!(metrics.change_percentage.is_finite());
    }

    #[test]
    fn test_trend_metrics_down_and_neutral() {
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![workout(1, from_ymd(2024, 6, 2), 60, vec![])];

        let down = trend_metrics(&workouts, TrendMetric::Workouts, TimeRange::Week, now);
        assert_eq!(down.trend, Trend::Down);
        assert_approx_eq!(down.change_percentage, -100.0, 0.001);

        let neutral = trend_metrics(&[], TrendMetric::Workouts, TimeRange::Week, now);
        assert_eq!(neutral.trend, Trend::Neutral);
    }

    #[test]
    fn test_trend_metrics_all_range_is_neutral() {
        let workouts = vec![workout(1, from_ymd(2024, 6, 12), 60, vec![])];
        assert_eq!(
            trend_metrics(
                &workouts,
                TrendMetric::Volume,
                TimeRange::All,
                from_ymd(2024, 6, 15),
            ),
            TrendMetrics::NEUTRAL
        );
    }

    #[test]
    fn test_strength_trends() {
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![
            workout(
                1,
                from_ymd(2024, 6, 1),
                60,
                vec![
                    exercise("Bench Press", vec![set(100.0, 5)]),
                    exercise("Squat", vec![set(140.0, 5)]),
                ],
            ),
            workout(
                2,
                from_ymd(2024, 6, 10),
                60,
                vec![
                    exercise("Bench Press", vec![set(110.0, 5)]),
                    exercise("Squat", vec![set(135.0, 5)]),
                    exercise("Deadlift", vec![set(180.0, 3)]),
                ],
            ),
        ];

        let trends = strength_trends(&workouts, TimeRange::Month, now);

        // Deadlift has a single data point and is omitted.
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].exercise_name, Name::new("Bench Press").unwrap());
        assert_eq!(trends[0].trend, Trend::Up);
        assert_approx_eq!(trends[0].change_percentage, 10.0, 0.001);
        assert_eq!(trends[1].exercise_name, Name::new("Squat").unwrap());
        assert_eq!(trends[1].trend, Trend::Down);
    }

    #[test]
    fn test_strength_trends_neutral_band() {
        let now = from_ymd(2024, 6, 15);
        let workouts = vec![
            workout(
                1,
                from_ymd(2024, 6, 1),
                60,
                vec![exercise("Bench Press", vec![set(100.0, 5)])],
            ),
            workout(
                2,
                from_ymd(2024, 6, 10),
                60,
                vec![exercise("Bench Press", vec![set(100.0, 8)])],
            ),
        ];

        let trends = strength_trends(&workouts, TimeRange::Month, now);
        assert_eq!(trends[0].trend, Trend::Neutral);
        assert_eq!(trends[0].change, 0.0);
    }
}
