use std::slice::Iter;

use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, Set, Time, Weight};

/// Enumerable domain property with a fixed set of values.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// An exercise as performed within a single workout.
///
/// The `name` is the cross-workout identity key; the `id` only identifies
/// this instance within its workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
    pub sets: Vec<Set>,
    pub rest_time: Option<Time>,
}

impl Exercise {
    /// Total volume over completed sets.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.sets.iter().map(Set::volume).sum()
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &Set> {
        self.sets.iter().filter(|s| s.completed)
    }

    /// The completed set maximizing `weight * reps`. The first such set wins
    /// on ties.
    #[must_use]
    pub fn best_set(&self) -> Option<&Set> {
        self.completed_sets().fold(None, |best: Option<&Set>, set| match best {
            Some(b) if b.volume() >= set.volume() => Some(b),
            _ => Some(set),
        })
    }

    /// Heaviest weight among completed sets, regardless of reps.
    #[must_use]
    pub fn max_completed_weight(&self) -> Option<Weight> {
        self.completed_sets()
            .map(|s| s.weight)
            .fold(None, |max, weight| match max {
                Some(m) if m >= weight => Some(m),
                _ => Some(weight),
            })
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Glutes,
    Core,
    Cardio,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 10] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::Core,
            MuscleGroup::Cardio,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Dumbbells,
    Cable,
    Machine,
    Bodyweight,
    Kettlebell,
    ResistanceBand,
    Other,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 8] = [
            Equipment::Barbell,
            Equipment::Dumbbells,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Bodyweight,
            Equipment::Kettlebell,
            Equipment::ResistanceBand,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::Other => "Other",
        }
    }
}
