use ahash::RandomState;
use hashbrown::HashMap;

use alloc::{string::String, vec::Vec};

/// The lift an exercise belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseVariant {
    /// Not classified
    #[default]
    Unknown,
    /// Squat and its variations
    Squat,
    /// Bench press and its variations
    Bench,
    /// Deadlift and its variations
    Deadlift,
    /// Any other exercise
    Other,
}

/// The load performed for one entry of an exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseDetails<T> {
    /// Weight lifted, in kilograms
    pub weight: T,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
    /// Rate of perceived exertion, if recorded
    pub rpe: Option<T>,
}

/// One exercise entry of a workout
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise<T> {
    /// The lift the exercise belongs to
    pub variant: ExerciseVariant,
    /// Free-form name, e.g. "Paused"
    pub description: String,
    /// The load performed
    pub details: ExerciseDetails<T>,
}

/// Every entry of one exercise within a workout
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedExercise<T> {
    /// The lift shared by the group
    pub variant: ExerciseVariant,
    /// The description shared by the group
    pub description: String,
    /// Loads of each entry, in workout order
    pub groups: Vec<ExerciseDetails<T>>,
}

/// Groups exercises that share a variant and description
///
/// Groups appear in the order their first entry appears, and each group
/// keeps its entries in workout order.
///
/// # Arguments
///
/// * `exercises` - The exercises of a workout, in the order they were performed
///
/// # Returns
///
/// * `Vec<GroupedExercise<T>>` - One group per distinct `(variant, description)`
///
/// # Examples
///
/// ```
/// use dated_trend::{Exercise, ExerciseDetails, ExerciseVariant, group_by_exercise};
///
/// let set = |weight: f64| ExerciseDetails { weight, reps: 5, sets: 3, rpe: None };
/// let exercises = [
///     Exercise { variant: ExerciseVariant::Squat, description: "Low bar".into(), details: set(140.0) },
///     Exercise { variant: ExerciseVariant::Bench, description: "Paused".into(), details: set(90.0) },
///     Exercise { variant: ExerciseVariant::Squat, description: "Low bar".into(), details: set(150.0) },
/// ];
///
/// let grouped = group_by_exercise(&exercises);
///
/// assert_eq!(grouped.len(), 2);
/// assert_eq!(grouped[0].variant, ExerciseVariant::Squat);
/// assert_eq!(grouped[0].groups, vec![set(140.0), set(150.0)]);
/// assert_eq!(grouped[1].description, "Paused");
/// ```
pub fn group_by_exercise<T: Copy>(exercises: &[Exercise<T>]) -> Vec<GroupedExercise<T>> {
    let mut index: HashMap<(ExerciseVariant, &str), usize, RandomState> =
        HashMap::with_hasher(RandomState::default());
    let mut grouped: Vec<GroupedExercise<T>> = Vec::new();

    for exercise in exercises {
        let key = (exercise.variant, exercise.description.as_str());
        let position = *index.entry(key).or_insert_with(|| {
            grouped.push(GroupedExercise {
                variant: exercise.variant,
                description: exercise.description.clone(),
                groups: Vec::new(),
            });
            grouped.len() - 1
        });

        grouped[position].groups.push(exercise.details);
    }

    grouped
}
