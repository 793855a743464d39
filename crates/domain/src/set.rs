use chrono::{DateTime, Utc};
use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Ok(Reps::new(parsed_value)),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a non-negative integer")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub weight: Weight,
    pub reps: Reps,
    pub set_number: u32,
    pub timestamp: DateTime<Utc>,
    pub comment: Option<String>,
    pub is_personal_record: bool,
}

/// Append a newly performed set to an exercise's sequence.
///
/// The returned sequence contains all entries of `existing` followed by the
/// new set, numbered `existing.len() + 1` and stamped with `now`. The new set
/// carries the personal-record flag if it is strictly better than every prior
/// set under the (weight, then reps) order, in which case the flag is cleared
/// on the previous record holder. No entry is ever removed or reordered.
#[must_use]
pub fn append_set(
    existing: &[ExerciseSet],
    weight: Weight,
    reps: Reps,
    now: DateTime<Utc>,
) -> Vec<ExerciseSet> {
    let is_personal_record = is_record(existing, weight, reps);

    let mut sets = existing.to_vec();
    if is_personal_record {
        for set in &mut sets {
            set.is_personal_record = false;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let set_number = existing.len() as u32 + 1;
    sets.push(ExerciseSet {
        weight,
        reps,
        set_number,
        timestamp: now,
        comment: None,
        is_personal_record,
    });
    sets
}

#[must_use]
pub fn personal_record(sets: &[ExerciseSet]) -> Option<&ExerciseSet> {
    sets.iter().find(|set| set.is_personal_record)
}

fn is_record(existing: &[ExerciseSet], weight: Weight, reps: Reps) -> bool {
    let Some(best) = existing
        .iter()
        .reduce(|best, set| if beats(set.weight, set.reps, best) { set } else { best })
    else {
        return true;
    };

    // Repeating an exact (weight, reps) pair never re-awards the record.
    if existing
        .iter()
        .any(|set| set.weight == weight && set.reps == reps)
    {
        return false;
    }

    beats(weight, reps, best)
}

fn beats(weight: Weight, reps: Reps, best: &ExerciseSet) -> bool {
    weight > best.weight || (weight == best.weight && reps > best.reps)
}
