use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_domain::{
    ExerciseSet, GroupStats, MuscleGroup, Reps, RepsError, TimeFilter, Totals, Weight, WeightError,
    append_set, breakdown, filter_series, group_by_day, one_rep_max_series, personal_record,
    totals,
};
use log::{debug, warn};

/// A set as the UI hands it around between screens: weight, reps and the
/// timestamp still in their string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSet {
    pub weight: String,
    pub reps: String,
    pub timestamp: String,
    pub comment: Option<String>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UpdateError {
    #[error("unknown exercise")]
    UnknownExercise,
    #[error("unknown set number")]
    UnknownSetNumber,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestoreError {
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Reps(#[from] RepsError),
}

/// The single system of record of the running application: an append-only
/// log of sets per exercise name. All derivations are delegated to the pure
/// domain functions; each append replaces the stored sequence with the
/// successor sequence those functions produce.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutLog {
    sets: BTreeMap<String, Vec<ExerciseSet>>,
}

impl WorkoutLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_set(
        &mut self,
        exercise: &str,
        weight: Weight,
        reps: Reps,
        now: DateTime<Utc>,
    ) -> &ExerciseSet {
        let sets = self.sets.entry(exercise.to_string()).or_default();
        *sets = append_set(sets, weight, reps, now);
        debug!("recorded set {} of {exercise}: {weight} kg x {reps} reps", sets.len());
        &sets[sets.len() - 1]
    }

    #[must_use]
    pub fn exercises(&self) -> Vec<&str> {
        self.sets.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn sets(&self, exercise: &str) -> &[ExerciseSet] {
        self.sets.get(exercise).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn history(&self, exercise: &str) -> Vec<(NaiveDate, Vec<ExerciseSet>)> {
        group_by_day(self.sets(exercise))
    }

    #[must_use]
    pub fn personal_record(&self, exercise: &str) -> Option<&ExerciseSet> {
        personal_record(self.sets(exercise))
    }

    #[must_use]
    pub fn progression(
        &self,
        exercise: &str,
        filter: TimeFilter,
        today: NaiveDate,
    ) -> Vec<(NaiveDate, f32)> {
        filter_series(&one_rep_max_series(self.sets(exercise)), filter, today)
    }

    #[must_use]
    pub fn breakdown(&self) -> BTreeMap<MuscleGroup, GroupStats> {
        breakdown(
            self.sets
                .iter()
                .map(|(name, sets)| (name.as_str(), sets.as_slice())),
        )
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        totals(self.sets.values().map(Vec::as_slice))
    }

    pub fn update_comment(
        &mut self,
        exercise: &str,
        set_number: u32,
        comment: Option<String>,
    ) -> Result<(), UpdateError> {
        let sets = self
            .sets
            .get_mut(exercise)
            .ok_or(UpdateError::UnknownExercise)?;
        let set = sets
            .iter_mut()
            .find(|set| set.set_number == set_number)
            .ok_or(UpdateError::UnknownSetNumber)?;
        set.comment = comment;
        Ok(())
    }

    /// Re-ingest a previously recorded sequence, replacing any sets stored
    /// for `exercise`. All records are validated before the log is touched;
    /// an invalid weight or rep count fails the whole call. A timestamp that
    /// does not parse as RFC 3339 is replaced by `now` rather than losing
    /// the set. Set numbers and record flags are recomputed by replaying the
    /// sequence.
    pub fn restore(
        &mut self,
        exercise: &str,
        records: &[RecordedSet],
        now: DateTime<Utc>,
    ) -> Result<usize, RestoreError> {
        let mut parsed = Vec::with_capacity(records.len());
        for record in records {
            let weight = Weight::try_from(record.weight.as_str())?;
            let reps = Reps::try_from(record.reps.as_str())?;
            let timestamp = parse_timestamp(&record.timestamp, now);
            parsed.push((weight, reps, timestamp, record.comment.clone()));
        }

        let mut sets = Vec::new();
        for (weight, reps, timestamp, comment) in parsed {
            sets = append_set(&sets, weight, reps, timestamp);
            if let Some(set) = sets.last_mut() {
                set.comment = comment;
            }
        }

        let count = sets.len();
        debug!("restored {count} sets of {exercise}");
        self.sets.insert(exercise.to_string(), sets);
        Ok(count)
    }
}

fn parse_timestamp(value: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => timestamp.with_timezone(&Utc),
        Err(_) => {
            warn!("unparseable timestamp {value:?}, falling back to the current time");
            now
        }
    }
}
