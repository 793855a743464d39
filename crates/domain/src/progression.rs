use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};

use crate::{ExerciseSet, MuscleGroup, Reps, Weight, catalog};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeFilter {
    All,
    OneYear = 365,
    SixMonths = 182,
    ThreeMonths = 91,
    OneMonth = 30,
}

impl TimeFilter {
    #[must_use]
    pub fn first_day(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeFilter::All => None,
            _ => Some(today - Duration::days(self as i64)),
        }
    }
}

/// Estimated one-rep max after Epley: `weight * (1 + reps / 30)`, rounded to
/// one decimal place.
#[must_use]
pub fn one_rep_max(weight: Weight, reps: Reps) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let reps = u32::from(reps) as f32;
    (f32::from(weight) * (1.0 + reps / 30.0) * 10.0).round() / 10.0
}

#[must_use]
pub fn one_rep_max_series(sets: &[ExerciseSet]) -> Vec<(NaiveDate, f32)> {
    let mut series = sets
        .iter()
        .map(|set| (set.timestamp, one_rep_max(set.weight, set.reps)))
        .collect::<Vec<_>>();
    series.sort_by_key(|(timestamp, _)| *timestamp);
    series
        .into_iter()
        .map(|(timestamp, value)| (timestamp.date_naive(), value))
        .collect()
}

#[must_use]
pub fn filter_series(
    series: &[(NaiveDate, f32)],
    filter: TimeFilter,
    today: NaiveDate,
) -> Vec<(NaiveDate, f32)> {
    match filter.first_day(today) {
        Some(first_day) => series
            .iter()
            .filter(|(date, _)| *date >= first_day)
            .copied()
            .collect(),
        None => series.to_vec(),
    }
}

#[must_use]
pub fn change(series: &[(NaiveDate, f32)]) -> Option<f32> {
    if series.len() < 2 {
        return None;
    }
    let (_, first) = series.first()?;
    let (_, last) = series.last()?;
    Some(last - first)
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub sets: u32,
    pub reps: u32,
    pub volume: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Totals {
    pub workouts: u32,
    pub sets: u32,
    pub reps: u32,
    pub volume: f32,
}

/// Per-muscle-group totals over all logged exercises. Exercises not found in
/// the catalog are skipped.
#[must_use]
pub fn breakdown<'a>(
    log: impl IntoIterator<Item = (&'a str, &'a [ExerciseSet])>,
) -> BTreeMap<MuscleGroup, GroupStats> {
    let mut result: BTreeMap<MuscleGroup, GroupStats> = BTreeMap::new();
    for (name, sets) in log {
        let Some(muscle_group) = catalog::muscle_group(name) else {
            continue;
        };
        let stats = result.entry(muscle_group).or_default();
        for set in sets {
            stats.sets += 1;
            stats.reps += u32::from(set.reps);
            stats.volume += volume_load(set);
        }
    }
    result
}

#[must_use]
pub fn volume_shares(breakdown: &BTreeMap<MuscleGroup, GroupStats>) -> BTreeMap<MuscleGroup, f32> {
    let total = breakdown.values().map(|stats| stats.volume).sum::<f32>();
    if total <= 0.0 {
        return BTreeMap::new();
    }
    breakdown
        .iter()
        .map(|(muscle_group, stats)| (*muscle_group, stats.volume / total * 100.0))
        .collect()
}

#[must_use]
pub fn totals<'a>(log: impl IntoIterator<Item = &'a [ExerciseSet]>) -> Totals {
    let mut days = BTreeSet::new();
    let mut totals = Totals::default();
    for sets in log {
        for set in sets {
            days.insert(set.timestamp.date_naive());
            totals.sets += 1;
            totals.reps += u32::from(set.reps);
            totals.volume += volume_load(set);
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    {
        totals.workouts = days.len() as u32;
    }
    totals
}

fn volume_load(set: &ExerciseSet) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let reps = u32::from(set.reps) as f32;
    f32::from(set.weight) * reps
}
