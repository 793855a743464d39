use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ExerciseSet;

/// Group an exercise's sets by the calendar day of their timestamp.
///
/// Days are derived in UTC. Groups are ordered newest-first, sets within a
/// group by ascending set number. The transform is pure and idempotent:
/// flattening the result and grouping it again yields the same output.
#[must_use]
pub fn group_by_day(sets: &[ExerciseSet]) -> Vec<(NaiveDate, Vec<ExerciseSet>)> {
    let mut days: BTreeMap<NaiveDate, Vec<ExerciseSet>> = BTreeMap::new();

    for set in sets {
        days.entry(set.timestamp.date_naive())
            .or_default()
            .push(set.clone());
    }

    days.into_iter()
        .rev()
        .map(|(day, mut sets)| {
            sets.sort_by_key(|set| set.set_number);
            (day, sets)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::{Reps, Weight};

    use super::*;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn set(set_number: u32, timestamp: DateTime<Utc>) -> ExerciseSet {
        ExerciseSet {
            weight: Weight::new(50.0).unwrap(),
            reps: Reps::new(10),
            set_number,
            timestamp,
            comment: None,
            is_personal_record: false,
        }
    }

    #[test]
    fn test_group_by_day_empty() {
        assert_eq!(group_by_day(&[]), vec![]);
    }

    #[test]
    fn test_group_by_day_orders_days_and_sets() {
        let sets = vec![set(2, at(2, 10)), set(1, at(1, 9)), set(1, at(2, 8))];

        let history = group_by_day(&sets);

        assert_eq!(
            history
                .iter()
                .map(|(day, sets)| (
                    *day,
                    sets.iter().map(|set| set.set_number).collect::<Vec<_>>()
                ))
                .collect::<Vec<_>>(),
            vec![
                (at(2, 0).date_naive(), vec![1, 2]),
                (at(1, 0).date_naive(), vec![1]),
            ]
        );
    }

    #[test]
    fn test_group_by_day_days_strictly_descending() {
        let sets = vec![
            set(1, at(3, 9)),
            set(2, at(1, 9)),
            set(3, at(5, 9)),
            set(4, at(3, 18)),
        ];

        let history = group_by_day(&sets);

        assert!(
            history
                .windows(2)
                .all(|window| window[0].0 > window[1].0)
        );
    }

    #[test]
    fn test_group_by_day_idempotent() {
        let sets = vec![
            set(3, at(2, 10)),
            set(1, at(1, 9)),
            set(2, at(2, 8)),
            set(4, at(3, 20)),
        ];

        let history = group_by_day(&sets);
        let flattened = history
            .iter()
            .flat_map(|(_, sets)| sets.clone())
            .collect::<Vec<_>>();

        assert_eq!(group_by_day(&flattened), history);
    }
}
