use std::slice::Iter;

use crate::catalog;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Abs,
    Back,
    Biceps,
    Cardio,
    Chest,
    Forearms,
    Legs,
    Shoulders,
    Triceps,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 9] = [
            MuscleGroup::Abs,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Cardio,
            MuscleGroup::Chest,
            MuscleGroup::Forearms,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Triceps => "Triceps",
        }
    }
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub search: String,
    pub muscle_group: Option<MuscleGroup>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises(&self) -> Vec<&'static str> {
        let query = self.search.trim().to_lowercase();

        match self.muscle_group {
            Some(muscle_group) => catalog::exercises(muscle_group)
                .iter()
                .copied()
                .filter(|name| name.to_lowercase().contains(&query))
                .collect(),
            None => {
                let mut names = MuscleGroup::iter()
                    .flat_map(|muscle_group| catalog::exercises(*muscle_group).iter().copied())
                    .filter(|name| name.to_lowercase().contains(&query))
                    .collect::<Vec<_>>();
                names.sort_unstable();
                names.dedup();
                names
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.muscle_group.is_none()
    }

    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<(MuscleGroup, bool)> {
        MuscleGroup::iter()
            .map(|muscle_group| (*muscle_group, self.muscle_group == Some(*muscle_group)))
            .collect()
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        if self.muscle_group == Some(muscle_group) {
            self.muscle_group = None;
        } else {
            self.muscle_group = Some(muscle_group);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(MuscleGroup::iter().count(), 9);
        assert_eq!(MuscleGroup::iter().next(), Some(&MuscleGroup::Abs));
    }

    #[rstest]
    #[case(MuscleGroup::Abs, "Abs")]
    #[case(MuscleGroup::Shoulders, "Shoulders")]
    fn test_muscle_group_name(#[case] muscle_group: MuscleGroup, #[case] name: &str) {
        assert_eq!(muscle_group.name(), name);
    }

    #[test]
    fn test_exercise_filter_by_group_and_search() {
        let filter = ExerciseFilter {
            search: "curl".to_string(),
            muscle_group: Some(MuscleGroup::Biceps),
        };

        assert_eq!(
            filter.exercises(),
            vec![
                "Barbell Curl",
                "Dumbbell Curl",
                "Hammer Curl",
                "Cable Curl",
                "Preacher Curl",
                "Concentration Curl",
                "Incline Dumbbell Curl",
                "Spider Curl",
                "Reverse Curl",
            ]
        );
    }

    #[test]
    fn test_exercise_filter_search_is_case_insensitive() {
        let filter = ExerciseFilter {
            search: "  DEADLIFT ".to_string(),
            muscle_group: None,
        };

        assert_eq!(filter.exercises(), vec!["Deadlift", "Romanian Deadlift"]);
    }

    #[test]
    fn test_exercise_filter_without_group_deduplicates() {
        let filter = ExerciseFilter {
            search: "Hammer Curl".to_string(),
            muscle_group: None,
        };

        // Listed under both Biceps and Forearms.
        assert_eq!(filter.exercises(), vec!["Hammer Curl"]);
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            !ExerciseFilter {
                search: "curl".to_string(),
                muscle_group: None,
            }
            .is_empty()
        );
    }

    #[test]
    fn test_exercise_filter_toggle_muscle_group() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_muscle_group(MuscleGroup::Chest);
        assert_eq!(filter.muscle_group, Some(MuscleGroup::Chest));

        filter.toggle_muscle_group(MuscleGroup::Back);
        assert_eq!(filter.muscle_group, Some(MuscleGroup::Back));

        filter.toggle_muscle_group(MuscleGroup::Back);
        assert_eq!(filter.muscle_group, None);
    }
}
