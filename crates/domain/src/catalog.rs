use crate::{MuscleGroup, Property};

#[must_use]
pub fn exercises(muscle_group: MuscleGroup) -> &'static [&'static str] {
    match muscle_group {
        MuscleGroup::Abs => ABS,
        MuscleGroup::Back => BACK,
        MuscleGroup::Biceps => BICEPS,
        MuscleGroup::Cardio => CARDIO,
        MuscleGroup::Chest => CHEST,
        MuscleGroup::Forearms => FOREARMS,
        MuscleGroup::Legs => LEGS,
        MuscleGroup::Shoulders => SHOULDERS,
        MuscleGroup::Triceps => TRICEPS,
    }
}

/// First muscle group (in declaration order) whose list contains `name`.
/// Some exercises are listed under more than one group.
#[must_use]
pub fn muscle_group(name: &str) -> Option<MuscleGroup> {
    MuscleGroup::iter()
        .copied()
        .find(|muscle_group| {
            exercises(*muscle_group)
                .iter()
                .any(|exercise| *exercise == name)
        })
}

const ABS: &[&str] = &[
    "Ab-Wheel Rollout",
    "Cable Crunch",
    "Crunch",
    "Crunch Machine",
    "Decline Crunch",
    "Dragon Flag",
    "Elbow Support Leg Raise",
    "Hanging Knee Raise",
    "Hanging Leg Raise",
    "Plank",
    "Plate Crunch Machine",
    "Russian Twist w Medicine Ball",
    "Side Plank",
];

const BACK: &[&str] = &[
    "Barbell Row",
    "Cable Row",
    "Deadlift",
    "Lat Pulldown",
    "Pull-up",
    "Seated Cable Row",
    "T-Bar Row",
    "Wide-Grip Pull-up",
    "Bent-Over Row",
    "One-Arm Dumbbell Row",
];

const BICEPS: &[&str] = &[
    "Barbell Curl",
    "Dumbbell Curl",
    "Hammer Curl",
    "Cable Curl",
    "Preacher Curl",
    "Concentration Curl",
    "Incline Dumbbell Curl",
    "21s",
    "Spider Curl",
    "Reverse Curl",
];

const CARDIO: &[&str] = &[
    "Running",
    "Cycling",
    "Swimming",
    "Rowing",
    "Elliptical",
    "Jump Rope",
    "Burpees",
    "Mountain Climbers",
    "High Knees",
    "Jumping Jacks",
];

const CHEST: &[&str] = &[
    "Bench Press",
    "Incline Bench Press",
    "Decline Bench Press",
    "Dumbbell Press",
    "Push-up",
    "Cable Fly",
    "Dumbbell Fly",
    "Dips",
    "Pec Deck",
    "Incline Dumbbell Fly",
];

const FOREARMS: &[&str] = &[
    "Wrist Curl",
    "Reverse Wrist Curl",
    "Farmer's Walk",
    "Plate Pinch",
    "Hammer Curl",
    "Reverse Curl",
    "Wrist Roller",
    "Grip Squeeze",
    "Towel Wring",
    "Finger Curl",
];

const LEGS: &[&str] = &[
    "Squat",
    "Deadlift",
    "Lunge",
    "Leg Press",
    "Leg Extension",
    "Leg Curl",
    "Calf Raise",
    "Bulgarian Split Squat",
    "Romanian Deadlift",
    "Hack Squat",
];

const SHOULDERS: &[&str] = &[
    "Overhead Press",
    "Lateral Raise",
    "Front Raise",
    "Rear Delt Fly",
    "Arnold Press",
    "Upright Row",
    "Face Pull",
    "Shrug",
    "Pike Push-up",
    "Cable Lateral Raise",
];

const TRICEPS: &[&str] = &[
    "Close-Grip Bench Press",
    "Tricep Dip",
    "Overhead Extension",
    "Tricep Pushdown",
    "Skull Crusher",
    "Diamond Push-up",
    "Tricep Kickback",
    "Overhead Cable Extension",
    "Bench Dip",
    "Tricep Rope Pushdown",
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_exercises_no_group_is_empty() {
        for muscle_group in MuscleGroup::iter() {
            assert!(!exercises(*muscle_group).is_empty());
        }
    }

    #[rstest]
    #[case("Bench Press", Some(MuscleGroup::Chest))]
    #[case("Squat", Some(MuscleGroup::Legs))]
    #[case("Deadlift", Some(MuscleGroup::Back))]
    #[case("Hammer Curl", Some(MuscleGroup::Biceps))]
    #[case("Running", Some(MuscleGroup::Cardio))]
    #[case("Zercher Squat", None)]
    fn test_muscle_group(#[case] name: &str, #[case] expected: Option<MuscleGroup>) {
        assert_eq!(muscle_group(name), expected);
    }
}
