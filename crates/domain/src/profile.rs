use std::{collections::HashSet, fmt, slice::Iter};

use derive_more::{Display, Into};

use crate::{
    BmiCategory, BmiError, HeightUnit, Property, Weight, WeightUnit, bmi, format_height,
    format_weight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            0 => Sex::Female,
            _ => Sex::Male,
        }
    }
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value {
            "female" => Sex::Female,
            _ => Sex::Male,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::Female => "female",
                Sex::Male => "male",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    MuscleGain,
    Endurance,
    MaxStrength,
    GetToned,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 4] = [
            Goal::MuscleGain,
            Goal::Endurance,
            Goal::MaxStrength,
            Goal::GetToned,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::MuscleGain => "Muscle Gain",
            Goal::Endurance => "Endurance",
            Goal::MaxStrength => "Max Strength",
            Goal::GetToned => "Get Toned",
        }
    }
}

impl Goal {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Goal::MuscleGain => "Focus on muscle mass & size growth",
            _ => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FocusArea {
    Back,
    Shoulders,
    Arms,
    Chest,
    Abs,
    Butt,
    Legs,
    FullBody,
}

impl Property for FocusArea {
    fn iter() -> Iter<'static, FocusArea> {
        static FOCUS_AREAS: [FocusArea; 8] = [
            FocusArea::Back,
            FocusArea::Shoulders,
            FocusArea::Arms,
            FocusArea::Chest,
            FocusArea::Abs,
            FocusArea::Butt,
            FocusArea::Legs,
            FocusArea::FullBody,
        ];
        FOCUS_AREAS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FocusArea::Back => "Back",
            FocusArea::Shoulders => "Shoulders",
            FocusArea::Arms => "Arms",
            FocusArea::Chest => "Chest",
            FocusArea::Abs => "Abs",
            FocusArea::Butt => "Butt",
            FocusArea::Legs => "Legs",
            FocusArea::FullBody => "Full Body",
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(value: f32) -> Result<Self, HeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(HeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Height {
    type Error = HeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Height::new(parsed_value),
            Err(_) => Err(HeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeightError {
    #[error("Height must be a positive decimal number")]
    OutOfRange,
    #[error("Height must be a decimal")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub sex: Sex,
    pub goal: Goal,
    pub focus_areas: HashSet<FocusArea>,
    pub height: Height,
    pub weight: Weight,
}

impl Profile {
    pub fn toggle_focus_area(&mut self, focus_area: FocusArea) {
        if self.focus_areas.contains(&focus_area) {
            self.focus_areas.remove(&focus_area);
        } else {
            self.focus_areas.insert(focus_area);
        }
    }

    pub fn bmi(&self) -> Result<f32, BmiError> {
        bmi(f32::from(self.weight), f32::from(self.height))
    }

    pub fn bmi_category(&self) -> Result<BmiCategory, BmiError> {
        Ok(BmiCategory::of(self.bmi()?))
    }

    #[must_use]
    pub fn height_display(&self, unit: HeightUnit) -> String {
        format_height(f32::from(self.height), unit)
    }

    #[must_use]
    pub fn weight_display(&self, unit: WeightUnit) -> String {
        format_weight(f32::from(self.weight), unit)
    }
}
