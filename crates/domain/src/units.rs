const CM_PER_INCH: f32 = 2.54;
const INCHES_PER_FOOT: f32 = 12.0;
const LBS_PER_KG: f32 = 2.204_62;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeightUnit {
    Cm,
    FtIn,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightUnit {
    Kg,
    Lbs,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn cm_to_feet_inches(cm: f32) -> (u32, u32) {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor() as u32;
    let inches = (total_inches % INCHES_PER_FOOT).round() as u32;

    // A remainder that rounds up to a full foot carries over.
    if inches == 12 {
        (feet + 1, 0)
    } else {
        (feet, inches)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn kg_to_lbs(kg: f32) -> u32 {
    (kg * LBS_PER_KG).round() as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn lbs_to_kg(lbs: f32) -> u32 {
    (lbs / LBS_PER_KG).round() as u32
}

pub fn bmi(weight_kg: f32, height_cm: f32) -> Result<f32, BmiError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(BmiError::NonPositiveWeight);
    }

    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BmiError::NonPositiveHeight);
    }

    let height_m = height_cm / 100.0;
    Ok((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BmiError {
    #[error("Weight must be a positive decimal number")]
    NonPositiveWeight,
    #[error("Height must be a positive decimal number")]
    NonPositiveHeight,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    #[must_use]
    pub fn of(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Healthy
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You're underweight. Consider gaining some weight.",
            BmiCategory::Healthy => "You've got a great figure! Keep it up!",
            BmiCategory::Overweight => "You're overweight. Consider losing some weight.",
            BmiCategory::Obese => "You're obese. Consider significant weight loss.",
        }
    }
}

#[must_use]
pub fn format_height(cm: f32, unit: HeightUnit) -> String {
    match unit {
        HeightUnit::Cm => format!("{cm:.0} cm"),
        HeightUnit::FtIn => {
            let (feet, inches) = cm_to_feet_inches(cm);
            format!("{feet}\u{2032} {inches}\u{2033}")
        }
    }
}

#[must_use]
pub fn format_weight(kg: f32, unit: WeightUnit) -> String {
    match unit {
        WeightUnit::Kg => format!("{kg:.0} kg"),
        WeightUnit::Lbs => format!("{} lbs", kg_to_lbs(kg)),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(170.0, (5, 7))]
    #[case(182.0, (6, 0))]
    #[case(152.0, (5, 0))]
    #[case(140.0, (4, 7))]
    #[case(220.0, (7, 3))]
    fn test_cm_to_feet_inches(#[case] cm: f32, #[case] expected: (u32, u32)) {
        assert_eq!(cm_to_feet_inches(cm), expected);
    }

    #[rstest]
    #[case(83.0, 183)]
    #[case(70.0, 154)]
    #[case(36.0, 79)]
    fn test_kg_to_lbs(#[case] kg: f32, #[case] expected: u32) {
        assert_eq!(kg_to_lbs(kg), expected);
    }

    #[rstest]
    #[case(183.0, 83)]
    #[case(154.0, 70)]
    fn test_lbs_to_kg(#[case] lbs: f32, #[case] expected: u32) {
        assert_eq!(lbs_to_kg(lbs), expected);
    }

    #[test]
    fn test_bmi() {
        assert_approx_eq!(bmi(70.0, 170.0).unwrap(), 24.2, 0.001);
        assert_approx_eq!(bmi(83.0, 182.0).unwrap(), 25.1, 0.001);
    }

    #[rstest]
    #[case(0.0, 170.0, BmiError::NonPositiveWeight)]
    #[case(-70.0, 170.0, BmiError::NonPositiveWeight)]
    #[case(70.0, 0.0, BmiError::NonPositiveHeight)]
    #[case(70.0, -170.0, BmiError::NonPositiveHeight)]
    fn test_bmi_invalid_input(
        #[case] weight_kg: f32,
        #[case] height_cm: f32,
        #[case] expected: BmiError,
    ) {
        assert_eq!(bmi(weight_kg, height_cm), Err(expected));
    }

    #[rstest]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Healthy)]
    #[case(24.9, BmiCategory::Healthy)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_bmi_category(#[case] bmi: f32, #[case] expected: BmiCategory) {
        assert_eq!(BmiCategory::of(bmi), expected);
    }

    #[rstest]
    #[case(170.0, HeightUnit::Cm, "170 cm")]
    #[case(170.0, HeightUnit::FtIn, "5\u{2032} 7\u{2033}")]
    fn test_format_height(#[case] cm: f32, #[case] unit: HeightUnit, #[case] expected: &str) {
        assert_eq!(format_height(cm, unit), expected);
    }

    #[rstest]
    #[case(70.0, WeightUnit::Kg, "70 kg")]
    #[case(70.0, WeightUnit::Lbs, "154 lbs")]
    fn test_format_weight(#[case] kg: f32, #[case] unit: WeightUnit, #[case] expected: &str) {
        assert_eq!(format_weight(kg, unit), expected);
    }
}
