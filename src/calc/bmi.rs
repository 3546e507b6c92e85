//! Body mass index

use serde::Serialize;
use std::fmt;

use super::{round_to, CM_PER_INCH, KG_PER_LB, LB_PER_KG};
use crate::error::InputError;

/// Upper bounds (exclusive) of the underweight, normal and overweight bands
const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

const MIN_AGE: u32 = 2;
const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    fn of(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(name)
    }
}

/// Height and weight as entered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BmiInput {
    Metric { height_cm: f64, weight_kg: f64 },
    Us { feet: f64, inches: f64, pounds: f64 },
}

impl BmiInput {
    /// Height in metres and weight in kilograms
    fn si(&self) -> (f64, f64) {
        match *self {
            BmiInput::Metric {
                height_cm,
                weight_kg,
            } => (height_cm / 100.0, weight_kg),
            BmiInput::Us {
                feet,
                inches,
                pounds,
            } => (
                (feet * 12.0 + inches) * CM_PER_INCH / 100.0,
                pounds * KG_PER_LB,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub healthy_range: String,
    /// Lightest healthy weight, in the input's weight unit
    pub ideal_weight_min: f64,
    /// Heaviest healthy weight, in the input's weight unit
    pub ideal_weight_max: f64,
    pub bmi_prime: f64,
    pub ponderal_index: f64,
}

pub fn calculate_bmi(age: f64, input: BmiInput) -> Result<BmiResult, InputError> {
    if !(age >= f64::from(MIN_AGE) && age <= f64::from(MAX_AGE)) {
        return Err(InputError::Age {
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }

    let (height_m, weight_kg) = input.si();
    if !(height_m.is_finite() && height_m > 0.0) {
        return Err(InputError::Height);
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(InputError::Weight);
    }

    let area = height_m * height_m;
    let raw = weight_kg / area;
    let bmi = round_to(raw, 1);

    let to_display_unit = |kg: f64| match input {
        BmiInput::Metric { .. } => kg,
        BmiInput::Us { .. } => kg * LB_PER_KG,
    };

    Ok(BmiResult {
        bmi,
        category: BmiCategory::of(bmi),
        healthy_range: format!("{} - {}", UNDERWEIGHT_BELOW, NORMAL_BELOW),
        ideal_weight_min: round_to(to_display_unit(UNDERWEIGHT_BELOW * area), 1),
        ideal_weight_max: round_to(to_display_unit(NORMAL_BELOW * area), 1),
        bmi_prime: round_to(raw / NORMAL_BELOW, 2),
        ponderal_index: round_to(weight_kg / (area * height_m), 1),
    })
}
