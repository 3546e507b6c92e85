//! Daily calorie and macro targets (Mifflin-St Jeor)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{round_half_up, CM_PER_INCH, KG_PER_LB};
use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Constant term of the Mifflin-St Jeor equation
    fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    Maintain,
    MildWeightLoss,
    WeightLoss,
    ExtremeWeightLoss,
    MildWeightGain,
    WeightGain,
    ExtremeWeightGain,
}

impl Goal {
    pub const ALL: [Goal; 7] = [
        Goal::Maintain,
        Goal::MildWeightLoss,
        Goal::WeightLoss,
        Goal::ExtremeWeightLoss,
        Goal::MildWeightGain,
        Goal::WeightGain,
        Goal::ExtremeWeightGain,
    ];

    /// Daily calories added to TDEE
    pub fn adjustment(self) -> i64 {
        match self {
            Goal::Maintain => 0,
            Goal::MildWeightLoss => -250,
            Goal::WeightLoss => -500,
            Goal::ExtremeWeightLoss => -1000,
            Goal::MildWeightGain => 250,
            Goal::WeightGain => 500,
            Goal::ExtremeWeightGain => 1000,
        }
    }
}

/// Lower-case a CLI spelling and drop separators, so `very-active`,
/// `very_active` and `veryActive` all read the same
fn option_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match option_key(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("unknown gender {:?} (expected male or female)", s)),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match option_key(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!(
                "unknown activity level {:?} (expected sedentary, light, moderate, active or very-active)",
                s
            )),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match option_key(s).as_str() {
            "maintain" => Ok(Goal::Maintain),
            "mildweightloss" => Ok(Goal::MildWeightLoss),
            "weightloss" => Ok(Goal::WeightLoss),
            "extremeweightloss" => Ok(Goal::ExtremeWeightLoss),
            "mildweightgain" => Ok(Goal::MildWeightGain),
            "weightgain" => Ok(Goal::WeightGain),
            "extremeweightgain" => Ok(Goal::ExtremeWeightGain),
            _ => Err(format!("unknown goal {:?}", s)),
        }
    }
}

/// Gram range for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroRange {
    pub min: i64,
    pub max: i64,
}

impl MacroRange {
    /// Grams supplying `share_low..share_high` of `calories` at `kcal_per_gram`
    fn of(calories: i64, share_low: f64, share_high: f64, kcal_per_gram: f64) -> Self {
        let a = round_half_up(calories as f64 * share_low / kcal_per_gram) as i64;
        let b = round_half_up(calories as f64 * share_high / kcal_per_gram) as i64;
        // Negative targets would otherwise invert the range
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macros {
    pub protein: MacroRange,
    pub fat: MacroRange,
    pub carbs: MacroRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalorieResult {
    pub bmr: i64,
    pub tdee: i64,
    /// Maintenance calories at every activity level
    pub activity: IndexMap<ActivityLevel, i64>,
    /// Daily calories for every goal at the chosen activity level
    pub goals: IndexMap<Goal, i64>,
    /// Macro split for the chosen goal
    pub macros: Macros,
}

/// Compute BMR, TDEE, goal calories and macro ranges.
///
/// Inputs are metric (kg, cm) and are not validated; see
/// [`CalorieInput::validate`] for the form-level checks.
pub fn calculate_calories(
    age: f64,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Goal,
) -> CalorieResult {
    let bmr = round_half_up(10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + gender.bmr_offset())
        as i64;
    let at_level = |level: ActivityLevel| round_half_up(bmr as f64 * level.multiplier()) as i64;
    let tdee = at_level(activity_level);

    let activity = ActivityLevel::ALL
        .iter()
        .map(|&level| (level, at_level(level)))
        .collect();
    let goals = Goal::ALL
        .iter()
        .map(|&g| (g, tdee + g.adjustment()))
        .collect();

    let calories = tdee + goal.adjustment();
    let macros = Macros {
        protein: MacroRange::of(calories, 0.20, 0.30, 4.0),
        fat: MacroRange::of(calories, 0.20, 0.30, 9.0),
        carbs: MacroRange::of(calories, 0.40, 0.60, 4.0),
    };

    CalorieResult {
        bmr,
        tdee,
        activity,
        goals,
        macros,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitSystem {
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

/// Calorie form input, in either unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieInput {
    pub age: f64,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub unit: UnitSystem,
}

impl CalorieInput {
    /// Weight in kilograms and height in centimetres
    pub fn metric(&self) -> (f64, f64) {
        match self.unit {
            UnitSystem::Metric => (self.weight, self.height),
            UnitSystem::Imperial => (self.weight * KG_PER_LB, self.height * CM_PER_INCH),
        }
    }

    /// Range checks applied by the calculator form
    pub fn validate(&self) -> Result<(), InputError> {
        let (weight_kg, height_cm) = self.metric();
        if !(self.age > 0.0 && self.age <= 120.0) {
            return Err(InputError::Age { min: 1, max: 120 });
        }
        if !(weight_kg > 0.0 && weight_kg <= 1000.0) {
            return Err(InputError::Weight);
        }
        if !(height_cm > 0.0 && height_cm <= 300.0) {
            return Err(InputError::Height);
        }
        Ok(())
    }

    pub fn calculate(&self) -> CalorieResult {
        let (weight_kg, height_cm) = self.metric();
        calculate_calories(
            self.age,
            weight_kg,
            height_cm,
            self.gender,
            self.activity_level,
            self.goal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_sedentary_maintain() {
        let result = calculate_calories(
            30.0,
            70.0,
            175.0,
            Gender::Male,
            ActivityLevel::Sedentary,
            Goal::Maintain,
        );

        // 700 + 1093.75 - 150 + 5
        assert_eq!(result.bmr, 1649);
        assert_eq!(result.tdee, 1979);
        assert_eq!(result.goals[&Goal::Maintain], result.tdee);
        assert_eq!(result.goals[&Goal::WeightLoss], 1479);
        assert_eq!(result.goals[&Goal::ExtremeWeightGain], 2979);
        assert_eq!(result.activity[&ActivityLevel::Sedentary], 1979);
        assert_eq!(result.activity[&ActivityLevel::VeryActive], 3133);

        assert_eq!(result.macros.protein, MacroRange { min: 99, max: 148 });
        assert_eq!(result.macros.fat, MacroRange { min: 44, max: 66 });
        assert_eq!(result.macros.carbs, MacroRange { min: 198, max: 297 });
    }

    #[test]
    fn test_female_offset() {
        let male = calculate_calories(40.0, 60.0, 165.0, Gender::Male, ActivityLevel::Light, Goal::Maintain);
        let female =
            calculate_calories(40.0, 60.0, 165.0, Gender::Female, ActivityLevel::Light, Goal::Maintain);
        assert_eq!(male.bmr - female.bmr, 166);
    }

    #[test]
    fn test_macros_follow_requested_goal() {
        let result = calculate_calories(
            30.0,
            70.0,
            175.0,
            Gender::Male,
            ActivityLevel::Sedentary,
            Goal::WeightLoss,
        );
        // 1479 kcal
        assert_eq!(result.macros.protein, MacroRange { min: 74, max: 111 });
    }

    #[test]
    fn test_macro_ranges_are_ordered_for_every_goal() {
        for goal in Goal::ALL {
            for (age, weight, height) in [(30.0, 70.0, 175.0), (90.0, 20.0, 60.0)] {
                let result = calculate_calories(age, weight, height, Gender::Female, ActivityLevel::Sedentary, goal);
                for range in [result.macros.protein, result.macros.fat, result.macros.carbs] {
                    assert!(range.min <= range.max, "{:?} {:?}", goal, range);
                }
            }
        }
    }

    #[test]
    fn test_tables_keep_declaration_order() {
        let result = calculate_calories(30.0, 70.0, 175.0, Gender::Male, ActivityLevel::Active, Goal::Maintain);
        let levels: Vec<_> = result.activity.keys().copied().collect();
        assert_eq!(levels, ActivityLevel::ALL);
        let goals: Vec<_> = result.goals.keys().copied().collect();
        assert_eq!(goals, Goal::ALL);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["activity"]["veryActive"], 3133);
        assert_eq!(json["goals"]["mildWeightGain"], result.tdee + 250);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("very-active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!("veryActive".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!("mild_weight_loss".parse::<Goal>(), Ok(Goal::MildWeightLoss));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
        assert!("lazy".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_imperial_input_converts_to_metric() {
        let input = CalorieInput {
            age: 30.0,
            gender: Gender::Male,
            weight: 154.32,
            height: 68.9,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            unit: UnitSystem::Imperial,
        };
        let (kg, cm) = input.metric();
        assert!((kg - 70.0).abs() < 0.01);
        assert!((cm - 175.0).abs() < 0.01);
        assert_eq!(input.calculate().bmr, 1649);
    }

    #[test]
    fn test_validation_ranges() {
        let mut input = CalorieInput {
            age: 30.0,
            gender: Gender::Female,
            weight: 60.0,
            height: 165.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            unit: UnitSystem::Metric,
        };
        assert_eq!(input.validate(), Ok(()));

        input.age = 0.0;
        assert_eq!(input.validate(), Err(InputError::Age { min: 1, max: 120 }));
        input.age = 30.0;
        input.weight = -1.0;
        assert_eq!(input.validate(), Err(InputError::Weight));
        input.weight = 60.0;
        input.height = f64::NAN;
        assert_eq!(input.validate(), Err(InputError::Height));
    }
}
