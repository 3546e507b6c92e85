//! Financial and health calculators
//!
//! Every function here is pure: no I/O, no shared state.

pub mod bmi;
pub mod calorie;
pub mod date;
pub mod emi;

pub use bmi::{calculate_bmi, BmiCategory, BmiInput, BmiResult};
pub use calorie::{
    calculate_calories, ActivityLevel, CalorieInput, CalorieResult, Gender, Goal, MacroRange,
    Macros, UnitSystem,
};
pub use date::{add_days, duration, DateSpan};
pub use emi::{calculate_emi, EmiResult, ScheduleEntry};

/// Kilograms in one avoirdupois pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Pounds in one kilogram, as displayed to users
pub const LB_PER_KG: f64 = 2.204_62;

/// Centimetres in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Round half up (towards positive infinity), matching the figures users
/// see in the browser tools.
pub fn round_half_up(x: f64) -> f64 {
    // f64::round sends negative halves away from zero
    if x.fract() == -0.5 {
        x.ceil()
    } else {
        x.round()
    }
}

/// Round half up to a number of decimal places
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(x * factor) / factor
}
