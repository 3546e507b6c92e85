//! Calculator commands

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::calc::{self, BmiInput, CalorieInput, EmiResult};
use crate::helpers::format_currency;
use crate::Site;

/// How a calculator result should be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
    Csv,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Loan EMI with its amortization schedule
pub fn emi(site: &Site, principal: f64, rate: f64, years: f64, output: Output) -> Result<()> {
    let Some(result) = calc::calculate_emi(principal, rate, years) else {
        anyhow::bail!("Please enter valid loan values");
    };
    tracing::debug!("EMI schedule has {} months", result.schedule.len());

    match output {
        Output::Json => print_json(&result)?,
        Output::Csv => print!("{}", result.to_csv()),
        Output::Text => print!("{}", emi_summary(&result, &site.config.currency_symbol)),
    }
    Ok(())
}

fn emi_summary(result: &EmiResult, symbol: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Monthly EMI:    {}\n", format_currency(result.monthly_emi, symbol)));
    out.push_str(&format!("Total interest: {}\n", format_currency(result.total_interest, symbol)));
    out.push_str(&format!("Total amount:   {}\n", format_currency(result.total_amount, symbol)));
    out.push_str(&format!("Months:         {}\n", result.schedule.len()));
    out
}

/// Daily calorie targets
pub fn calories(input: &CalorieInput, json: bool) -> Result<()> {
    input.validate()?;
    let result = input.calculate();

    if json {
        return print_json(&result);
    }

    println!("BMR:  {} kcal", result.bmr);
    println!("TDEE: {} kcal ({:?})", result.tdee, input.activity_level);
    println!();
    println!("By activity level:");
    for (level, kcal) in &result.activity {
        println!("  {:<12} {}", format!("{:?}", level), kcal);
    }
    println!("By goal:");
    for (goal, kcal) in &result.goals {
        println!("  {:<18} {}", format!("{:?}", goal), kcal);
    }
    let m = &result.macros;
    println!("Macros for {:?}:", input.goal);
    println!("  protein {}-{} g", m.protein.min, m.protein.max);
    println!("  fat     {}-{} g", m.fat.min, m.fat.max);
    println!("  carbs   {}-{} g", m.carbs.min, m.carbs.max);
    Ok(())
}

/// Body mass index
pub fn bmi(age: f64, input: BmiInput, json: bool) -> Result<()> {
    let result = calc::calculate_bmi(age, input)?;

    if json {
        return print_json(&result);
    }

    let unit = match input {
        BmiInput::Metric { .. } => "kg",
        BmiInput::Us { .. } => "lb",
    };
    println!("BMI: {} ({})", result.bmi, result.category);
    println!("Healthy BMI range: {}", result.healthy_range);
    println!(
        "Healthy weight: {} - {} {}",
        result.ideal_weight_min, result.ideal_weight_max, unit
    );
    println!("BMI prime: {}", result.bmi_prime);
    println!("Ponderal index: {} kg/m3", result.ponderal_index);
    Ok(())
}

fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?}, expected YYYY-MM-DD", value))
}

/// Span between two dates
pub fn date_between(start: &str, end: &str, json: bool) -> Result<()> {
    let span = calc::duration(parse_day(start)?, parse_day(end)?);
    if json {
        return print_json(&span);
    }
    println!("{} days", span.total_days);
    println!(
        "about {} years, {} months, {} days",
        span.years, span.months, span.days
    );
    Ok(())
}

/// A date moved by a number of days
pub fn date_add(date: &str, days: i64) -> Result<()> {
    let date = parse_day(date)?;
    let Some(moved) = calc::add_days(date, days) else {
        anyhow::bail!("Date out of range");
    };
    println!("{}", moved.format("%Y-%m-%d"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emi_summary_uses_currency_symbol() {
        let result = calc::calculate_emi(100000.0, 10.0, 1.0).unwrap();
        let summary = emi_summary(&result, "₹");
        assert!(summary.contains("Monthly EMI:    ₹8,792"));
        assert!(summary.contains("Months:         12"));
    }

    #[test]
    fn test_invalid_emi_is_an_error() {
        let site = Site::new(tempfile::TempDir::new().unwrap().path()).unwrap();
        let err = emi(&site, 0.0, 10.0, 1.0, Output::Text).unwrap_err();
        assert_eq!(err.to_string(), "Please enter valid loan values");
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_day("03/01/2024").is_err());
    }
}
