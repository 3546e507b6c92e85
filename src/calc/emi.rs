//! Equated monthly installment (EMI) with a reducing-balance schedule

use serde::Serialize;

use super::{round_half_up, round_to};

/// Remaining balance below which a loan counts as repaid
const BALANCE_TOLERANCE: f64 = 0.01;

/// One month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    /// 1-based month index
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Outstanding balance after this month's payment
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiResult {
    #[serde(rename = "monthlyEMI")]
    pub monthly_emi: f64,
    pub total_amount: f64,
    pub total_interest: f64,
    pub schedule: Vec<ScheduleEntry>,
}

impl EmiResult {
    /// Render the schedule as CSV, one row per month
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Month,EMI,Principal,Interest,Balance\n");
        for entry in &self.schedule {
            csv.push_str(&format!(
                "{},{:.2},{:.2},{:.2},{:.2}\n",
                entry.month, entry.payment, entry.principal, entry.interest, entry.balance
            ));
        }
        csv
    }
}

/// Compute the EMI and full schedule for a loan.
///
/// Returns `None` for inputs that cannot describe a loan: non-finite values,
/// a non-positive principal or tenure, a negative rate, a tenure that
/// rounds to zero months or past `u32::MAX` months, or an EMI that overflows.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
) -> Option<EmiResult> {
    if !principal.is_finite() || !annual_rate_percent.is_finite() || !tenure_years.is_finite() {
        return None;
    }
    if principal <= 0.0 || annual_rate_percent < 0.0 || tenure_years <= 0.0 {
        return None;
    }

    let months = round_half_up(tenure_years * 12.0);
    if months < 1.0 || months > f64::from(u32::MAX) {
        return None;
    }
    let rate = annual_rate_percent / 12.0 / 100.0;

    let emi = if rate > 0.0 {
        let growth = (1.0 + rate).powf(months);
        principal * rate * growth / (growth - 1.0)
    } else {
        principal / months
    };
    if !emi.is_finite() {
        tracing::debug!("EMI overflowed for rate {}%", annual_rate_percent);
        return None;
    }

    let months = months as u32;
    let mut schedule = Vec::new();
    let mut balance = principal;
    let mut total_paid = 0.0;

    for month in 1..=months {
        let interest = if rate > 0.0 { balance * rate } else { 0.0 };
        // The last payment only covers what is left
        let principal_pay = (emi - interest).min(balance);
        let payment = principal_pay + interest;
        balance = (balance - principal_pay).max(0.0);
        total_paid += payment;

        schedule.push(ScheduleEntry {
            month,
            payment: round_to(payment, 2),
            principal: round_to(principal_pay, 2),
            interest: round_to(interest, 2),
            balance: round_to(balance, 2),
        });

        if balance <= BALANCE_TOLERANCE {
            break;
        }
    }

    Some(EmiResult {
        monthly_emi: round_to(emi, 2),
        total_amount: round_to(total_paid, 2),
        total_interest: round_to(total_paid - principal, 2),
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_loan() {
        let result = calculate_emi(100_000.0, 10.0, 1.0).unwrap();

        assert_eq!(result.monthly_emi, 8791.59);
        assert_eq!(result.schedule.len(), 12);
        assert_eq!(result.total_amount, 105_499.06);
        assert_eq!(result.total_interest, 5499.06);

        let last = result.schedule.last().unwrap();
        assert_eq!(last.month, 12);
        assert!(last.balance <= BALANCE_TOLERANCE);

        let principal_sum: f64 = result.schedule.iter().map(|e| e.principal).sum();
        assert!((principal_sum - 100_000.0).abs() < 0.1);
    }

    #[test]
    fn test_balance_never_increases() {
        let result = calculate_emi(1_000_000.0, 8.5, 10.0).unwrap();
        assert_eq!(result.monthly_emi, 12398.57);
        assert_eq!(result.schedule.len(), 120);

        let mut previous = f64::INFINITY;
        for (i, entry) in result.schedule.iter().enumerate() {
            assert_eq!(entry.month as usize, i + 1);
            assert!(entry.balance >= 0.0);
            assert!(entry.balance <= previous);
            previous = entry.balance;
        }
    }

    #[test]
    fn test_zero_rate() {
        let result = calculate_emi(12_000.0, 0.0, 1.0).unwrap();
        assert_eq!(result.monthly_emi, 1000.0);
        assert_eq!(result.total_amount, 12_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.schedule.len(), 12);
        assert!(result.schedule.iter().all(|e| e.interest == 0.0));
        assert_eq!(result.schedule[11].balance, 0.0);
    }

    #[test]
    fn test_fractional_tenure_rounds_to_months() {
        let result = calculate_emi(50_000.0, 12.0, 1.5).unwrap();
        assert_eq!(result.schedule.len(), 18);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate_emi(-5.0, 10.0, 1.0).is_none());
        assert!(calculate_emi(0.0, 10.0, 1.0).is_none());
        assert!(calculate_emi(f64::NAN, 10.0, 1.0).is_none());
        assert!(calculate_emi(100.0, f64::INFINITY, 1.0).is_none());
        assert!(calculate_emi(100.0, -1.0, 1.0).is_none());
        assert!(calculate_emi(100.0, 10.0, 0.0).is_none());
        assert!(calculate_emi(100.0, 10.0, 0.01).is_none());
        assert!(calculate_emi(100.0, 10.0, 1e12).is_none());
    }

    #[test]
    fn test_long_tenure_is_scheduled() {
        let result = calculate_emi(100_000.0, 10.0, 101.0).unwrap();
        assert_eq!(result.schedule.len(), 1212);
        assert!(result.monthly_emi > 833.33 && result.monthly_emi < 834.0);
        assert!(result.schedule.last().unwrap().balance <= BALANCE_TOLERANCE);
    }

    #[test]
    fn test_csv_export() {
        let result = calculate_emi(12_000.0, 0.0, 1.0).unwrap();
        let csv = result.to_csv();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month,EMI,Principal,Interest,Balance");
        assert_eq!(lines[1], "1,1000.00,1000.00,0.00,11000.00");
        assert_eq!(lines[12], "12,1000.00,1000.00,0.00,0.00");
    }

    #[test]
    fn test_serializes_with_display_keys() {
        let result = calculate_emi(12_000.0, 0.0, 1.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["monthlyEMI"], 1000.0);
        assert_eq!(json["totalInterest"], 0.0);
        assert_eq!(json["schedule"][0]["month"], 1);
    }
}
