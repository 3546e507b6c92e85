//! Number formatting

/// Format a currency amount rounded to whole units, grouped the Indian way
/// (`12,34,567`): the last three digits, then pairs.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = crate::calc::round_half_up(amount);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!("{}{}{}", sign, symbol, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(0.0, "₹"), "₹0");
        assert_eq!(format_currency(999.4, "₹"), "₹999");
        assert_eq!(format_currency(1000.0, "₹"), "₹1,000");
        assert_eq!(format_currency(1_000_000.0, "₹"), "₹10,00,000");
        assert_eq!(format_currency(12_345_678.5, "₹"), "₹1,23,45,679");
        assert_eq!(format_currency(-2500.0, "$"), "-$2,500");
    }
}
