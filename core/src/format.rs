use crate::types::Money;

/// `₹123,456.50`: two decimals, comma every three digits, leading `-`
/// for negatives.
pub fn format_money(amount: Money, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{symbol}{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(0.0, "₹"), "₹0.00");
        assert_eq!(format_money(999.5, "₹"), "₹999.50");
        assert_eq!(format_money(1_000.0, "$"), "$1,000.00");
        assert_eq!(format_money(123_456.504, "₹"), "₹123,456.50");
        assert_eq!(format_money(-2_500_000.0, "₹"), "-₹2,500,000.00");
    }
}
