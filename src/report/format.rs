//! Display formatting for currency and rate values

/// Format a currency value as `"$ 1,234,567.89"`
///
/// Rounds to cents; negative values render as `"-$ 12.00"`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    // Digits come from the float itself; balances can exceed any integer type
    let fixed = format!("{:.2}", value.abs());
    let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{} {}.{}", sign, symbol, group_thousands(dollars), cents)
}

/// Format a decimal rate as a percentage with two decimals (0.08 -> "8.00%")
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
