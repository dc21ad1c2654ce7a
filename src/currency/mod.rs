//! US-dollar display formatting.

const SYMBOL: &str = "$";
const GROUPING_SEPARATOR: char = ',';

/// Formats an amount as dollars with thousands separators: `$1,234.56`, `-$500.00`.
/// Non-finite values render as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        format!("-{SYMBOL}{grouped}.{dec_part}")
    } else {
        format!("{SYMBOL}{grouped}.{dec_part}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
