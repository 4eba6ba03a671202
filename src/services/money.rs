/// Placeholder shown wherever an amount is unknown.
pub const MONEY_PLACEHOLDER: &str = "—";

/// Renders an amount in base currency units as an abbreviated display
/// string, banded the way the dashboard shows NTD figures:
///
/// - at least 10,000,000 → tenths of 千萬 (ten millions)
/// - at least 10,000     → whole 萬 (ten thousands), rounded
/// - otherwise           → thousands-separated digits, no unit
///
/// Unknown (`None`) or NaN amounts render as a dash instead of failing;
/// this is display code and must never take the dashboard down.
pub fn format_money(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return MONEY_PLACEHOLDER.to_string();
    };
    if amount.is_nan() {
        return MONEY_PLACEHOLDER.to_string();
    }

    if amount >= 10_000_000.0 {
        return format!("{:.1} 千萬", amount / 10_000_000.0);
    }
    if amount >= 10_000.0 {
        return format!("{} 萬", (amount / 10_000.0).round() as i64);
    }
    group_thousands(amount.round() as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
