pub const NOT_AVAILABLE: &str = "N/A";

pub fn format_u64_count(value: u64) -> String {
    group_digits(&value.to_string())
}

pub fn format_opt_u64_count(value: Option<u64>) -> String {
    value
        .map(format_u64_count)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Grouped integer part, at most three fraction digits, trailing zeros trimmed.
pub fn format_f64(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

pub fn format_opt_f64(value: Option<f64>) -> String {
    value
        .map(format_f64)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_opt_ratio(value: Option<f64>) -> String {
    value
        .map(|ratio| format!("{:.1}%", ratio * 100.0))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (idx, ch) in digits.chars().enumerate() {
        out.push(ch);
        let remaining = digits.len().saturating_sub(idx).saturating_sub(1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}
