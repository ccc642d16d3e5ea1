use std::fmt;

/// A difference between the WITH and WITHOUT value of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    /// Relative change against the WITHOUT baseline; `None` when the
    /// baseline is zero or absent.
    Percent(Option<f64>),
    /// Plain signed difference of two counts.
    Absolute(i64),
    /// Difference of two ratios, in percentage points.
    Points(f64),
}

/// `(a - b) / b * 100`, with a missing `a` counted as zero.
pub fn percent(a: Option<f64>, b: Option<f64>) -> Delta {
    let a = a.unwrap_or(0.0);
    match b {
        Some(b) if b != 0.0 => Delta::Percent(Some((a - b) / b * 100.0)),
        _ => Delta::Percent(None),
    }
}

pub fn absolute(a: Option<u64>, b: Option<u64>) -> Delta {
    Delta::Absolute(signed_diff(a.unwrap_or(0), b.unwrap_or(0)))
}

/// `a - b`, saturating at the `i64` bounds.
pub fn signed_diff(a: u64, b: u64) -> i64 {
    let diff = i128::from(a) - i128::from(b);
    i64::try_from(diff).unwrap_or(if diff > 0 { i64::MAX } else { i64::MIN })
}

pub fn points(a: Option<f64>, b: Option<f64>) -> Delta {
    Delta::Points((a.unwrap_or(0.0) - b.unwrap_or(0.0)) * 100.0)
}

/// Relative change for the machine-readable record: only computed when
/// both operands are present and non-zero.
pub fn relative_pct(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) if a != 0.0 && b != 0.0 => Some((a - b) / b * 100.0),
        _ => None,
    }
}

fn sign(value: f64) -> &'static str {
    if value >= 0.0 { "+" } else { "" }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Delta::Percent(None) => f.write_str("N/A"),
            Delta::Percent(Some(pct)) => write!(f, "{}{:.1}%", sign(pct), pct),
            Delta::Absolute(diff) => {
                if diff >= 0 {
                    write!(f, "+{diff}")
                } else {
                    write!(f, "{diff}")
                }
            }
            Delta::Points(pts) => write!(f, "{}{:.1} pts", sign(pts), pts),
        }
    }
}
