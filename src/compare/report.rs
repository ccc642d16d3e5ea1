use crate::compare::delta::{relative_pct, signed_diff};
use crate::compare::format::{NOT_AVAILABLE, format_u64_count};
use crate::compare::model::SessionSummary;
use crate::error::{CompareError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const COMPARISON_FILE_NAME: &str = "comparison.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDeltas {
    pub input_tokens_pct: Option<f64>,
    pub output_tokens_pct: Option<f64>,
    pub cache_read_pct: Option<f64>,
    pub api_calls_diff: i64,
    pub search_nav_pct: Option<f64>,
    pub duration_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_has_index: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_has_index: Option<bool>,
    pub deltas: ComparisonDeltas,
    pub generated_at: DateTime<Utc>,
}

fn as_f64(value: Option<u64>) -> Option<f64> {
    value.map(|v| v as f64)
}

impl ComparisonResult {
    pub fn build(
        with: &SessionSummary,
        without: &SessionSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let tw = with.tokens();
        let tb = without.tokens();
        let deltas = ComparisonDeltas {
            input_tokens_pct: relative_pct(as_f64(tw.input), as_f64(tb.input)),
            output_tokens_pct: relative_pct(as_f64(tw.output), as_f64(tb.output)),
            cache_read_pct: relative_pct(as_f64(tw.cache_read), as_f64(tb.cache_read)),
            api_calls_diff: signed_diff(
                with.api_calls.unwrap_or(0),
                without.api_calls.unwrap_or(0),
            ),
            search_nav_pct: relative_pct(
                as_f64(with.search_nav_total),
                as_f64(without.search_nav_total),
            ),
            duration_pct: relative_pct(with.duration_sec, without.duration_sec),
        };

        Self {
            session_a: with.session_id.clone(),
            session_b: without.session_id.clone(),
            a_has_index: with.has_index,
            b_has_index: without.has_index,
            deltas,
            generated_at,
        }
    }
}

/// `comparison.json` next to the first input as given on the command line.
pub fn default_output_path(first_input: &Path) -> PathBuf {
    first_input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(COMPARISON_FILE_NAME)
}

pub fn write_comparison(path: &Path, result: &ComparisonResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json).map_err(|source| CompareError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Headline change in input tokens, WITH relative to the WITHOUT baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputTokenChange {
    Saved { tokens: u64, pct: f64 },
    Increased { tokens: u64, pct: f64 },
}

pub fn input_token_change(
    with: &SessionSummary,
    without: &SessionSummary,
) -> Option<InputTokenChange> {
    let a = with.tokens().input.filter(|v| *v != 0)?;
    let b = without.tokens().input.filter(|v| *v != 0)?;
    if a < b {
        let tokens = b - a;
        Some(InputTokenChange::Saved {
            tokens,
            pct: tokens as f64 / b as f64 * 100.0,
        })
    } else if a > b {
        let tokens = a - b;
        Some(InputTokenChange::Increased {
            tokens,
            pct: tokens as f64 / b as f64 * 100.0,
        })
    } else {
        None
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

pub fn render_summary(with: &SessionSummary, without: &SessionSummary) -> String {
    let mut out = String::new();
    out.push_str(&t!("compare.summary.title"));
    out.push('\n');
    out.push_str(&t!(
        "compare.summary.session_with",
        id = or_na(&with.session_id),
        model = or_na(&with.model),
        cwd = or_na(&with.cwd)
    ));
    out.push('\n');
    out.push_str(&t!(
        "compare.summary.session_without",
        id = or_na(&without.session_id),
        model = or_na(&without.model),
        cwd = or_na(&without.cwd)
    ));
    out.push('\n');

    let line = match input_token_change(with, without) {
        Some(InputTokenChange::Saved { tokens, pct }) => Some(t!(
            "compare.summary.saved",
            tokens = format_u64_count(tokens),
            pct = format!("{pct:.1}")
        )),
        Some(InputTokenChange::Increased { tokens, pct }) => Some(t!(
            "compare.summary.increased",
            tokens = format_u64_count(tokens),
            pct = format!("{pct:.1}")
        )),
        None => None,
    };
    if let Some(line) = line {
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn parse(json: &str) -> SessionSummary {
        serde_json::from_str(json).expect("summary json")
    }

    #[test]
    fn reports_savings_against_baseline() {
        let change = input_token_change(
            &parse(r#"{"tokens":{"input":1000}}"#),
            &parse(r#"{"tokens":{"input":1500}}"#),
        );
        match change {
            Some(InputTokenChange::Saved { tokens, pct }) => {
                assert_eq!(tokens, 500);
                assert_eq!(format!("{pct:.1}"), "33.3");
            }
            other => panic!("unexpected change: {other:?}"),
        }
    }

    #[test]
    fn reports_increase_against_baseline() {
        let change = input_token_change(
            &parse(r#"{"tokens":{"input":1500}}"#),
            &parse(r#"{"tokens":{"input":1000}}"#),
        );
        assert_eq!(
            change,
            Some(InputTokenChange::Increased {
                tokens: 500,
                pct: 50.0
            })
        );
    }

    #[test]
    fn no_change_line_when_input_absent_or_equal() {
        let with = parse(r#"{"tokens":{"input":1000}}"#);
        assert_eq!(input_token_change(&with, &parse("{}")), None);
        assert_eq!(input_token_change(&parse("{}"), &with), None);
        assert_eq!(input_token_change(&with, &with), None);

        let summary = render_summary(&with, &parse("{}"));
        assert!(!summary.contains("Plugin"));
        assert!(summary.contains("Session B (WITHOUT): N/A"));
    }

    #[test]
    fn result_pct_fields_null_unless_both_present() {
        let with = parse(r#"{"session_id":"a","has_index":true,"tokens":{"input":1500,"output":0},"api_calls":3,"duration_sec":20.0}"#);
        let without = parse(r#"{"session_id":"b","tokens":{"input":1000,"output":10},"api_calls":7,"duration_sec":10.0}"#);
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let result = ComparisonResult::build(&with, &without, at);

        assert_eq!(result.deltas.input_tokens_pct, Some(50.0));
        assert_eq!(result.deltas.output_tokens_pct, None);
        assert_eq!(result.deltas.cache_read_pct, None);
        assert_eq!(result.deltas.api_calls_diff, -4);
        assert_eq!(result.deltas.search_nav_pct, None);
        assert_eq!(result.deltas.duration_pct, Some(100.0));
        assert_eq!(result.a_has_index, Some(true));
        assert_eq!(result.b_has_index, None);
    }

    #[test]
    fn writes_pretty_json_and_omits_absent_ids() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(COMPARISON_FILE_NAME);
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let result = ComparisonResult::build(&parse("{}"), &parse(r#"{"session_id":"b"}"#), at);

        write_comparison(&path, &result).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"session_b\": \"b\""));
        assert!(!content.contains("session_a"));
        assert!(content.contains("\"input_tokens_pct\": null"));
        assert!(content.contains("\"api_calls_diff\": 0"));
        assert!(content.contains("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn write_failure_names_target() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("no-such-dir").join(COMPARISON_FILE_NAME);
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let result = ComparisonResult::build(&parse("{}"), &parse("{}"), at);

        let err = write_comparison(&path, &result).unwrap_err();
        assert!(matches!(err, CompareError::Write { .. }));
    }

    #[test]
    fn default_output_sits_next_to_first_input() {
        assert_eq!(
            default_output_path(Path::new("runs/a/summary.json")),
            PathBuf::from("runs/a/comparison.json")
        );
        assert_eq!(
            default_output_path(Path::new("summary.json")),
            PathBuf::from("comparison.json")
        );
    }
}
