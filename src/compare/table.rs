use crate::compare::delta::{self, Delta};
use crate::compare::format::{
    format_opt_f64, format_opt_ratio, format_opt_u64_count, format_u64_count,
};
use crate::compare::model::SessionSummary;
use std::collections::BTreeSet;

pub const HEADERS: [&str; 4] = ["Metric", "WITH Plugin", "WITHOUT Plugin", "Delta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Metric {
        label: String,
        with: String,
        without: String,
        delta: Delta,
    },
    Separator,
}

impl Row {
    fn metric(label: impl Into<String>, with: String, without: String, delta: Delta) -> Self {
        Row::Metric {
            label: label.into(),
            with,
            without,
            delta,
        }
    }

    fn cells(&self) -> Option<[String; 4]> {
        match self {
            Row::Metric {
                label,
                with,
                without,
                delta,
            } => Some([
                label.clone(),
                with.clone(),
                without.clone(),
                delta.to_string(),
            ]),
            Row::Separator => None,
        }
    }
}

fn as_f64(value: Option<u64>) -> Option<f64> {
    value.map(|v| v as f64)
}

/// Fixed token/API rows, a separator, one row per tool, a separator, then aggregates.
pub fn build_rows(with: &SessionSummary, without: &SessionSummary) -> Vec<Row> {
    let tw = with.tokens();
    let tb = without.tokens();
    let mut rows = Vec::new();

    for (label, a, b) in [
        ("Input Tokens", tw.input, tb.input),
        ("Output Tokens", tw.output, tb.output),
        ("Cache Creation", tw.cache_creation, tb.cache_creation),
        ("Cache Read Tokens", tw.cache_read, tb.cache_read),
    ] {
        rows.push(Row::metric(
            label,
            format_opt_u64_count(a),
            format_opt_u64_count(b),
            delta::percent(as_f64(a), as_f64(b)),
        ));
    }
    rows.push(Row::metric(
        "Cache Hit Ratio",
        format_opt_ratio(tw.cache_hit_ratio),
        format_opt_ratio(tb.cache_hit_ratio),
        delta::points(tw.cache_hit_ratio, tb.cache_hit_ratio),
    ));
    rows.push(Row::metric(
        "API Calls",
        format_opt_u64_count(with.api_calls),
        format_opt_u64_count(without.api_calls),
        delta::absolute(with.api_calls, without.api_calls),
    ));
    rows.push(Row::Separator);

    let tools: BTreeSet<&str> = with.tool_names().chain(without.tool_names()).collect();
    for tool in tools {
        let a = with.tool_count(tool);
        let b = without.tool_count(tool);
        rows.push(Row::metric(
            format!("{tool} calls"),
            format_u64_count(a),
            format_u64_count(b),
            delta::absolute(Some(a), Some(b)),
        ));
    }
    rows.push(Row::Separator);

    let nav_a = with.search_nav_total.unwrap_or(0);
    let nav_b = without.search_nav_total.unwrap_or(0);
    rows.push(Row::metric(
        "Search/Nav Total",
        format_u64_count(nav_a),
        format_u64_count(nav_b),
        delta::percent(Some(nav_a as f64), Some(nav_b as f64)),
    ));
    rows.push(Row::metric(
        "Duration (s)",
        format_opt_f64(with.duration_sec),
        format_opt_f64(without.duration_sec),
        delta::percent(with.duration_sec, without.duration_sec),
    ));
    let compaction_a = with.compaction_events.unwrap_or(0);
    let compaction_b = without.compaction_events.unwrap_or(0);
    rows.push(Row::metric(
        "Compaction Events",
        format_u64_count(compaction_a),
        format_u64_count(compaction_b),
        delta::absolute(Some(compaction_a), Some(compaction_b)),
    ));

    rows
}

pub fn render_table(rows: &[Row]) -> String {
    let header = HEADERS.map(str::to_string);
    let body: Vec<Option<[String; 4]>> = rows.iter().map(Row::cells).collect();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for cells in body.iter().flatten() {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    );
    let pad_row = |cells: &[String; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut out = String::new();
    out.push_str(&pad_row(&header));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for cells in &body {
        match cells {
            Some(cells) => out.push_str(&pad_row(cells)),
            None => out.push_str(&rule),
        }
        out.push('\n');
    }
    out
}
