use crate::cases::Case;
use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use common::Row;
use query::{ConjunctiveQuery, Strategy};
use serde::Serialize;

const MAX_DISPLAY_ROWS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `a, b` line per row.
    Plain,
    Table,
    Json,
}

/// One strategy run against one case. The JSON format serializes it whole;
/// the text formats only print `rows`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub strategy: Strategy,
    pub case: Case,
    pub query: &'a ConjunctiveQuery,
    pub rows: &'a [Row],
}

pub fn format_report(report: &RunReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(format_plain(report.rows)),
        OutputFormat::Table => Ok(format_table(report.rows)),
        OutputFormat::Json => serde_json::to_string(report).context("serialize run report"),
    }
}

fn format_plain(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_table(rows: &[Row]) -> String {
    let total_rows = rows.len();
    let mut table = Table::new();
    table.set_header(vec![Cell::new("a"), Cell::new("b")]);

    for row in rows.iter().take(MAX_DISPLAY_ROWS) {
        table.add_row(vec![Cell::new(row.a), Cell::new(row.b)]);
    }

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("({} rows)", total_rows));

    let hidden_rows = total_rows.saturating_sub(MAX_DISPLAY_ROWS);
    if hidden_rows > 0 {
        output.push('\n');
        output.push_str(&format!("... ({} rows hidden)", hidden_rows));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Row> {
        vec![Row::new(1000, 10), Row::new(2000, 40)]
    }

    fn render(rows: &[Row], format: OutputFormat) -> String {
        let query = ConjunctiveQuery::default();
        let report = RunReport {
            strategy: Strategy::TreeIndex,
            case: Case::Small,
            query: &query,
            rows,
        };
        format_report(&report, format).unwrap()
    }

    #[test]
    fn formats_plain_output() {
        let output = render(&sample_rows(), OutputFormat::Plain);
        insta::assert_snapshot!(output, @r"
        1000, 10
        2000, 40
        ");
    }

    #[test]
    fn formats_json_report() {
        let output = render(&sample_rows(), OutputFormat::Json);
        insta::assert_snapshot!(output, @r#"{"strategy":"tree","case":"small","query":{"equal_a":[1000,2000,3000],"range_b":{"lo":10,"hi":50}},"rows":[{"a":1000,"b":10},{"a":2000,"b":40}]}"#);
    }

    #[test]
    fn json_strategy_names_match_cli_names() {
        for strategy in Strategy::ALL {
            assert_eq!(
                serde_json::to_value(strategy).unwrap(),
                serde_json::Value::String(strategy.name().to_string())
            );
        }
        for case in Case::ALL {
            assert_eq!(
                serde_json::to_value(case).unwrap(),
                serde_json::Value::String(case.to_string())
            );
        }
    }

    #[test]
    fn formats_table_output() {
        let output = render(&sample_rows(), OutputFormat::Table);
        assert!(output.contains("1000"));
        assert!(output.contains("40"));
        assert!(output.contains("(2 rows)"));
        assert!(!output.contains("rows hidden"));
    }

    #[test]
    fn formats_empty_results() {
        assert_eq!(render(&[], OutputFormat::Plain), "");
        assert!(render(&[], OutputFormat::Json).ends_with(r#""rows":[]}"#));
        assert!(render(&[], OutputFormat::Table).contains("(0 rows)"));
    }

    #[test]
    fn truncates_overflow_rows() {
        let rows = (0..MAX_DISPLAY_ROWS as i64 + 2)
            .map(|b| Row::new(1000, b))
            .collect::<Vec<_>>();
        let output = render(&rows, OutputFormat::Table);
        assert!(output.contains(&format!("({} rows)", MAX_DISPLAY_ROWS + 2)));
        assert!(output.contains("... (2 rows hidden)"));
    }
}
