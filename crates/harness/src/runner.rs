use crate::cases::Case;
use crate::config::RunConfig;
use crate::printer::{format_report, OutputFormat, RunReport};
use anyhow::{Context, Result};
use log::{debug, info};
use query::{ConjunctiveQuery, Strategy};
use std::io::Write;

/// Runs one strategy against one generated table and formats the matches.
pub fn render_run(
    strategy: Strategy,
    case: Case,
    query: &ConjunctiveQuery,
    format: OutputFormat,
) -> Result<String> {
    let table = case.table();
    // Release builds never check this inside the pipeline; debug builds
    // repeat it in `ImplicitIndex::new`.
    strategy
        .check(&table)
        .with_context(|| format!("case {} cannot use strategy {}", case, strategy))?;
    let rows = strategy.run(&table, query);
    debug!(
        "case {} strategy {}: {} of {} rows matched",
        case,
        strategy,
        rows.len(),
        table.len()
    );
    let report = RunReport {
        strategy,
        case,
        query,
        rows: &rows,
    };
    format_report(&report, format)
}

/// Every selected strategy against every selected case, strategy-major,
/// each run framed by testcase banners.
pub fn run_all(config: &RunConfig, out: &mut impl Write) -> Result<()> {
    info!(
        "running {} strategies over {} cases: {}",
        config.strategies.len(),
        config.cases.len(),
        config.query
    );
    for &strategy in &config.strategies {
        writeln!(out, "strategy {}: {}", strategy, config.query)?;
        for &case in &config.cases {
            writeln!(
                out,
                "===================testcase{} begin======================",
                case.number()
            )?;
            let rendered = render_run(strategy, case, &config.query, config.format)?;
            if !rendered.is_empty() {
                writeln!(out, "{}", rendered)?;
            }
            writeln!(
                out,
                "===================testcase{} end========================",
                case.number()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
