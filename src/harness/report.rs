//! CSV report generation.
//!
//! Two tables, instances as rows and solvers as columns: one for costs
//! (makespan or status word), one for wall-clock times. Cells are numerals,
//! status words, and file names, so rows are plain comma-joined text.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::bench::RunRecord;
use super::runner::SolverOutcome;

/// File name of the cost report.
pub const CMAX_REPORT: &str = "results_cmax.csv";
/// File name of the timing report.
pub const TIME_REPORT: &str = "results_time.csv";

/// Writes both reports under `results_dir`.
pub fn write_reports(results_dir: &Path, records: &[RunRecord]) -> Result<()> {
    let mut instances: Vec<&str> = records.iter().map(|r| r.instance.as_str()).collect();
    instances.sort_unstable();
    instances.dedup();
    let mut solvers: Vec<&str> = records.iter().map(|r| r.solver.as_str()).collect();
    solvers.sort_unstable();
    solvers.dedup();

    let cells: HashMap<(&str, &str), &RunRecord> = records
        .iter()
        .map(|r| ((r.instance.as_str(), r.solver.as_str()), r))
        .collect();

    write_table(
        &results_dir.join(CMAX_REPORT),
        &instances,
        &solvers,
        |record| match &record.run.outcome {
            SolverOutcome::Valid { makespan } => makespan.to_string(),
            SolverOutcome::Invalid { .. } => "INVALID".to_string(),
            SolverOutcome::Failed { .. } => "ERROR".to_string(),
            SolverOutcome::TimedOut => "TIMEOUT".to_string(),
        },
        &cells,
    )?;

    write_table(
        &results_dir.join(TIME_REPORT),
        &instances,
        &solvers,
        |record| format!("{:.4}", record.run.elapsed.as_secs_f64()),
        &cells,
    )?;

    Ok(())
}

fn write_table(
    path: &Path,
    instances: &[&str],
    solvers: &[&str],
    cell: impl Fn(&RunRecord) -> String,
    cells: &HashMap<(&str, &str), &RunRecord>,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating report {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Instance,{}", solvers.join(","))?;
    for instance in instances {
        let mut row = vec![instance.to_string()];
        for solver in solvers {
            row.push(
                cells
                    .get(&(*instance, *solver))
                    .map_or_else(|| "N/A".to_string(), |record| cell(record)),
            );
        }
        writeln!(out, "{}", row.join(","))?;
    }
    out.flush()?;
    Ok(())
}
