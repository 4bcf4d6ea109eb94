use crate::domain::models::{JsonOut, Report};
use serde::Serialize;
use std::io::Write;

pub fn print_one<T: Serialize, W: Write>(
    out: &mut W,
    json: bool,
    data: T,
    rows: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for line in rows(&data) {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn report_lines(report: &Report) -> Vec<String> {
    vec![
        format!("Random Array: {}", report.samples),
        format!("Sum: {}", report.stats.sum),
        format!("Max: {}", report.stats.max),
        format!("Min: {}", report.stats.min),
    ]
}

pub fn print_report<W: Write>(out: &mut W, json: bool, report: Report) -> anyhow::Result<()> {
    print_one(out, json, report, report_lines)
}
