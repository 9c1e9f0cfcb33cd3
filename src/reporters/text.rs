//! Text (terminal) reporter with colors and formatting

use crate::models::VitalityReport;
use crate::reporters::offset_label;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Color for a daily score relative to the run's maximum.
fn score_color(score: f64, max: f64) -> &'static str {
    if max <= 0.0 {
        return "\x1b[90m"; // Gray
    }
    match score / max {
        r if r >= 0.75 => "\x1b[32m", // Green
        r if r >= 0.40 => "\x1b[33m", // Yellow
        r if r > 0.0 => "\x1b[91m",   // Light red
        _ => "\x1b[90m",              // Gray
    }
}

/// How many recent offsets the terminal table shows.
const TABLE_ROWS: usize = 14;

/// Render report as formatted terminal output
pub fn render(report: &VitalityReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Vitality Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Repository: {}\nCurrent score: {BOLD}{:.1}{RESET}  Age: {} days  Window: {} days\n",
        report.repository, report.current, report.age_days, report.days
    ));

    for warning in &report.warnings {
        out.push_str(&format!("\x1b[33mwarning:{RESET} {warning}\n"));
    }
    out.push('\n');

    let max = report.series.iter().cloned().fold(0.0_f64, f64::max);
    out.push_str(&format!("{DIM}  DAY              SCORE{RESET}\n"));
    for (offset, score) in report.entries().take(TABLE_ROWS) {
        let color = score_color(score, max);
        let bar_len = if max > 0.0 {
            ((score / max) * 20.0).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<14} {color}{:>6.1}{RESET}  {DIM}{}{RESET}\n",
            offset_label(offset),
            score,
            "█".repeat(bar_len)
        ));
    }
    if report.days > TABLE_ROWS {
        out.push_str(&format!(
            "{DIM}  ... {} more days in json/html output{RESET}\n",
            report.days - TABLE_ROWS
        ));
    }

    Ok(out)
}
