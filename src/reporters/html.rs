//! HTML reporter with an embedded series chart
//!
//! Generates a standalone HTML page that can be viewed in any browser:
//! the current score, repository age, any warnings, and a line chart of the
//! full vitality series rendered with Chart.js.

use crate::models::VitalityReport;
use crate::reporters::offset_label;
use anyhow::Result;

const CSS: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f6f8fa; color: #1f2328; }
.container { max-width: 900px; margin: 0 auto; padding: 24px; }
.header { background: #1f2328; color: #fff; border-radius: 8px; padding: 24px; }
.header h1 { margin: 0 0 4px 0; font-size: 22px; }
.header .repo { color: #9da7b1; font-size: 14px; word-break: break-all; }
.cards { display: flex; gap: 16px; margin: 16px 0; }
.card { flex: 1; background: #fff; border: 1px solid #d1d9e0; border-radius: 8px; padding: 16px; }
.card .value { font-size: 28px; font-weight: 600; }
.card .label { color: #59636e; font-size: 13px; }
.warning { background: #fff8c5; border: 1px solid #d4a72c; border-radius: 8px; padding: 12px 16px; margin: 8px 0; font-size: 14px; }
.chart { background: #fff; border: 1px solid #d1d9e0; border-radius: 8px; padding: 16px; }
.footer { color: #59636e; font-size: 12px; text-align: center; margin-top: 16px; }
"#;

/// Render report as standalone HTML
pub fn render(report: &VitalityReport) -> Result<String> {
    // Chart axis runs oldest -> newest, left to right.
    let mut labels: Vec<String> = report
        .entries()
        .map(|(offset, _)| format!("{:?}", offset_label(offset)))
        .collect();
    labels.reverse();
    let mut values: Vec<String> = report.series.iter().map(|s| format!("{s}")).collect();
    values.reverse();

    let warnings_html: String = report
        .warnings
        .iter()
        .map(|w| format!("<div class=\"warning\">{}</div>\n", escape(w)))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Vitality Report - {repo}</title>
    <style>{CSS}</style>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
</head>
<body>
<div class="container">
    <div class="header">
        <h1>Repository Vitality</h1>
        <div class="repo">{repo}</div>
    </div>
    <div class="cards">
        <div class="card"><div class="value">{current:.1}</div><div class="label">current score</div></div>
        <div class="card"><div class="value">{age}</div><div class="label">age in days</div></div>
        <div class="card"><div class="value">{days}</div><div class="label">days scored</div></div>
    </div>
    {warnings}
    <div class="chart"><canvas id="vitality"></canvas></div>
    <div class="footer">generated {generated}</div>
</div>
<script>
new Chart(document.getElementById('vitality'), {{
    type: 'line',
    data: {{
        labels: [{labels}],
        datasets: [{{
            label: 'vitality',
            data: [{values}],
            borderColor: '#2da44e',
            backgroundColor: 'rgba(45, 164, 78, 0.15)',
            fill: true,
            tension: 0.25,
        }}]
    }},
    options: {{
        scales: {{ y: {{ beginAtZero: true }} }},
        plugins: {{ legend: {{ display: false }} }}
    }}
}});
</script>
</body>
</html>
"#,
        repo = escape(&report.repository),
        current = report.current,
        age = report.age_days,
        days = report.days,
        warnings = warnings_html,
        generated = report.generated_at.to_rfc3339(),
        labels = labels.join(", "),
        values = values.join(", "),
    ))
}

/// Minimal HTML entity escaping for interpolated strings.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
