//! Colored report rendering for dataset validation results.

use colored::Colorize;

use crate::dataset::DatasetReport;

/// Render the full report: one section per entity kind with its errors
/// and warnings, followed by the summary block.
pub fn render(report: &DatasetReport) -> String {
    let mut out = vec![
        "Fixture Validation Report".bold().to_string(),
        "━".repeat(60),
    ];

    for (kind, result) in report.iter() {
        out.push(String::new());
        out.push(kind.to_string().bold().to_string());

        let status = if result.is_valid() {
            format!("  {} PASS", "✓".green())
        } else {
            format!("  {} FAIL", "✗".red())
        };
        out.push(status);

        for err in result.errors() {
            out.push(format!("  {} {}", "✗".red(), err));
        }
        for warn in result.warnings() {
            out.push(format!("  {} {}", "⚠".yellow(), warn));
        }
    }

    out.push(String::new());
    out.push(render_summary(report));
    out.join("\n")
}

/// Render only the per-entity counts and the overall verdict.
pub fn render_summary(report: &DatasetReport) -> String {
    let mut out = vec!["Summary".bold().to_string(), "━".repeat(60)];

    for (kind, result) in report.iter() {
        let status = if result.is_valid() {
            "✓".green()
        } else {
            "✗".red()
        };
        out.push(format!(
            "  {} {}: {} error(s), {} warning(s)",
            status,
            kind,
            result.errors().len(),
            result.warnings().len()
        ));
    }

    out.push(String::new());
    if report.all_valid() {
        out.push(format!("{} all entities valid", "✓".green()));
    } else {
        out.push(format!(
            "{} {} error(s) across dataset",
            "✗".red(),
            report.error_count()
        ));
    }
    out.join("\n")
}
