// Markdown report generation.
//
// Writes the pipeline results to a standalone markdown file: frequent
// terms, per-company energy ratios, and per-sector means.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::PipelineReport;

/// Render `report` as markdown.
pub fn render_report(report: &PipelineReport) -> String {
    let mut md = String::new();
    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    // Writing to a String cannot fail
    let _ = writeln!(md, "# Energy Cost Report\n");
    let _ = writeln!(md, "Generated {generated}. {} documents analyzed.\n", report.total_documents);

    let _ = writeln!(md, "## Frequent expense descriptions\n");
    let _ = writeln!(md, "Threshold: {}.\n", report.threshold);
    if report.frequent_terms.is_empty() {
        let _ = writeln!(md, "_No term reaches the threshold._\n");
    } else {
        let _ = writeln!(md, "| Term | Documents |");
        let _ = writeln!(md, "|---|---:|");
        for t in &report.frequent_terms {
            let _ = writeln!(md, "| {} | {} |", escape_cell(&t.term), t.documents);
        }
        md.push('\n');
    }

    let _ = writeln!(md, "## Sectors\n");
    let _ = writeln!(md, "| Sector | Companies | Avg % of service costs | Avg % of production costs |");
    let _ = writeln!(md, "|---|---:|---:|---:|");
    for s in &report.sectors {
        let _ = writeln!(
            md,
            "| {} | {} | {:.2} | {:.2} |",
            escape_cell(&s.sector_code),
            s.companies,
            s.mean_energy_to_service_ratio,
            s.mean_energy_to_production_ratio
        );
    }
    md.push('\n');

    let _ = writeln!(md, "## Companies\n");
    let _ = writeln!(md, "| Company | Sector | Energy costs | % of service costs | % of production costs |");
    let _ = writeln!(md, "|---|---|---:|---:|---:|");
    for c in &report.companies {
        let _ = writeln!(
            md,
            "| {} | {} | {:.0} | {:.2} | {:.2} |",
            escape_cell(&c.company_id),
            escape_cell(&c.sector_code),
            c.energy.energy_costs,
            c.energy.energy_to_service_ratio,
            c.energy.energy_to_production_ratio
        );
    }

    md
}

/// Write the markdown report to `path`, creating parent directories.
/// Returns the path written.
pub fn generate_report(report: &PipelineReport, path: &str) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(path, render_report(report)).with_context(|| format!("Failed to write report to {path}"))?;
    Ok(path.to_string())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
