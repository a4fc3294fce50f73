// Colored terminal output for term lists, classifications and energy ratios.
//
// This module handles all terminal-specific formatting. main.rs delegates
// here after running the pipeline.

use colored::Colorize;

use crate::analysis::sector::{CompanyAnalysis, SectorSummary};
use crate::classify::traits::Classification;
use crate::pipeline::TermCount;
use crate::terms::FrequencyThreshold;

const BAR_WIDTH: usize = 30;

/// Display the frequent terms with their document counts.
pub fn display_frequent_terms(terms: &[TermCount], total_documents: usize, threshold: FrequencyThreshold) {
    println!(
        "\n{}",
        format!(
            "=== Frequent Terms ({} of {} documents, threshold: {}) ===",
            terms.len(),
            total_documents,
            threshold
        )
        .bold()
    );
    println!();

    if terms.is_empty() {
        println!("  No term reaches the threshold.");
        return;
    }

    println!(
        "  {:>4}  {:<44} {:>5}  {:>6}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Docs".dimmed(),
        "Share".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());

    for (i, t) in terms.iter().enumerate() {
        let share = if total_documents > 0 {
            t.documents as f64 / total_documents as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "  {:>4}. {:<44} {:>5}  {:>5.1}%",
            i + 1,
            super::truncate_chars(&t.term, 40),
            t.documents,
            share,
        );
    }
}

/// Display a single classification result.
pub fn display_classification(description: &str, classification: &Classification) {
    let label = if classification.is_uncategorized() {
        classification.label.dimmed()
    } else {
        classification.label.bold()
    };
    println!("  {}", description);
    println!("    -> {} (score {:.2})", label, classification.score);
}

/// Display per-company energy costs and ratios.
pub fn display_company_analyses(companies: &[CompanyAnalysis]) {
    if companies.is_empty() {
        println!("No companies analyzed.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Energy Costs ({} companies) ===", companies.len()).bold()
    );
    println!();

    println!(
        "  {:<16} {:<14} {:>12}  {:>9}  {:>11}",
        "Company".dimmed(),
        "Sector".dimmed(),
        "Energy".dimmed(),
        "% Service".dimmed(),
        "% Production".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for c in companies {
        println!(
            "  {:<16} {:<14} {:>12.0}  {:>9}  {:>11.2}",
            super::truncate_chars(&c.company_id, 16),
            super::truncate_chars(&c.sector_code, 14),
            c.energy.energy_costs,
            colorize_ratio(c.energy.energy_to_service_ratio),
            c.energy.energy_to_production_ratio,
        );
    }
}

/// Display mean ratios per sector as two horizontal bar charts.
pub fn display_sector_chart(sectors: &[SectorSummary]) {
    if sectors.is_empty() {
        return;
    }

    let max_service = sectors
        .iter()
        .map(|s| s.mean_energy_to_service_ratio)
        .fold(0.0, f64::max);
    let max_production = sectors
        .iter()
        .map(|s| s.mean_energy_to_production_ratio)
        .fold(0.0, f64::max);

    println!(
        "\n{}",
        "=== Avg Energy Costs as % of Service Costs by Sector ===".bold()
    );
    println!();
    for s in sectors {
        let filled = super::bar_cells(s.mean_energy_to_service_ratio, max_service, BAR_WIDTH);
        print_bar_row(&s.sector_code, s.companies, filled, s.mean_energy_to_service_ratio, false);
    }

    println!(
        "\n{}",
        "=== Avg Energy Costs as % of Production Costs by Sector ===".bold()
    );
    println!();
    for s in sectors {
        let filled = super::bar_cells(s.mean_energy_to_production_ratio, max_production, BAR_WIDTH);
        print_bar_row(&s.sector_code, s.companies, filled, s.mean_energy_to_production_ratio, true);
    }
    println!();
}

fn print_bar_row(sector: &str, companies: usize, filled: usize, value: f64, production: bool) {
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );
    let bar = if production {
        bar.bright_green()
    } else {
        bar.bright_blue()
    };
    println!(
        "  {:<16} {} {:>6.2}%  {}",
        sector.bold(),
        bar,
        value,
        format!("({companies} companies)").dimmed()
    );
}

/// Highlight energy-heavy companies.
fn colorize_ratio(ratio: f64) -> colored::ColoredString {
    let text = format!("{ratio:.2}");
    if ratio >= 20.0 {
        text.red().bold()
    } else if ratio >= 10.0 {
        text.yellow()
    } else {
        text.green()
    }
}
