// HTML table scraping.
//
// Expense tables are plain `<table>` markup with one expense per row:
// the first `<td>` is the description and the second the amount.
// Malformed markup never fails; we take whatever rows the parser recovers.

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One expense row: description and amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub description: String,
    pub value: f64,
}

/// Compiled selectors for walking expense tables.
pub struct TableExtractor {
    table: Selector,
    row: Selector,
    cell: Selector,
}

impl TableExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: selector("table")?,
            row: selector("tr")?,
            cell: selector("td")?,
        })
    }

    /// Every row with exactly two cells whose second cell parses as a number.
    pub fn expense_lines(&self, html: &str) -> Vec<ExpenseLine> {
        let mut lines = Vec::new();
        let mut skipped = 0usize;

        for cells in self.rows(html) {
            if cells.len() != 2 {
                continue;
            }
            match parse_amount(&cells[1]) {
                Some(value) => lines.push(ExpenseLine {
                    description: cells[0].clone(),
                    value,
                }),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, kept = lines.len(), "Skipped rows with non-numeric amounts");
        }
        lines
    }

    /// Distinct non-empty first-cell texts of rows with at least two cells,
    /// in first-seen order.
    pub fn descriptions(&self, html: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows(html)
            .into_iter()
            .filter(|cells| cells.len() >= 2)
            .filter_map(|mut cells| {
                let desc = cells.swap_remove(0);
                (!desc.is_empty() && seen.insert(desc.clone())).then_some(desc)
            })
            .collect()
    }

    /// Trimmed cell texts for every row of every table.
    fn rows(&self, html: &str) -> Vec<Vec<String>> {
        let document = Html::parse_document(html);
        let mut rows = Vec::new();
        for table in document.select(&self.table) {
            for row in table.select(&self.row) {
                rows.push(row.select(&self.cell).map(cell_text).collect());
            }
        }
        rows
    }
}

/// Extract `(description, value)` pairs from every table in `html`.
pub fn extract_tables(html: &str) -> Result<Vec<ExpenseLine>> {
    Ok(TableExtractor::new()?.expense_lines(html))
}

/// Extract the distinct expense descriptions from every table in `html`.
pub fn extract_descriptions(html: &str) -> Result<Vec<String>> {
    Ok(TableExtractor::new()?.descriptions(html))
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid CSS selector {css:?}: {e}"))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Parse a cell as a finite number. Thousands separators are not accepted.
fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
