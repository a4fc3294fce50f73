// Synthetic company data for demos and tests.
//
// Each company gets a random sector, production and service cost totals,
// and an HTML expense table whose rows are drawn from four categories with
// category-specific amount ranges.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::models::CompanyRecord;

/// A category of synthetic expenses with its descriptions and amount range.
pub struct ExpenseCategory {
    pub name: &'static str,
    pub descriptions: &'static [&'static str],
    pub min_value: u32,
    pub max_value: u32,
}

pub const EXPENSE_CATEGORIES: &[ExpenseCategory] = &[
    ExpenseCategory {
        name: "Energy",
        descriptions: &[
            "Electricity Costs",
            "Electric Utilities",
            "Gas Expenses",
            "Fuel Costs",
            "Energy Consumption",
            "Heating Expenses",
            "Power Supply",
        ],
        min_value: 5_000,
        max_value: 50_000,
    },
    ExpenseCategory {
        name: "Services",
        descriptions: &[
            "Consulting Fees",
            "Legal Services",
            "Accounting Services",
            "Marketing Expenses",
            "IT Support",
            "Maintenance Services",
        ],
        min_value: 2_000,
        max_value: 30_000,
    },
    ExpenseCategory {
        name: "Materials",
        descriptions: &[
            "Raw Materials",
            "Production Supplies",
            "Packaging Materials",
            "Construction Materials",
            "Inventory Purchases",
        ],
        min_value: 10_000,
        max_value: 100_000,
    },
    ExpenseCategory {
        name: "Other",
        descriptions: &[
            "Office Supplies",
            "Travel Expenses",
            "Insurance Costs",
            "Training Costs",
            "Miscellaneous Expenses",
        ],
        min_value: 500,
        max_value: 10_000,
    },
];

pub const SECTORS: &[&str] = &["Manufacturing", "Retail", "Construction", "Services"];

/// Build an HTML table of `rows` random expenses.
pub fn generate_expense_table<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> String {
    let mut html = String::from("<table>");
    for _ in 0..rows {
        let Some(category) = EXPENSE_CATEGORIES.choose(rng) else {
            break;
        };
        let Some(description) = category.descriptions.choose(rng) else {
            continue;
        };
        let value = rng.random_range(category.min_value..=category.max_value);
        html.push_str(&format!("<tr><td>{description}</td><td>{value}</td></tr>"));
    }
    html.push_str("</table>");
    html
}

/// Generate `companies` records with `expenses` table rows each.
pub fn generate_synthetic_data<R: Rng + ?Sized>(
    companies: usize,
    expenses: usize,
    rng: &mut R,
) -> Vec<CompanyRecord> {
    (1..=companies)
        .map(|i| {
            let sector = SECTORS.choose(rng).copied().unwrap_or("Services");
            let total_production_costs = rng.random_range(500_000..=5_000_000u32) as f64;
            let service_costs = rng.random_range(100_000..=1_000_000u32) as f64;
            CompanyRecord {
                company_id: format!("Company_{i}"),
                sector_code: sector.to_string(),
                html: generate_expense_table(expenses, rng),
                total_production_costs,
                service_costs,
            }
        })
        .collect()
}
