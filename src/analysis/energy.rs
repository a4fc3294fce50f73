// Energy cost ratios for a single company.
//
// Energy costs are the sum of every classified expense whose label is one
// of the energy labels. Each ratio is a percentage of the denominator, and
// is 0 when the denominator is not positive.

use serde::{Deserialize, Serialize};

/// An extracted expense together with the label it was classified as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedExpense {
    pub description: String,
    pub label: String,
    pub value: f64,
}

/// Energy totals and ratios for one company.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    pub energy_costs: f64,
    /// Energy costs as a percentage of service costs
    pub energy_to_service_ratio: f64,
    /// Energy costs as a percentage of total production costs
    pub energy_to_production_ratio: f64,
}

/// Sum energy expenses and relate them to service and production costs.
pub fn analyze_energy_costs(
    classified: &[ClassifiedExpense],
    energy_labels: &[String],
    service_costs: f64,
    production_costs: f64,
) -> EnergyAnalysis {
    let energy_costs: f64 = classified
        .iter()
        .filter(|e| energy_labels.iter().any(|l| l == &e.label))
        .map(|e| e.value)
        .sum();

    EnergyAnalysis {
        energy_costs,
        energy_to_service_ratio: percentage(energy_costs, service_costs),
        energy_to_production_ratio: percentage(energy_costs, production_costs),
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
