// Per-sector aggregation of company energy ratios.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::energy::{ClassifiedExpense, EnergyAnalysis};

/// The full analysis of one company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub company_id: String,
    pub sector_code: String,
    pub expenses: Vec<ClassifiedExpense>,
    pub energy: EnergyAnalysis,
}

/// Mean energy ratios across the companies of one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub sector_code: String,
    pub companies: usize,
    pub mean_energy_to_service_ratio: f64,
    pub mean_energy_to_production_ratio: f64,
}

/// Group companies by sector and average both ratios. Sectors come back
/// sorted by code.
pub fn summarize_by_sector(analyses: &[CompanyAnalysis]) -> Vec<SectorSummary> {
    let mut groups: BTreeMap<&str, (usize, f64, f64)> = BTreeMap::new();

    for analysis in analyses {
        let entry = groups
            .entry(analysis.sector_code.as_str())
            .or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += analysis.energy.energy_to_service_ratio;
        entry.2 += analysis.energy.energy_to_production_ratio;
    }

    groups
        .into_iter()
        .map(|(sector, (count, service_sum, production_sum))| SectorSummary {
            sector_code: sector.to_string(),
            companies: count,
            mean_energy_to_service_ratio: service_sum / count as f64,
            mean_energy_to_production_ratio: production_sum / count as f64,
        })
        .collect()
}
