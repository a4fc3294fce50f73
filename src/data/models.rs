// Company record model.

use serde::{Deserialize, Serialize};

/// One company's financial record. The expense breakdown is an HTML
/// fragment containing one or more tables.
///
/// Field names on the wire match the tabular exports these records
/// originate from (`Company_ID`, `Sector_Code`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(rename = "Company_ID")]
    pub company_id: String,
    #[serde(rename = "Sector_Code")]
    pub sector_code: String,
    #[serde(rename = "HTML")]
    pub html: String,
    #[serde(rename = "Total_Production_Costs")]
    pub total_production_costs: f64,
    #[serde(rename = "Service_Costs")]
    pub service_costs: f64,
}
