// Energy cost analysis: per-company ratios and per-sector means.

pub mod energy;
pub mod sector;
