// Unit tests for energy ratios, sector aggregation, classification and
// synthetic data generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use spendscope::analysis::energy::{analyze_energy_costs, ClassifiedExpense, EnergyAnalysis};
use spendscope::analysis::sector::{summarize_by_sector, CompanyAnalysis};
use spendscope::classify::keyword::KeywordClassifier;
use spendscope::classify::labels::{cost_classes, energy_classes};
use spendscope::classify::traits::ExpenseClassifier;
use spendscope::data::synthetic::{generate_synthetic_data, EXPENSE_CATEGORIES, SECTORS};
use spendscope::extract::extract_tables;

fn company(id: &str, sector: &str, service: f64, production: f64) -> CompanyAnalysis {
    CompanyAnalysis {
        company_id: id.to_string(),
        sector_code: sector.to_string(),
        expenses: vec![],
        energy: EnergyAnalysis {
            energy_costs: 0.0,
            energy_to_service_ratio: service,
            energy_to_production_ratio: production,
        },
    }
}

// ============================================================
// analyze_energy_costs
// ============================================================

#[test]
fn only_energy_labels_are_summed() {
    let classified = vec![
        ClassifiedExpense {
            description: "Electricity Costs".to_string(),
            label: "energia elettrica".to_string(),
            value: 20_000.0,
        },
        ClassifiedExpense {
            description: "Legal Services".to_string(),
            label: "prestazione servizi".to_string(),
            value: 7_000.0,
        },
    ];
    let a = analyze_energy_costs(&classified, &energy_classes(), 200_000.0, 2_000_000.0);
    assert_eq!(a.energy_costs, 20_000.0);
    assert!((a.energy_to_service_ratio - 10.0).abs() < 1e-9);
    assert!((a.energy_to_production_ratio - 1.0).abs() < 1e-9);
}

#[test]
fn no_expenses_means_zero_energy() {
    let a = analyze_energy_costs(&[], &energy_classes(), 100.0, 100.0);
    assert_eq!(a, EnergyAnalysis::default());
}

// ============================================================
// summarize_by_sector
// ============================================================

#[test]
fn sector_means_and_ordering() {
    let analyses = vec![
        company("C1", "Retail", 10.0, 1.0),
        company("C2", "Manufacturing", 4.0, 0.5),
        company("C3", "Retail", 20.0, 3.0),
    ];
    let sectors = summarize_by_sector(&analyses);

    assert_eq!(sectors.len(), 2);
    assert_eq!(sectors[0].sector_code, "Manufacturing");
    assert_eq!(sectors[0].companies, 1);
    assert_eq!(sectors[1].sector_code, "Retail");
    assert_eq!(sectors[1].companies, 2);
    assert!((sectors[1].mean_energy_to_service_ratio - 15.0).abs() < 1e-9);
    assert!((sectors[1].mean_energy_to_production_ratio - 2.0).abs() < 1e-9);
}

#[test]
fn no_companies_no_sectors() {
    assert!(summarize_by_sector(&[]).is_empty());
}

// ============================================================
// KeywordClassifier through the trait
// ============================================================

#[tokio::test]
async fn classify_batch_preserves_order() {
    let classifier = KeywordClassifier::new();
    let descriptions = vec![
        "Power Supply".to_string(),
        "Insurance Costs".to_string(),
        "Fuel Costs".to_string(),
    ];
    let results = classifier
        .classify_batch(&descriptions, &cost_classes())
        .await
        .unwrap();
    let labels: Vec<&str> = results.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["energia elettrica", "assicurazioni", "carburanti e/o combustibili"]
    );
}

#[tokio::test]
async fn every_synthetic_energy_description_is_energy() {
    let classifier = KeywordClassifier::new();
    let energy = energy_classes();
    let category = EXPENSE_CATEGORIES
        .iter()
        .find(|c| c.name == "Energy")
        .unwrap();
    for description in category.descriptions {
        let c = classifier.classify(description, &cost_classes()).await.unwrap();
        assert!(
            energy.contains(&c.label),
            "{description} classified as {}",
            c.label
        );
    }
}

#[tokio::test]
async fn no_synthetic_non_energy_description_is_energy() {
    let classifier = KeywordClassifier::new();
    let energy = energy_classes();
    for category in EXPENSE_CATEGORIES.iter().filter(|c| c.name != "Energy") {
        for description in category.descriptions {
            let c = classifier.classify(description, &cost_classes()).await.unwrap();
            assert!(
                !energy.contains(&c.label),
                "{description} wrongly classified as {}",
                c.label
            );
        }
    }
}

#[tokio::test]
async fn words_that_only_start_with_gas_are_not_energy() {
    let classifier = KeywordClassifier::new();
    let energy = energy_classes();
    for description in ["Gastronomia", "Spese di gastronomia", "Gastro catering"] {
        let c = classifier.classify(description, &cost_classes()).await.unwrap();
        assert!(!energy.contains(&c.label), "{description} wrongly classified as {}", c.label);
    }

    let gas = classifier.classify("Gas Expenses", &cost_classes()).await.unwrap();
    assert!(energy.contains(&gas.label));
}

// ============================================================
// Synthetic data
// ============================================================

#[test]
fn seeded_generation_is_reproducible() {
    let a = generate_synthetic_data(5, 8, &mut StdRng::seed_from_u64(42));
    let b = generate_synthetic_data(5, 8, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn synthetic_values_stay_in_range() {
    let records = generate_synthetic_data(20, 10, &mut StdRng::seed_from_u64(1));
    assert_eq!(records.len(), 20);
    assert_eq!(records[0].company_id, "Company_1");
    assert_eq!(records[19].company_id, "Company_20");

    for record in &records {
        assert!(SECTORS.contains(&record.sector_code.as_str()));
        assert!((500_000.0..=5_000_000.0).contains(&record.total_production_costs));
        assert!((100_000.0..=1_000_000.0).contains(&record.service_costs));

        let lines = extract_tables(&record.html).unwrap();
        assert_eq!(lines.len(), 10);
        for line in lines {
            let category = EXPENSE_CATEGORIES
                .iter()
                .find(|c| c.descriptions.contains(&line.description.as_str()))
                .expect("description comes from a category");
            assert!(line.value >= category.min_value as f64);
            assert!(line.value <= category.max_value as f64);
        }
    }
}
