// End-to-end analysis of a set of company records.
//
// 1. Extract descriptions per record and build the corpus
// 2. Compute document frequencies and keep the frequent terms
// 3. Extract expense lines and classify each distinct description once
// 4. Compute energy ratios per company and means per sector

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::energy::{analyze_energy_costs, ClassifiedExpense};
use crate::analysis::sector::{summarize_by_sector, CompanyAnalysis, SectorSummary};
use crate::classify::labels;
use crate::classify::traits::{Classification, ExpenseClassifier};
use crate::data::models::CompanyRecord;
use crate::extract::tables::{ExpenseLine, TableExtractor};
use crate::terms::{
    compute_document_frequency, Document, DocumentFrequencyTable, FrequencyError, FrequencyThreshold,
    StopWords,
};

/// Tunables for one pipeline run. Everything is passed explicitly.
pub struct PipelineOptions {
    pub stop_words: StopWords,
    pub threshold: FrequencyThreshold,
    /// Candidate labels handed to the classifier
    pub labels: Vec<String>,
    /// Labels whose amounts count as energy costs
    pub energy_labels: Vec<String>,
    /// Descriptions classified in parallel
    pub concurrency: usize,
    /// Show a progress bar while classifying
    pub show_progress: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            stop_words: StopWords::italian_cost_tables(),
            threshold: FrequencyThreshold::default(),
            labels: labels::cost_classes(),
            energy_labels: labels::energy_classes(),
            concurrency: 8,
            show_progress: false,
        }
    }
}

/// A frequent term and the number of documents it appears in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub documents: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub total_documents: usize,
    pub threshold: FrequencyThreshold,
    pub frequent_terms: Vec<TermCount>,
    pub companies: Vec<CompanyAnalysis>,
    pub sectors: Vec<SectorSummary>,
}

/// One document per record, keyed by company id.
pub fn build_corpus(records: &[CompanyRecord], extractor: &TableExtractor) -> Vec<Document> {
    records
        .iter()
        .map(|r| Document::new(r.company_id.clone(), extractor.descriptions(&r.html)))
        .collect()
}

/// Frequent terms of `table` with their document counts, most frequent first.
pub fn frequent_term_counts(
    table: &DocumentFrequencyTable,
    threshold: FrequencyThreshold,
) -> Result<Vec<TermCount>, FrequencyError> {
    Ok(table
        .frequent_terms_with_counts(threshold)?
        .into_iter()
        .map(|(term, documents)| TermCount {
            term: term.into_string(),
            documents,
        })
        .collect())
}

/// Run the full analysis over `records`.
pub async fn run(
    records: &[CompanyRecord],
    classifier: &dyn ExpenseClassifier,
    options: &PipelineOptions,
) -> Result<PipelineReport> {
    let extractor = TableExtractor::new()?;

    // Steps 1-2: term frequency
    let corpus = build_corpus(records, &extractor);
    let table = compute_document_frequency(&corpus, &options.stop_words);
    let frequent_terms = frequent_term_counts(&table, options.threshold)?;

    info!(
        documents = table.total_documents(),
        distinct_terms = table.len(),
        frequent_terms = frequent_terms.len(),
        threshold = %options.threshold,
        "Computed document frequencies"
    );

    // Step 3: classification
    let lines: Vec<Vec<ExpenseLine>> = records
        .iter()
        .map(|r| extractor.expense_lines(&r.html))
        .collect();
    let distinct: BTreeSet<String> = lines
        .iter()
        .flatten()
        .map(|l| l.description.clone())
        .collect();
    let classifications = classify_distinct(distinct, classifier, options).await;

    // Step 4: analysis
    let companies: Vec<CompanyAnalysis> = records
        .iter()
        .zip(lines)
        .map(|(record, lines)| {
            let expenses: Vec<ClassifiedExpense> = lines
                .into_iter()
                .map(|line| {
                    let label = classifications
                        .get(line.description.as_str())
                        .map(|c| c.label.clone())
                        .unwrap_or_else(|| Classification::uncategorized().label);
                    ClassifiedExpense {
                        description: line.description,
                        label,
                        value: line.value,
                    }
                })
                .collect();
            let energy = analyze_energy_costs(
                &expenses,
                &options.energy_labels,
                record.service_costs,
                record.total_production_costs,
            );
            CompanyAnalysis {
                company_id: record.company_id.clone(),
                sector_code: record.sector_code.clone(),
                expenses,
                energy,
            }
        })
        .collect();

    let sectors = summarize_by_sector(&companies);

    info!(
        companies = companies.len(),
        sectors = sectors.len(),
        "Energy analysis complete"
    );

    Ok(PipelineReport {
        total_documents: table.total_documents(),
        threshold: options.threshold,
        frequent_terms,
        companies,
        sectors,
    })
}

/// Classify each description once. A failed description is logged and left
/// out of the map, so its lines fall back to uncategorized.
async fn classify_distinct(
    descriptions: BTreeSet<String>,
    classifier: &dyn ExpenseClassifier,
    options: &PipelineOptions,
) -> HashMap<String, Classification> {
    let pb = if options.show_progress {
        let pb = ProgressBar::new(descriptions.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Classifying [{bar:30}] {pos}/{len} ({eta})")
        {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let labels = &options.labels;
    let results: Vec<(String, Result<Classification>)> =
        stream::iter(descriptions.into_iter().map(|desc| async move {
            let result = classifier.classify(&desc, labels).await;
            (desc, result)
        }))
        .buffer_unordered(options.concurrency.max(1))
        .inspect(|_| pb.inc(1))
        .collect()
        .await;
    pb.finish_and_clear();

    let mut classified = HashMap::with_capacity(results.len());
    for (desc, result) in results {
        match result {
            Ok(c) => {
                classified.insert(desc, c);
            }
            Err(e) => {
                warn!(
                    description = %desc,
                    error = %e,
                    "Failed to classify expense, leaving uncategorized"
                );
            }
        }
    }
    classified
}
