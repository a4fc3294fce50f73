// Unit tests for document frequency counting and threshold filtering.
//
// Covers the corpus-level properties: empty corpus, per-document
// de-duplication, stop-word exclusion, absolute and proportional
// thresholds, invalid thresholds, and idempotence.

use spendscope::terms::{
    compute_document_frequency, filter_by_min_frequency, Document, FrequencyError,
    FrequencyThreshold, StopWords,
};

fn stop_words() -> StopWords {
    StopWords::italian_cost_tables()
}

/// Ten documents; "Energy" appears in the first three, "Gas" in the first
/// two, "Rent" in all ten.
fn ten_documents() -> Vec<Document> {
    (0..10)
        .map(|i| {
            let mut descriptions = vec!["Rent".to_string(), "totale".to_string()];
            if i < 3 {
                descriptions.push("Energy".to_string());
            }
            if i < 2 {
                descriptions.push("Gas".to_string());
            }
            Document::new(format!("doc-{i}"), descriptions)
        })
        .collect()
}

// ============================================================
// compute_document_frequency
// ============================================================

#[test]
fn empty_corpus_yields_empty_table() {
    let table = compute_document_frequency(&[], &stop_words());
    assert!(table.is_empty());
    assert_eq!(table.total_documents(), 0);
}

#[test]
fn empty_corpus_filters_to_empty_list() {
    let table = compute_document_frequency(&[], &stop_words());
    let terms = table
        .frequent_terms(FrequencyThreshold::Proportion(0.1))
        .unwrap();
    assert!(terms.is_empty());
}

#[test]
fn repeated_term_counts_once_per_document() {
    let corpus = vec![
        Document::new("a", ["Gas", "Gas", "Gas"]),
        Document::new("b", ["Gas"]),
    ];
    let table = compute_document_frequency(&corpus, &stop_words());
    assert_eq!(table.get("Gas"), 2);
}

#[test]
fn stop_word_only_document_contributes_nothing() {
    let corpus = vec![Document::new("a", ["totale", "descrizione", "totale calcolato", "0"])];
    let table = compute_document_frequency(&corpus, &stop_words());
    assert!(table.is_empty());
    assert_eq!(table.total_documents(), 1);
}

#[test]
fn descriptions_are_trimmed_not_case_folded() {
    let corpus = vec![
        Document::new("a", ["  Fuel Costs  "]),
        Document::new("b", ["Fuel Costs"]),
        Document::new("c", ["fuel costs"]),
    ];
    let table = compute_document_frequency(&corpus, &stop_words());
    assert_eq!(table.get("Fuel Costs"), 2);
    assert_eq!(table.get("fuel costs"), 1);
}

#[test]
fn counts_never_exceed_corpus_size() {
    let corpus = ten_documents();
    let table = compute_document_frequency(&corpus, &stop_words());
    assert!(table
        .counts()
        .values()
        .all(|&count| count <= table.total_documents()));
    assert!(table
        .counts()
        .keys()
        .all(|term| !term.as_str().is_empty() && !stop_words().contains(term.as_str())));
}

#[test]
fn recomputing_is_idempotent() {
    let corpus = ten_documents();
    let a = compute_document_frequency(&corpus, &stop_words());
    let b = compute_document_frequency(&corpus, &stop_words());
    assert_eq!(a, b);
}

// ============================================================
// filter_by_min_frequency: absolute thresholds
// ============================================================

#[test]
fn absolute_threshold_is_inclusive() {
    let table = compute_document_frequency(&ten_documents(), &stop_words());

    let at_three = table.frequent_terms(FrequencyThreshold::Absolute(3)).unwrap();
    assert!(at_three.iter().any(|t| t.as_str() == "Energy"));

    let at_four = table.frequent_terms(FrequencyThreshold::Absolute(4)).unwrap();
    assert!(!at_four.iter().any(|t| t.as_str() == "Energy"));
}

#[test]
fn absolute_zero_keeps_everything() {
    let table = compute_document_frequency(&ten_documents(), &stop_words());
    let terms = table.frequent_terms(FrequencyThreshold::Absolute(0)).unwrap();
    assert_eq!(terms.len(), table.len());
}

// ============================================================
// filter_by_min_frequency: proportional thresholds
// ============================================================

#[test]
fn proportion_resolves_with_round_half_up() {
    // round(10 * 0.25) = round(2.5) = 3
    let table = compute_document_frequency(&ten_documents(), &stop_words());
    let terms = table
        .frequent_terms(FrequencyThreshold::Proportion(0.25))
        .unwrap();
    assert!(terms.iter().any(|t| t.as_str() == "Energy"), "count 3 is kept");
    assert!(!terms.iter().any(|t| t.as_str() == "Gas"), "count 2 is dropped");
}

#[test]
fn exact_half_threshold_rounds_up_not_down() {
    // 50 * 0.29 = 14.5 -> 15, so a term in 14 of 50 documents is dropped
    let corpus: Vec<Document> = (0..50)
        .map(|i| {
            let mut descriptions = vec!["Rent".to_string()];
            if i < 14 {
                descriptions.push("Heating Expenses".to_string());
            }
            if i < 15 {
                descriptions.push("Fuel Costs".to_string());
            }
            Document::new(format!("doc-{i}"), descriptions)
        })
        .collect();
    let table = compute_document_frequency(&corpus, &stop_words());
    let terms = table
        .frequent_terms(FrequencyThreshold::Proportion(0.29))
        .unwrap();
    assert!(terms.iter().any(|t| t.as_str() == "Fuel Costs"));
    assert!(!terms.iter().any(|t| t.as_str() == "Heating Expenses"));
}

#[test]
fn results_are_ordered_by_frequency_then_term() {
    let table = compute_document_frequency(&ten_documents(), &stop_words());
    let terms: Vec<String> = table
        .frequent_terms(FrequencyThreshold::Absolute(1))
        .unwrap()
        .into_iter()
        .map(|t| t.into_string())
        .collect();
    assert_eq!(terms, vec!["Rent", "Energy", "Gas"]);
}

#[test]
fn invalid_proportions_are_rejected() {
    let table = compute_document_frequency(&ten_documents(), &stop_words());
    for bad in [1.0, 0.0, 1.5, -0.2] {
        let result = filter_by_min_frequency(
            table.counts(),
            table.total_documents(),
            FrequencyThreshold::Proportion(bad),
        );
        assert_eq!(result, Err(FrequencyError::InvalidArgument(bad)), "min_freq={bad}");
    }
}

#[test]
fn filtering_does_not_mutate_table() {
    let table = compute_document_frequency(&ten_documents(), &stop_words());
    let before = table.clone();
    let _ = table.frequent_terms(FrequencyThreshold::Absolute(5));
    let _ = table.frequent_terms(FrequencyThreshold::Proportion(1.0));
    assert_eq!(table, before);
}

#[test]
fn threshold_text_follows_integer_vs_real_typing() {
    assert_eq!(
        "3".parse::<FrequencyThreshold>().unwrap(),
        FrequencyThreshold::Absolute(3)
    );
    // "1.0" is a proportion, and therefore invalid at filter time
    let one: FrequencyThreshold = "1.0".parse().unwrap();
    assert!(one.resolve(10).is_err());
}
