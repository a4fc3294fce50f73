use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use spendscope::classify::keyword::KeywordClassifier;
use spendscope::classify::traits::ExpenseClassifier;
use spendscope::classify::zero_shot::ZeroShotClassifier;
use spendscope::config::{ClassifierBackend, Config};
use spendscope::data::models::CompanyRecord;
use spendscope::terms::FrequencyThreshold;

/// Spendscope: energy expense analysis for company financial records.
///
/// Extracts expense tables from HTML records, finds recurring expense
/// descriptions, classifies expenses, and relates energy spending to
/// service and production costs.
#[derive(Parser)]
#[command(name = "spendscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic company records (JSON, or CSV for a .csv path)
    Generate {
        /// Number of companies (default: 10)
        #[arg(long, default_value = "10")]
        companies: usize,

        /// Expense rows per company (default: 10)
        #[arg(long, default_value = "10")]
        expenses: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file
        #[arg(long, default_value = "data/synthetic.json")]
        out: PathBuf,
    },

    /// List expense descriptions that recur across documents
    Terms {
        /// JSON or CSV records (default: SPENDSCOPE_DATA_PATH, else synthetic data)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Minimum document frequency: a count like 3 or a proportion like 0.1
        #[arg(long)]
        min_freq: Option<FrequencyThreshold>,
    },

    /// Classify a single expense description
    Classify {
        /// The description (e.g. "Pagamento per energia elettrica")
        description: String,
    },

    /// Run the full energy cost analysis
    Analyze {
        /// JSON or CSV records (default: SPENDSCOPE_DATA_PATH, else synthetic data)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Minimum document frequency: a count like 3 or a proportion like 0.1
        #[arg(long)]
        min_freq: Option<FrequencyThreshold>,

        /// Number of descriptions to classify in parallel (default: 8)
        #[arg(long, default_value = "8")]
        concurrency: usize,

        /// Markdown report path (default: SPENDSCOPE_REPORT_PATH)
        #[arg(long)]
        report: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spendscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            companies,
            expenses,
            seed,
            out,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let records =
                spendscope::data::synthetic::generate_synthetic_data(companies, expenses, &mut rng);
            spendscope::data::save_records(&out, &records)?;

            println!(
                "{}",
                format!(
                    "Generated {} companies with {} expense rows each.",
                    records.len(),
                    expenses
                )
                .bold()
            );
            println!("  Saved to: {}", out.display());
            println!("\nNext: spendscope analyze --input {}", out.display());
        }

        Commands::Terms { input, min_freq } => {
            let config = Config::load()?;
            let records = load_or_generate(input.or(config.data_path.clone()))?;
            let threshold = min_freq.unwrap_or(config.min_freq);

            let extractor = spendscope::extract::TableExtractor::new()?;
            let corpus = spendscope::pipeline::build_corpus(&records, &extractor);
            let table = spendscope::terms::compute_document_frequency(&corpus, &config.stop_words);

            let terms = spendscope::pipeline::frequent_term_counts(&table, threshold)?;

            info!(
                documents = table.total_documents(),
                distinct_terms = table.len(),
                "Computed document frequencies"
            );

            spendscope::output::terminal::display_frequent_terms(
                &terms,
                table.total_documents(),
                threshold,
            );
        }

        Commands::Classify { description } => {
            let config = Config::load()?;
            config.require_classifier()?;
            let classifier = create_classifier(&config);

            let labels = spendscope::classify::labels::cost_classes();
            let classification = classifier.classify(&description, &labels).await?;
            spendscope::output::terminal::display_classification(&description, &classification);
        }

        Commands::Analyze {
            input,
            min_freq,
            concurrency,
            report,
        } => {
            let config = Config::load()?;
            config.require_classifier()?;
            let records = load_or_generate(input.or(config.data_path.clone()))?;
            let classifier = create_classifier(&config);

            let report_path = report.unwrap_or_else(|| config.report_path.clone());
            let options = spendscope::pipeline::PipelineOptions {
                stop_words: config.stop_words,
                threshold: min_freq.unwrap_or(config.min_freq),
                labels: spendscope::classify::labels::cost_classes(),
                energy_labels: config.energy_labels,
                concurrency,
                show_progress: true,
            };

            println!("Analyzing {} company records...", records.len());
            let result = spendscope::pipeline::run(&records, classifier.as_ref(), &options).await?;

            spendscope::output::terminal::display_frequent_terms(
                &result.frequent_terms,
                result.total_documents,
                result.threshold,
            );
            spendscope::output::terminal::display_company_analyses(&result.companies);
            spendscope::output::terminal::display_sector_chart(&result.sectors);

            let written = spendscope::output::markdown::generate_report(&result, &report_path)?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {written}").bold()
            );
        }
    }

    Ok(())
}

/// Load records from `path`, or fall back to a fresh synthetic dataset.
fn load_or_generate(path: Option<PathBuf>) -> Result<Vec<CompanyRecord>> {
    match path {
        Some(path) => spendscope::data::load_records(&path),
        None => {
            println!(
                "{}",
                "No input given; using 10 synthetic companies.".dimmed()
            );
            let mut rng = StdRng::from_os_rng();
            Ok(spendscope::data::synthetic::generate_synthetic_data(10, 10, &mut rng))
        }
    }
}

/// Create the classifier selected by configuration.
fn create_classifier(config: &Config) -> Box<dyn ExpenseClassifier> {
    match config.classifier_backend {
        ClassifierBackend::Keyword => Box::new(KeywordClassifier::new()),
        ClassifierBackend::ZeroShot => {
            info!(model = %config.zero_shot_model, "Using hosted zero-shot classifier");
            Box::new(ZeroShotClassifier::new(
                &config.zero_shot_url,
                &config.zero_shot_model,
                config.hf_api_token.clone(),
            ))
        }
    }
}
