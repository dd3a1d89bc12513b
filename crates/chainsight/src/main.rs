use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use jiff::Zoned;
use jiff::civil::Date;

use chainsight::state::AppState;
use chainsight::{App, init_logging};
use chainsight_core::{
    DataDirectory, Dataset, DemandModel, EvaluationConfig, GeneratorConfig, NegotiationModel,
    evaluate_demand_model, generate,
};

#[derive(Parser, Debug)]
#[command(name = "chainsight")]
#[command(about = "Terminal dashboards for supply-chain analytics demos")]
struct Args {
    /// Path to the data directory (default: ~/.chainsight/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the synthetic dataset and write it to the data directory
    Generate {
        /// First day of the generated history (inclusive)
        #[arg(long, default_value = "2019-01-01")]
        start: Date,

        /// Last day of the generated history (inclusive)
        #[arg(long, default_value = "2022-12-31")]
        end: Date,

        /// Number of suppliers to generate
        #[arg(long, default_value_t = 50)]
        suppliers: u32,

        /// Seed for the sampling rng
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Evaluate the demand model on a held-out fraction of the sales history
    Evaluate {
        /// Fraction of sales records held out for testing
        #[arg(long, default_value_t = 0.2)]
        test_fraction: f64,

        /// Seed for the train/test shuffle
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chainsight")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let storage = DataDirectory::new(data_dir.clone());

    match args.command {
        Some(Command::Generate {
            start,
            end,
            suppliers,
            seed,
        }) => run_generate(&storage, start, end, suppliers, seed),
        Some(Command::Evaluate {
            test_fraction,
            seed,
        }) => run_evaluate(&storage, test_fraction, seed),
        None => run_dashboards(&storage, &data_dir, &args.log_level),
    }
}

fn run_generate(
    storage: &DataDirectory,
    start: Date,
    end: Date,
    suppliers: u32,
    seed: u64,
) -> color_eyre::Result<()> {
    let config = GeneratorConfig {
        start_date: start,
        end_date: end,
        supplier_count: suppliers,
        seed,
    };
    let dataset = generate(&config)?;
    storage.save(&dataset)?;

    println!("Wrote dataset to {}", storage.root().display());
    println!(
        "  {} sales records, {} external-factor records, {} suppliers",
        dataset.sales().len(),
        dataset.external_factors().len(),
        dataset.suppliers().len(),
    );

    println!("\nHistorical sales (first rows):");
    for record in dataset.sales().iter().take(5) {
        println!(
            "  {}  product {:>3}  {:<5}  qty {}",
            record.date, record.product, record.region, record.quantity_sold
        );
    }

    println!("\nExternal factors (first rows):");
    for record in dataset.external_factors().iter().take(5) {
        println!(
            "  {}  economic {:.3}  weather {:.3}",
            record.date, record.economic_indicator, record.weather_impact
        );
    }

    println!("\nSuppliers (first rows):");
    for record in dataset.suppliers().iter().take(5) {
        println!(
            "  #{:<3} {:<12} reliability {:.3}  cost-effectiveness {:.3}",
            record.id, record.name, record.reliability, record.cost_effectiveness
        );
    }

    Ok(())
}

fn run_evaluate(storage: &DataDirectory, test_fraction: f64, seed: u64) -> color_eyre::Result<()> {
    let dataset = load_dataset(storage)?;
    let config = EvaluationConfig {
        test_fraction,
        seed,
    };
    let report = evaluate_demand_model(dataset.sales(), &config)?;

    println!(
        "Evaluated demand model on {} training / {} test records",
        report.train_count, report.test_count
    );
    println!("Mean Squared Error: {:.2}", report.mse);
    println!("Root Mean Squared Error: {:.2}", report.rmse());
    println!("Baseline (train mean) MSE: {:.2}", report.baseline_mse);

    Ok(())
}

fn run_dashboards(
    storage: &DataDirectory,
    data_dir: &Path,
    log_level: &str,
) -> color_eyre::Result<()> {
    init_logging(data_dir, log_level)?;

    let dataset = load_dataset(storage)?;
    let demand_model = DemandModel::fit(dataset.sales())?;
    let negotiation_model = NegotiationModel::fit(dataset.suppliers())?;
    let today = Zoned::now().date();

    let state = AppState::new(dataset, demand_model, negotiation_model, today);
    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

fn load_dataset(storage: &DataDirectory) -> color_eyre::Result<Dataset> {
    if !storage.exists() {
        color_eyre::eyre::bail!(
            "no dataset found in {} (run `chainsight generate` first)",
            storage.root().display()
        );
    }
    Ok(storage.load()?)
}
