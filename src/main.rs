use clap::{Parser, Subcommand, ValueEnum};
use collective_payouts::application::amount_input::{AmountInput, AmountInputConfig};
use collective_payouts::application::payout_method_select::PayoutMethodSelect;
use collective_payouts::domain::amount::{AmountConstraints, Precision};
use collective_payouts::domain::currency::CurrencyDisplay;
use collective_payouts::domain::ports::PayoutMethodStoreBox;
use collective_payouts::infrastructure::in_memory::InMemoryPayoutMethodStore;
use collective_payouts::interfaces::csv::amount_reader::AmountReader;
use collective_payouts::interfaces::csv::amount_writer::{AmountRecord, AmountWriter};
use collective_payouts::interfaces::json::scenario::{OptionsReport, PayoutScenario};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run typed amounts (CSV with `currency,input` header) through an amount field
    Amounts(AmountsArgs),
    /// Derive the payout method options of a payer/payee scenario (JSON)
    Options {
        /// Scenario file with `payer`, `payee` and `payoutMethods`
        scenario: PathBuf,
    },
}

#[derive(clap::Args)]
struct AmountsArgs {
    /// Input CSV file
    input: PathBuf,

    /// Number of fractional digits
    #[arg(long, default_value_t = 2)]
    precision: u32,

    /// How the currency prefix is rendered
    #[arg(long, value_enum, default_value_t = DisplayArg::Symbol)]
    currency_display: DisplayArg,

    /// Minimum amount, in minor units
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min: i64,

    /// Maximum amount, in minor units
    #[arg(long, default_value_t = collective_payouts::domain::amount::DEFAULT_MAX_MINOR_UNITS)]
    max: i64,

    /// Flag empty amounts as errors
    #[arg(long)]
    required: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DisplayArg {
    Symbol,
    Code,
    Full,
}

impl From<DisplayArg> for CurrencyDisplay {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Symbol => CurrencyDisplay::Symbol,
            DisplayArg::Code => CurrencyDisplay::Code,
            DisplayArg::Full => CurrencyDisplay::Full,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Amounts(args) => run_amounts(args),
        Command::Options { scenario } => run_options(scenario).await,
    }
}

fn run_amounts(args: AmountsArgs) -> Result<()> {
    let precision = Precision::new(args.precision).into_diagnostic()?;
    let template = AmountInputConfig {
        currency_display: args.currency_display.into(),
        precision,
        constraints: AmountConstraints {
            min: Some(args.min),
            max: Some(args.max),
            step: Some(precision.smallest_step()),
        },
        required: args.required,
        ..Default::default()
    };

    let file = File::open(args.input).into_diagnostic()?;
    let reader = AmountReader::new(file);

    let stdout = io::stdout();
    let mut writer = AmountWriter::new(stdout.lock());

    for row_result in reader.rows() {
        match row_result {
            Ok(row) => {
                let mut field = AmountInput::new(AmountInputConfig {
                    currency: row.currency,
                    ..template.clone()
                });
                field.change(row.input.as_str());
                field.blur();
                writer
                    .write_record(&AmountRecord::new(&row.input, &field))
                    .into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading amount row: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

async fn run_options(path: PathBuf) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    let scenario = PayoutScenario::from_reader(file).into_diagnostic()?;

    // Saved methods are served through the store, as the API would.
    let seeded = InMemoryPayoutMethodStore::new();
    let payee_id = scenario
        .payee
        .as_ref()
        .map(|payee| payee.id.clone())
        .unwrap_or_default();
    for method in scenario.payout_methods {
        if let Err(e) = seeded.insert(&payee_id, method).await {
            eprintln!("Skipping payout method: {}", e);
        }
    }
    let store: PayoutMethodStoreBox = Box::new(seeded);
    let payout_methods = store.list(&payee_id).await.into_diagnostic()?;

    let select = PayoutMethodSelect::new(scenario.payer);
    let options = select.options(&payout_methods, scenario.payee.as_ref()).await;
    let verdict = select
        .verdict(&payout_methods, scenario.payee.as_ref())
        .await;

    let stdout = io::stdout();
    OptionsReport::new(&verdict, &options)
        .write_pretty(stdout.lock())
        .into_diagnostic()?;
    println!();

    Ok(())
}
