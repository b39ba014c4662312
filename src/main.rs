use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use navcandle::core::log::init_logging;
use navcandle::core::{Period, PredictionRequest};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List the schemes of a fund house with their latest NAV
    Funds {
        /// Fund house name, e.g. "HDFC Mutual Fund"
        house: String,
    },
    /// Show candlesticks for one scheme of a fund house
    Candles {
        /// Fund house name, e.g. "HDFC Mutual Fund"
        house: String,

        /// Scheme code; defaults to the first scheme by name
        #[arg(short, long)]
        scheme: Option<u32>,

        /// Lookback window: 1y, 3y, 5y or all
        #[arg(short, long, default_value = "1y")]
        period: Period,

        /// Seed for placeholder candles when no NAV data is available
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Predict 1y/3y/5y returns with the remote model
    Predict(PredictArgs),
}

#[derive(Args)]
struct PredictArgs {
    /// Fund house name
    #[arg(long)]
    amc: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    sub_category: String,
    #[arg(long, default_value_t = 5000.0)]
    min_sip: f64,
    #[arg(long, default_value_t = 1.5)]
    expense_ratio: f64,
    #[arg(long, default_value_t = 5.0)]
    fund_age: f64,
    #[arg(long, default_value_t = 2.0)]
    alpha: f64,
    #[arg(long, default_value_t = 0.8)]
    sharpe: f64,
    /// Risk level from 1 (low) to 6 (very high)
    #[arg(long, default_value_t = 3)]
    risk_level: u8,
}

impl From<PredictArgs> for PredictionRequest {
    fn from(args: PredictArgs) -> Self {
        PredictionRequest {
            min_sip: args.min_sip,
            expense_ratio: args.expense_ratio,
            fund_age_yr: args.fund_age,
            alpha: args.alpha,
            sharpe: args.sharpe,
            risk_level: args.risk_level,
            amc_name: args.amc,
            category: args.category,
            sub_category: args.sub_category,
            ..Default::default()
        }
    }
}

impl From<Commands> for navcandle::AppCommand {
    fn from(cmd: Commands) -> navcandle::AppCommand {
        match cmd {
            Commands::Funds { house } => navcandle::AppCommand::Funds { house },
            Commands::Candles {
                house,
                scheme,
                period,
                seed,
            } => navcandle::AppCommand::Candles {
                house,
                scheme,
                period,
                seed,
            },
            Commands::Predict(args) => navcandle::AppCommand::Predict(args.into()),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => navcandle::cli::setup::setup(),
        Some(cmd) => navcandle::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
