use anyhow::Result;
use autofin::core::log::init_logging;
use autofin::core::settings::LoanTerm;
use clap::{Args, Parser, Subcommand};

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

#[derive(Args)]
struct SetCommand {
    /// Estimated vehicle price; anything but digits is ignored
    #[arg(short, long, allow_hyphen_values = true)]
    price: Option<String>,

    /// Down payment; capped at the vehicle price
    #[arg(short, long, allow_hyphen_values = true)]
    down: Option<String>,

    /// Annual interest rate in percent (0-20, steps of 0.25)
    #[arg(short, long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Loan term in months: 48, 60, 72 or 84
    #[arg(short, long)]
    term: Option<LoanTerm>,
}

impl From<Commands> for autofin::AppCommand {
    fn from(cmd: Commands) -> autofin::AppCommand {
        match cmd {
            Commands::Show => autofin::AppCommand::Show,
            Commands::Set(args) => autofin::AppCommand::Set(autofin::SetArgs {
                vehicle_price: args.price,
                down_payment: args.down,
                interest_rate: args.rate,
                loan_term: args.term,
            }),
            Commands::Reset => autofin::AppCommand::Reset,
            Commands::Interactive => autofin::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the current estimate
    Show,
    /// Change one or more inputs and display the estimate
    Set(SetCommand),
    /// Restore the default inputs
    Reset,
    /// Adjust inputs from a prompt
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => autofin::cli::setup::setup(),
        Some(cmd) => autofin::run_command(cmd.into(), cli.config_path.as_deref()),
        None => autofin::run_command(autofin::AppCommand::Show, cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
