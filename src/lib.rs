pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::session::Calculator;
use crate::core::settings::LoanTerm;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

/// Inputs for a one-shot update. Each present field is committed in order,
/// as if typed into the screen and then left.
#[derive(Debug, Default, Clone)]
pub struct SetArgs {
    pub vehicle_price: Option<String>,
    pub down_payment: Option<String>,
    pub interest_rate: Option<f64>,
    pub loan_term: Option<LoanTerm>,
}

pub enum AppCommand {
    Show,
    Set(SetArgs),
    Reset,
    Interactive,
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_command_with_io(command, config_path, stdin.lock(), &mut stdout)
}

pub fn run_command_with_io<R: std::io::BufRead, W: Write>(
    command: AppCommand,
    config_path: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Auto finance calculator starting...");

    let config = load_config(config_path)?;
    let store = store::open_store(&config);
    let mut calc = Calculator::load(store.as_ref());

    match command {
        AppCommand::Show => {}
        AppCommand::Set(args) => apply(&mut calc, args),
        AppCommand::Reset => {
            calc.reset();
        }
        AppCommand::Interactive => return cli::interactive::run(&mut calc, input, out),
    }

    writeln!(out, "{}", cli::screen::render(&calc))?;
    Ok(())
}

fn apply(calc: &mut Calculator, args: SetArgs) {
    if let Some(raw) = args.vehicle_price {
        calc.set_vehicle_price(&raw);
        calc.blur_vehicle_price();
    }
    if let Some(raw) = args.down_payment {
        calc.set_down_payment(&raw);
        calc.blur_down_payment();
    }
    if let Some(rate) = args.interest_rate {
        calc.set_interest_rate(rate);
    }
    if let Some(term) = args.loan_term {
        calc.set_loan_term(term);
    }
}
