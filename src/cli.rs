use crate::config::{AppConfig, OutputFormat};
use crate::error::AppError;
use crate::report::{self, CheckReport};
use crate::telemetry;
use clap::{Args, Parser, Subcommand};
use cpf::Cpf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "cpf-cli",
    about = "Validate and format Brazilian CPF numbers",
    version
)]
struct Cli {
    /// Output format (overrides CPF_OUTPUT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one or more candidate CPFs
    Check(CheckArgs),
    /// Compute the check digits for a nine-digit base
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Candidates as DDD.DDD.DDD-DD or 11 digits
    #[arg(required = true)]
    inputs: Vec<String>,
    /// Treat bare digit strings as integers, restoring leading zeros
    #[arg(long)]
    numeric: bool,
    /// Exit with an error when any input is invalid
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Nine-digit base (leading zeros may be omitted)
    base: u32,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(format) = cli.format {
        config.output = format;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, output = ?config.output, "configuration loaded");

    match cli.command {
        Command::Check(args) => run_check(args, config.output),
        Command::Generate(args) => run_generate(args, config.output),
    }
}

fn run_check(args: CheckArgs, output: OutputFormat) -> Result<(), AppError> {
    let reports: Vec<CheckReport> = args
        .inputs
        .iter()
        .map(|input| report::check_input(input, args.numeric))
        .collect();

    let invalid = report::invalid_count(&reports);
    debug!(checked = reports.len(), invalid, "CPF check finished");

    match output {
        OutputFormat::Text => print!("{}", report::render_text(&reports)),
        OutputFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    if args.strict && invalid > 0 {
        return Err(AppError::InvalidInputs(invalid));
    }

    Ok(())
}

fn run_generate(args: GenerateArgs, output: OutputFormat) -> Result<(), AppError> {
    let cpf = Cpf::generate(args.base)?;

    match output {
        OutputFormat::Text => println!("{cpf}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cpf.record())?),
    }

    Ok(())
}
