use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connector_fixtures::config::AppConfig;
use connector_fixtures::telemetry;
use connector_fixtures::FixtureRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "fixture_cli",
    about = "Inspect the payment connector fixture registry"
)]
struct Cli {
    /// Directory holding `<connector>.json` overrides
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,
    /// JSON config file (defaults to assets/fixture_config.json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log level override (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered connector ids
    List,
    /// Print a connector fixture, or one of its flows, as JSON
    Show {
        #[arg(long)]
        connector: String,
        #[arg(long, requires = "flow")]
        payment_method: Option<String>,
        #[arg(long, requires = "payment_method")]
        flow: Option<String>,
    },
    /// Build the registry and summarize every connector
    Check,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::load(),
    };
    if let Some(dir) = cli.fixtures_dir {
        config.registry.fixtures_dir = Some(dir);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    telemetry::init_logging(&config.logging.level);

    let registry = config
        .build_registry()
        .context("building fixture registry")?;

    match cli.command {
        Commands::List => run_list(&registry),
        Commands::Show {
            connector,
            payment_method,
            flow,
        } => run_show(&registry, &connector, payment_method.as_deref(), flow.as_deref()),
        Commands::Check => run_check(&registry),
    }
}

fn run_list(registry: &FixtureRegistry) -> Result<ExitCode> {
    for id in registry.connectors() {
        println!("{id}");
    }
    Ok(ExitCode::from(0))
}

fn run_show(
    registry: &FixtureRegistry,
    connector: &str,
    payment_method: Option<&str>,
    flow: Option<&str>,
) -> Result<ExitCode> {
    let Some(fixture) = registry.resolve(connector) else {
        eprintln!("Unknown connector: {connector}");
        return Ok(ExitCode::from(2));
    };

    let value = match (payment_method, flow) {
        (Some(pm), Some(name)) => match fixture.flow(pm, name) {
            Some(flow) => flow.as_value(),
            None => {
                eprintln!("Connector {connector} has no flow {pm}/{name}");
                return Ok(ExitCode::from(2));
            }
        },
        _ => fixture.as_value(),
    };

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::from(0))
}

fn run_check(registry: &FixtureRegistry) -> Result<ExitCode> {
    for (id, fixture) in registry.iter() {
        println!("{id}: {} flows", fixture.flow_count());
    }
    Ok(ExitCode::from(0))
}
