//! lattice-params - inspect the node's protocol parameter registry
//!
//! Loads an optional configuration file, initializes the registry for the
//! selected profile and prints what a node would run with.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lattice_params::{
    Category, Overrides, ParamName, ParamValue, ParamsError, Production, Profile, Registry,
    RegistryGate, Test,
};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lattice-params")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with node-tier overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the test profile (genesis shortly after now, no end)
    #[arg(long)]
    test: bool,

    /// Machine-readable output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every parameter
    Show,
    /// Print one parameter
    Get {
        /// Canonical or lowercase name
        name: String,
    },
    /// Validate the configuration and exit
    Check,
    /// Print the protocol fingerprint
    Fingerprint,
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'static str,
    category: Category,
    configurable: bool,
    overridden: bool,
    #[serde(flatten)]
    value: &'a ParamValue,
}

#[derive(Serialize)]
struct Response<'a> {
    ok: bool,

    profile: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    entries: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Failure {
    ok: bool,
    err: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let result = if cli.test {
        run::<Test>(&cli)
    } else {
        run::<Production>(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "parameter registry unavailable");
            if cli.json {
                print_json(&Failure {
                    ok: false,
                    err: e.to_string(),
                    key: offending_key(&e),
                });
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run<P: Profile>(cli: &Cli) -> Result<(), ParamsError> {
    let overrides = match &cli.config {
        Some(path) => Overrides::from_file(path)?,
        None => Overrides::new(),
    };
    let gate: RegistryGate<P> = RegistryGate::new();
    let registry = gate.initialize(&overrides)?;

    match &cli.command {
        Command::Show => {
            let values: Vec<_> = registry.entries().collect();
            if cli.json {
                let entries = values
                    .iter()
                    .map(|(name, value)| entry(&registry, *name, value))
                    .collect();
                print_json(&Response {
                    ok: true,
                    profile: P::NAME,
                    fingerprint: Some(registry.fingerprint_hex()),
                    entries,
                });
            } else {
                println!("# profile {} fingerprint {}", P::NAME, registry.fingerprint_hex());
                for (name, value) in &values {
                    let marker = match name {
                        ParamName::Node(n) if registry.is_overridden(*n) => "*",
                        _ => " ",
                    };
                    println!("{marker} {:<40} {value}", name.as_str());
                }
            }
        }
        Command::Get { name } => {
            let value = registry.get(name)?;
            if cli.json {
                let name: ParamName = name.parse()?;
                print_json(&Response {
                    ok: true,
                    profile: P::NAME,
                    fingerprint: None,
                    entries: vec![entry(&registry, name, &value)],
                });
            } else {
                println!("{value}");
            }
        }
        Command::Check => {
            registry.validate_consistency()?;
            if cli.json {
                print_json(&Response {
                    ok: true,
                    profile: P::NAME,
                    fingerprint: Some(registry.fingerprint_hex()),
                    entries: Vec::new(),
                });
            } else {
                println!("ok: {} configuration is consistent", P::NAME);
            }
        }
        Command::Fingerprint => {
            if cli.json {
                print_json(&Response {
                    ok: true,
                    profile: P::NAME,
                    fingerprint: Some(registry.fingerprint_hex()),
                    entries: Vec::new(),
                });
            } else {
                println!("{}", registry.fingerprint_hex());
            }
        }
    }
    Ok(())
}

fn entry<'a, P: Profile>(
    registry: &Registry<P>,
    name: ParamName,
    value: &'a ParamValue,
) -> Entry<'a> {
    Entry {
        name: name.as_str(),
        category: name.category(),
        configurable: name.is_configurable(),
        overridden: match name {
            ParamName::Node(n) => registry.is_overridden(n),
            ParamName::Protocol(_) => false,
        },
        value,
    }
}

fn print_json<T: Serialize>(v: &T) {
    let _ = serde_json::to_writer_pretty(std::io::stdout(), v);
    println!();
}

fn offending_key(e: &ParamsError) -> Option<String> {
    match e {
        ParamsError::Configuration(c) => c.offending_name().map(str::to_string),
        ParamsError::UnknownParameter(u) => Some(u.name.clone()),
        ParamsError::Consistency(_) => None,
    }
}

/// 2 for an unknown parameter name, 1 for any other failure.
fn exit_status(e: &ParamsError) -> u8 {
    match e {
        ParamsError::UnknownParameter(_) => 2,
        ParamsError::Configuration(_) | ParamsError::Consistency(_) => 1,
    }
}
