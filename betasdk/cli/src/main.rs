//! betasdk CLI - inspect and normalize Microsoft Graph beta payloads

mod output;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use betasdk_lib::{
    AnyEntity, SerializationConfig, SerializationError, from_json_str_with_config,
    registered_discriminators, to_json_string_with_config,
};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use output::{
    InspectReport, enum_tables, print_enum_tables_text, print_inspect_text, print_json,
    print_types_text,
};

#[derive(Parser)]
#[command(name = "betasdk")]
#[command(version)]
#[command(about = "Inspect and normalize Microsoft Graph beta payloads", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which record a payload is read into
    Inspect {
        /// Payload file (use "-" to read from stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON instead of terminal format
        #[arg(long)]
        json: bool,
    },

    /// Parse a payload and write it back out
    ///
    /// Properties are emitted in sorted order. Undeclared properties are kept
    /// unless --ignore-additional-data is given.
    Normalize {
        /// Payload file (use "-" to read from stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Drop properties that no record declares
        #[arg(long)]
        ignore_additional_data: bool,
    },

    /// List every @odata.type the entity registry dispatches on
    Types {
        /// Output as JSON instead of terminal format
        #[arg(long)]
        json: bool,
    },

    /// List enum string tables
    Enums {
        /// Schema name of one enum (e.g. "pageLayoutType")
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Output as JSON instead of terminal format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("unknown enum '{0}' (run 'betasdk enums' to list them)")]
    UnknownEnum(String),
}

/// Read the whole input, treating "-" as stdin.
fn read_input(input: &Path) -> Result<String, CliError> {
    let path = input.display().to_string();
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read { path, source })?;
        return Ok(buffer);
    }
    std::fs::read_to_string(input).map_err(|source| CliError::Read { path, source })
}

fn parse_entity(input: &Path, config: SerializationConfig) -> Result<AnyEntity, CliError> {
    let payload = read_input(input)?;
    let entity: AnyEntity = from_json_str_with_config(&payload, config)?;
    debug!(
        type_name = entity.type_name(),
        input = %input.display(),
        "parsed payload"
    );
    Ok(entity)
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Inspect { input, json } => {
            let entity = parse_entity(&input, SerializationConfig::new())?;
            let report = InspectReport::new(&entity);
            if json {
                print_json(&report)?;
            } else {
                print_inspect_text(&report);
            }
        }
        Commands::Normalize {
            input,
            pretty,
            ignore_additional_data,
        } => {
            let mut config = SerializationConfig::new().pretty(pretty);
            if ignore_additional_data {
                config = config.ignore_additional_data();
            }
            let entity = parse_entity(&input, config)?;
            println!("{}", to_json_string_with_config(&entity, config)?);
        }
        Commands::Types { json } => {
            let discriminators = registered_discriminators();
            if json {
                print_json(&discriminators)?;
            } else {
                print_types_text(&discriminators);
            }
        }
        Commands::Enums { name, json } => {
            let mut tables = enum_tables();
            if let Some(name) = name {
                tables.retain(|table| table.name == name);
                if tables.is_empty() {
                    return Err(CliError::UnknownEnum(name));
                }
            }
            if json {
                print_json(&tables)?;
            } else {
                print_enum_tables_text(&tables);
            }
        }
    }
    Ok(())
}

/// Filter directives for a `-v` count. Library spans follow the binary.
fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,betasdk=info,betasdk_lib=info",
        2 => "info,betasdk=debug,betasdk_lib=debug",
        _ => "debug,betasdk=trace,betasdk_lib=trace",
    }
}

/// Logs go to stderr so `normalize` output stays pipeable.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let json_layer = json.then(|| fmt::layer().json().with_writer(io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .compact()
            .with_file(verbose >= 3)
            .with_line_number(verbose >= 3)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    info!("betasdk starting");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_verbosity_filter_parses() {
        for verbose in 0..=4 {
            assert!(EnvFilter::try_new(verbosity_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn extra_flags_saturate_at_trace() {
        assert_eq!(verbosity_filter(3), verbosity_filter(u8::MAX));
        assert!(verbosity_filter(3).contains("betasdk_lib=trace"));
    }

    #[test]
    fn quiet_by_default() {
        assert_eq!(verbosity_filter(0), "warn");
    }
}
