use std::cmp::Ordering;

use addon_versions::version::{compare_versions, supports_app_version, version_dict, version_int};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "addon-versions")]
#[command(version, about = "Compare add-on version strings and encode application versions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two version strings
    Compare { a: String, b: String },
    /// Encode an application version as its sortable integer
    Encode { version: String },
    /// Dump the parsed application version fields as JSON
    Fields { version: String },
    /// Sort version strings, oldest first
    Sort { versions: Vec<String> },
    /// Check whether a min/max application range covers a version
    Supports {
        min: String,
        max: String,
        app_version: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Compare { a, b } => {
            let symbol = match compare_versions(&a, &b) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{a} {symbol} {b}");
        }
        Command::Encode { version } => println!("{}", version_int(&version)),
        Command::Fields { version } => {
            println!("{}", serde_json::to_string_pretty(&version_dict(&version))?);
        }
        Command::Sort { mut versions } => {
            versions.sort_by(|a, b| compare_versions(a, b));
            for version in versions {
                println!("{version}");
            }
        }
        Command::Supports {
            min,
            max,
            app_version,
        } => println!("{}", supports_app_version(&min, &max, &app_version)),
    }
    Ok(())
}
