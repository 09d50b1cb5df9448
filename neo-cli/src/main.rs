// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use neo_wallet::WalletSettings;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "neo-account", version, about = "Inspect a NEP-6 wallet account record")]
struct Cli {
    /// Path to the TOML wallet settings (address version and scrypt parameters).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `neo_wallet=trace`. Overrides `RUST_LOG`.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the account metadata without touching the key.
    Show {
        /// The account record (NEP-6 account JSON).
        record: PathBuf,
    },

    /// Checks a password against the encrypted key.
    Verify {
        record: PathBuf,

        #[arg(long, env = "NEO_ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Decrypts the key and prints the public account record.
    Export {
        record: PathBuf,

        #[arg(long, env = "NEO_ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Decrypts the key and prints every form of it, private key included.
    Dump {
        record: PathBuf,

        #[arg(long, env = "NEO_ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let settings = match &cli.config {
        Some(path) => commands::load_settings(path)?,
        None => WalletSettings::default(),
    };

    let output = match &cli.command {
        Command::Show { record } => commands::show::execute(record, &settings),
        Command::Verify { record, password } => {
            commands::verify::execute(record, password, &settings)
        }
        Command::Export { record, password } => {
            commands::export::execute(record, password, &settings)
        }
        Command::Dump { record, password } => commands::dump::execute(record, password, &settings),
    }?;

    println!("{output}");
    Ok(())
}

fn init_tracing(log_level: Option<&str>) {
    let env_filter = match log_level {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "neo-account",
            "--config",
            "wallet.toml",
            "verify",
            "account.json",
            "--password",
            "secret",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.config, Some(PathBuf::from("wallet.toml")));
        match cli.command {
            Command::Verify { record, password } => {
                assert_eq!(record, PathBuf::from("account.json"));
                assert_eq!(password, "secret");
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["neo-account", "show", "account.json", "--log-level", "debug"])
            .expect("global flags after the subcommand");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
