//! SmartStock CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use stock_cli::commands::{self, ProductChanges};
use stock_cli::logging::{LogConfig, LogFormat, init_logging};
use stock_model::ProductDraft;
use stock_store::StoreError;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let data_file = cli.data_file;
    let prefs_file = cli.prefs_file;
    let result: anyhow::Result<i32> = match cli.command {
        Command::List(args) => {
            commands::run_list(&data_file, args.search.as_deref()).map(|()| 0)
        }
        Command::Show(args) => {
            commands::run_show(&data_file, &args.id).map(|found| i32::from(!found))
        }
        Command::Add(args) => {
            let draft = ProductDraft {
                name: args.name,
                stock: args.stock,
                min_stock: args.min_stock,
                barcode: args.barcode,
            };
            commands::run_add(&data_file, draft).map(|_| 0)
        }
        Command::Update(args) => {
            let changes = ProductChanges {
                name: args.name,
                stock: args.stock,
                min_stock: args.min_stock,
                barcode: args.barcode,
            };
            commands::run_update(&data_file, &args.id, changes).map(|()| 0)
        }
        Command::Adjust(args) => {
            commands::run_adjust(&data_file, &args.id, args.delta).map(|()| 0)
        }
        Command::Delete(args) => commands::run_delete(&data_file, &args.id).map(|()| 0),
        Command::Scan(args) => commands::run_scan(&data_file, &args.barcode).map(|()| 0),
        Command::Stats => commands::run_stats(&data_file).map(|()| 0),
        Command::Backup(args) => commands::run_backup(&data_file, args.output).map(|_| 0),
        Command::Restore(args) => {
            commands::run_restore(&data_file, &args.file, args.yes).map(|()| 0)
        }
        Command::Clear(args) => commands::run_clear(&data_file, args.yes).map(|()| 0),
        Command::Config(args) => commands::run_config(&prefs_file, args.theme).map(|()| 0),
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            // Storage failures get the friendlier store wording
            if let Some(store_error) = error.downcast_ref::<StoreError>() {
                eprintln!("error: {}", store_error.user_message());
            } else {
                eprintln!("error: {error:#}");
            }
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
