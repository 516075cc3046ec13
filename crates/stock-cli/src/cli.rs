//! CLI argument definitions for SmartStock.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use stock_cli::prefs::Theme;

#[derive(Parser)]
#[command(
    name = "smartstock",
    version,
    about = "SmartStock - Track product stock levels from the command line",
    long_about = "Track products, stock counts, and low-stock alerts.\n\n\
                  Product data lives in a single JSON file; CSV backups can\n\
                  be exported and restored at any time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the product data file.
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "smartstock.json",
        global = true
    )]
    pub data_file: PathBuf,

    /// Path to the preferences file.
    #[arg(
        long = "prefs-file",
        value_name = "PATH",
        default_value = "smartstock_prefs.json",
        global = true
    )]
    pub prefs_file: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List products, optionally filtered by name or barcode.
    List(ListArgs),

    /// Show one product.
    Show(ShowArgs),

    /// Add a new product.
    Add(AddArgs),

    /// Update fields on an existing product.
    Update(UpdateArgs),

    /// Increase or decrease a product's stock count.
    Adjust(AdjustArgs),

    /// Delete a product.
    Delete(DeleteArgs),

    /// Look up a scanned barcode.
    Scan(ScanArgs),

    /// Show inventory totals, low-stock alerts, and top stock levels.
    Stats,

    /// Export all products to a CSV backup file.
    Backup(BackupArgs),

    /// Replace all products with the contents of a CSV backup file.
    Restore(RestoreArgs),

    /// Delete all product data.
    Clear(ClearArgs),

    /// Read or change preferences.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Show only products whose name or barcode contains this term.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Display name for the product.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Initial stock count.
    #[arg(long = "stock", value_name = "N", default_value_t = 0)]
    pub stock: u32,

    /// Low-stock threshold.
    #[arg(long = "min-stock", value_name = "N", default_value_t = 0)]
    pub min_stock: u32,

    /// Barcode for scanner lookup.
    #[arg(long = "barcode", value_name = "CODE", default_value = "")]
    pub barcode: String,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// New display name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// New stock count.
    #[arg(long = "stock", value_name = "N")]
    pub stock: Option<u32>,

    /// New low-stock threshold.
    #[arg(long = "min-stock", value_name = "N")]
    pub min_stock: Option<u32>,

    /// New barcode.
    #[arg(long = "barcode", value_name = "CODE")]
    pub barcode: Option<String>,
}

#[derive(Parser)]
pub struct AdjustArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Stock change; negative values consume stock and clamp at zero.
    #[arg(value_name = "DELTA", allow_negative_numbers = true)]
    pub delta: i64,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// The decoded barcode text.
    #[arg(value_name = "BARCODE")]
    pub barcode: String,
}

#[derive(Parser)]
pub struct BackupArgs {
    /// Output file (default: smartstock_backup_<date>.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RestoreArgs {
    /// CSV backup file to restore from.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Apply the restore without asking again.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ClearArgs {
    /// Delete without asking again.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Set the display theme.
    #[arg(long = "theme", value_enum, value_name = "THEME")]
    pub theme: Option<Theme>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
