//! Backup parsing.

use std::fs::File;
use std::io;
use std::path::Path;

use stock_model::Product;
use tracing::warn;

use crate::BACKUP_HEADER;
use crate::error::{BackupError, Result};

/// Column positions resolved from the header row.
struct ColumnMap {
    id: usize,
    name: usize,
    stock: usize,
    min_stock: usize,
    barcode: usize,
}

/// Parse a CSV backup into a product collection.
///
/// The header row maps column names to positions; columns may appear in any
/// order, but all five must be declared. Blank lines are skipped. A declared
/// column with no value on a row gets a fixed placeholder: the empty string
/// for text columns, `0` for the numeric ones. Any other non-numeric text in
/// `stock` or `minStock` fails the parse.
///
/// The whole file is validated before this returns; on error nothing is
/// produced, so a restore is never partially applied.
pub fn parse_backup<R: io::Read>(reader: R) -> Result<Vec<Product>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| BackupError::Malformed { line: 1, source: e })?
        .clone();
    if headers.iter().all(|h| normalize_header(h).is_empty()) {
        return Err(BackupError::MissingHeader);
    }
    let columns = resolve_columns(&headers)?;

    let mut products = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| BackupError::Malformed {
            line: e.position().map_or(0, csv::Position::line),
            source: e,
        })?;
        // A line of separators or whitespace is blank, not a product
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let stock = parse_count(&record, columns.stock, "stock", line)?;
        let min_stock = parse_count(&record, columns.min_stock, "minStock", line)?;
        products.push(Product {
            id: text_field(&record, columns.id),
            name: text_field(&record, columns.name),
            stock,
            min_stock,
            barcode: text_field(&record, columns.barcode),
        });
    }
    Ok(products)
}

/// Read and parse a CSV backup file.
pub fn read_backup_file(path: &Path) -> Result<Vec<Product>> {
    let file = File::open(path).map_err(|e| BackupError::Io {
        operation: "open",
        path: path.to_path_buf(),
        source: e,
    })?;
    let products = parse_backup(file)?;
    tracing::debug!(
        count = products.len(),
        "parsed backup from {}",
        path.display()
    );
    Ok(products)
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_start_matches('\u{feff}')
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    for header in headers.iter() {
        let cleaned = normalize_header(header);
        if !cleaned.is_empty() && !BACKUP_HEADER.contains(&cleaned) {
            warn!("ignoring unknown backup column {cleaned:?}");
        }
    }
    let position = |column: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| normalize_header(h) == column)
            .ok_or(BackupError::MissingColumn { column })
    };
    Ok(ColumnMap {
        id: position("id")?,
        name: position("name")?,
        stock: position("stock")?,
        min_stock: position("minStock")?,
        barcode: position("barcode")?,
    })
}

/// Missing text values read as the empty string.
fn text_field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

/// Missing or empty numeric values read as 0; anything else must parse as a
/// non-negative integer.
fn parse_count(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: u64,
) -> Result<u32> {
    let raw = record.get(index).unwrap_or_default();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| BackupError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}
