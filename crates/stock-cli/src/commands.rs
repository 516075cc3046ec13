//! Command implementations.
//!
//! Every command opens the store fresh over the data file, performs its
//! operation, and prints the outcome. Destructive commands (`restore`,
//! `clear`) take an explicit confirmation flag; the store itself performs
//! them unconditionally once called.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use stock_backup::{read_backup_file, write_backup_file};
use stock_model::{Product, ProductDraft};
use stock_report::search;
use stock_store::{JsonFileBackend, ProductStore};

use crate::prefs::{Theme, load_preferences, save_preferences};
use crate::summary::{print_product, print_product_table, print_stats};

/// Field overrides for `update`; unset fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub barcode: Option<String>,
}

fn open_store(data_file: &Path) -> ProductStore<JsonFileBackend> {
    ProductStore::open(JsonFileBackend::new(data_file))
}

pub fn run_list(data_file: &Path, term: Option<&str>) -> Result<()> {
    let store = open_store(data_file);
    let products: Vec<&Product> = match term {
        Some(term) => search(store.products(), term),
        None => store.products().iter().collect(),
    };
    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }
    print_product_table(&products);
    Ok(())
}

/// Returns false when the id is unknown, so the caller can exit non-zero.
pub fn run_show(data_file: &Path, id: &str) -> Result<bool> {
    let store = open_store(data_file);
    match store.get_by_id(id) {
        Some(product) => {
            print_product(product);
            Ok(true)
        }
        None => {
            println!("No product with id {id:?}.");
            Ok(false)
        }
    }
}

pub fn run_add(data_file: &Path, draft: ProductDraft) -> Result<Product> {
    if draft.name.trim().is_empty() {
        bail!("product name is required");
    }
    let mut store = open_store(data_file);
    let product = store.add(draft).context("add product")?;
    info!(id = %product.id, "added product");
    println!("Added {:?} with id {}.", product.name, product.id);
    Ok(product)
}

pub fn run_update(data_file: &Path, id: &str, changes: ProductChanges) -> Result<()> {
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            bail!("product name is required");
        }
    }
    let mut store = open_store(data_file);
    let Some(existing) = store.get_by_id(id) else {
        println!("No product with id {id:?}; nothing to update.");
        return Ok(());
    };
    let mut product = existing.clone();
    if let Some(name) = changes.name {
        product.name = name;
    }
    if let Some(stock) = changes.stock {
        product.stock = stock;
    }
    if let Some(min_stock) = changes.min_stock {
        product.min_stock = min_stock;
    }
    if let Some(barcode) = changes.barcode {
        product.barcode = barcode;
    }
    store.update(product).context("update product")?;
    println!("Updated product {id}.");
    Ok(())
}

pub fn run_adjust(data_file: &Path, id: &str, delta: i64) -> Result<()> {
    let mut store = open_store(data_file);
    match store.adjust_stock(id, delta).context("adjust stock")? {
        Some(product) => {
            println!("{} now has {} in stock.", product.name, product.stock);
            if product.is_low_stock() {
                println!(
                    "Warning: stock is at or below the minimum of {}.",
                    product.min_stock
                );
            }
            Ok(())
        }
        None => {
            println!("No product with id {id:?}; nothing to adjust.");
            Ok(())
        }
    }
}

pub fn run_delete(data_file: &Path, id: &str) -> Result<()> {
    let mut store = open_store(data_file);
    if store.delete(id).context("delete product")? {
        println!("Deleted product {id}.");
    } else {
        println!("No product with id {id:?}; nothing to delete.");
    }
    Ok(())
}

/// Route a scanned barcode: a known code shows the product to edit, an
/// unknown one suggests creating it with the barcode prefilled.
pub fn run_scan(data_file: &Path, barcode: &str) -> Result<()> {
    let store = open_store(data_file);
    match store.get_by_barcode(barcode) {
        Some(product) => {
            println!("Barcode {barcode} is {:?} (id {}).", product.name, product.id);
            print_product(product);
            println!();
            println!("Edit with: smartstock update {} --stock <N>", product.id);
        }
        None => {
            println!("Barcode {barcode} is not in the inventory.");
            println!("Create it with: smartstock add --name <NAME> --barcode {barcode}");
        }
    }
    Ok(())
}

pub fn run_stats(data_file: &Path) -> Result<()> {
    let store = open_store(data_file);
    print_stats(store.products());
    Ok(())
}

/// Returns the path the backup was written to, or `None` for an empty store.
pub fn run_backup(data_file: &Path, output: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let store = open_store(data_file);
    if store.products().is_empty() {
        println!("No products to back up.");
        return Ok(None);
    }
    let path = output.unwrap_or_else(default_backup_path);
    write_backup_file(store.products(), &path).context("write backup")?;
    info!(count = store.products().len(), "backup written");
    println!(
        "Backed up {} products to {}.",
        store.products().len(),
        path.display()
    );
    Ok(Some(path))
}

pub fn run_restore(data_file: &Path, file: &Path, yes: bool) -> Result<()> {
    // Validate the whole file before touching the store
    let products = read_backup_file(file).context("read backup")?;
    if !yes {
        println!(
            "Found {} products in {}. This will overwrite all current data.",
            products.len(),
            file.display()
        );
        println!("Re-run with --yes to continue.");
        return Ok(());
    }
    let count = products.len();
    let mut store = open_store(data_file);
    store.import_all(products).context("restore backup")?;
    info!(count, "restore applied");
    println!("Restored {count} products.");
    Ok(())
}

pub fn run_clear(data_file: &Path, yes: bool) -> Result<()> {
    if !yes {
        println!("This permanently deletes all product data.");
        println!("Re-run with --yes to continue.");
        return Ok(());
    }
    let mut store = open_store(data_file);
    store.clear_all().context("clear products")?;
    println!("All product data has been cleared.");
    Ok(())
}

pub fn run_config(prefs_file: &Path, theme: Option<Theme>) -> Result<()> {
    let mut prefs = load_preferences(prefs_file);
    match theme {
        Some(theme) => {
            prefs.theme = theme;
            save_preferences(prefs_file, &prefs)?;
            println!("Theme set to {theme}.");
        }
        None => {
            println!("theme = {}", prefs.theme);
        }
    }
    Ok(())
}

/// `smartstock_backup_<date>.csv` in the current directory; the date is a
/// naming convention only and carries no meaning to the codec.
fn default_backup_path() -> PathBuf {
    PathBuf::from(format!(
        "smartstock_backup_{}.csv",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}
