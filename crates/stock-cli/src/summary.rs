//! Table rendering for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stock_model::Product;
use stock_report::{StockTotals, low_stock, top_n_by_stock, totals};

/// Number of products shown in the stats ranking, as on the dashboard chart.
const TOP_STOCK_LIMIT: usize = 10;

pub fn print_product_table(products: &[&Product]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Stock"),
        header_cell("Min"),
        header_cell("Barcode"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for product in products {
        table.add_row(vec![
            Cell::new(&product.id),
            Cell::new(&product.name),
            Cell::new(product.stock),
            Cell::new(product.min_stock),
            Cell::new(&product.barcode),
            status_cell(product),
        ]);
    }
    println!("{table}");
}

pub fn print_product(product: &Product) {
    println!("id:        {}", product.id);
    println!("name:      {}", product.name);
    println!("stock:     {}", product.stock);
    println!("min stock: {}", product.min_stock);
    println!("barcode:   {}", product.barcode);
    if product.is_low_stock() {
        println!("status:    LOW STOCK");
    }
}

pub fn print_stats(products: &[Product]) {
    let StockTotals { count, total_stock } = totals(products);
    let alerts = low_stock(products);
    println!("Products:        {count}");
    println!("Total stock:     {total_stock}");
    println!("Low stock items: {}", alerts.len());

    if alerts.is_empty() {
        println!();
        println!("No low stock items.");
    } else {
        println!();
        println!("Low stock alerts:");
        print_product_table(&alerts);
    }

    let top = top_n_by_stock(products, TOP_STOCK_LIMIT);
    if !top.is_empty() {
        println!();
        println!("Top stock levels:");
        print_product_table(&top);
    }
}

fn status_cell(product: &Product) -> Cell {
    if product.is_low_stock() {
        Cell::new("LOW")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("ok").fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
