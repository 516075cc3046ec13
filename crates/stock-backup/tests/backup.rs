//! Backup codec behavior tests.

use stock_backup::{
    BackupError, parse_backup, read_backup_file, render_backup, write_backup_file,
};
use stock_model::Product;
use tempfile::tempdir;

fn widget() -> Product {
    Product {
        id: "1".to_string(),
        name: "Widget".to_string(),
        stock: 5,
        min_stock: 10,
        barcode: "111".to_string(),
    }
}

fn gadget() -> Product {
    Product {
        id: "2".to_string(),
        name: "Gadget".to_string(),
        stock: 20,
        min_stock: 5,
        barcode: "222".to_string(),
    }
}

#[test]
fn export_renders_fixed_header_and_one_row_per_product() {
    let text = render_backup(&[widget(), gadget()]).unwrap();
    insta::assert_snapshot!(text, @r"
    id,name,stock,minStock,barcode
    1,Widget,5,10,111
    2,Gadget,20,5,222
    ");
}

#[test]
fn export_of_empty_collection_is_header_only() {
    let text = render_backup(&[]).unwrap();
    assert_eq!(text, "id,name,stock,minStock,barcode\n");
}

#[test]
fn export_quotes_fields_containing_the_delimiter() {
    let mut product = widget();
    product.name = "Nuts, assorted".to_string();

    let text = render_backup(&[product]).unwrap();
    assert!(text.contains("\"Nuts, assorted\""));
}

#[test]
fn import_round_trips_the_export_ids_included() {
    let original = vec![widget(), gadget()];
    let text = render_backup(&original).unwrap();

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn import_maps_columns_by_header_name_not_position() {
    let text = "barcode,minStock,name,stock,id\n111,10,Widget,5,1\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, vec![widget()]);
}

#[test]
fn import_skips_blank_lines() {
    let text = "id,name,stock,minStock,barcode\n1,Widget,5,10,111\n\n   \n,,,,\n\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, vec![widget()]);
}

#[test]
fn short_rows_fill_missing_values_with_placeholders() {
    let text = "id,name,stock,minStock,barcode\n3,Bolt\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(
        parsed,
        vec![Product {
            id: "3".to_string(),
            name: "Bolt".to_string(),
            stock: 0,
            min_stock: 0,
            barcode: String::new(),
        }]
    );
}

#[test]
fn empty_numeric_cells_read_as_zero() {
    let text = "id,name,stock,minStock,barcode\n3,Bolt,,,999\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed[0].stock, 0);
    assert_eq!(parsed[0].min_stock, 0);
    assert_eq!(parsed[0].barcode, "999");
}

#[test]
fn non_numeric_stock_fails_with_line_and_column() {
    let text = "id,name,stock,minStock,barcode\nabc,Widget,notanumber,10,111\n";

    let error = parse_backup(text.as_bytes()).unwrap_err();
    match error {
        BackupError::InvalidNumber {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, "stock");
            assert_eq!(value, "notanumber");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn negative_counts_are_rejected() {
    let text = "id,name,stock,minStock,barcode\n1,Widget,-4,10,111\n";

    let error = parse_backup(text.as_bytes()).unwrap_err();
    assert!(matches!(error, BackupError::InvalidNumber { line: 2, .. }));
}

#[test]
fn a_bad_row_fails_the_whole_parse() {
    let text = "id,name,stock,minStock,barcode\n1,Widget,5,10,111\n2,Gadget,oops,5,222\n";

    // No partial collection comes back; the single error is the whole result
    let result = parse_backup(text.as_bytes());
    assert!(matches!(
        result,
        Err(BackupError::InvalidNumber { line: 3, .. })
    ));
}

#[test]
fn missing_required_column_is_an_error() {
    let text = "id,name,stock,minStock\n1,Widget,5,10\n";

    let error = parse_backup(text.as_bytes()).unwrap_err();
    assert!(matches!(
        error,
        BackupError::MissingColumn { column: "barcode" }
    ));
}

#[test]
fn empty_input_has_no_header() {
    let error = parse_backup("".as_bytes()).unwrap_err();
    assert!(matches!(error, BackupError::MissingHeader));
}

#[test]
fn unknown_columns_are_ignored() {
    let text = "id,name,stock,minStock,barcode,supplier\n1,Widget,5,10,111,Acme\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, vec![widget()]);
}

#[test]
fn header_with_byte_order_mark_still_resolves() {
    let text = "\u{feff}id,name,stock,minStock,barcode\n1,Widget,5,10,111\n";

    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, vec![widget()]);
}

#[test]
fn file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.csv");

    let original = vec![widget(), gadget()];
    write_backup_file(&original, &path).unwrap();
    let parsed = read_backup_file(&path).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn missing_backup_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let error = read_backup_file(&path).unwrap_err();
    assert!(matches!(error, BackupError::Io { operation: "open", .. }));
}

#[test]
fn quoted_fields_with_commas_quotes_and_newlines_round_trip() {
    let awkward = Product {
        id: "9".to_string(),
        name: "Nuts, \"mixed\"\nfamily pack".to_string(),
        stock: 7,
        min_stock: 2,
        barcode: "00,11".to_string(),
    };

    let text = render_backup(&[awkward.clone()]).unwrap();
    let parsed = parse_backup(text.as_bytes()).unwrap();
    assert_eq!(parsed, vec![awkward]);
}
