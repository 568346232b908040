//! # Golden Tests
//!
//! These tests ensure that labels, stored templates and recall jobs produce
//! byte-exact ZPL.
//!
//! ## Test Coverage
//!
//! - **Builder tests**: labels and templates built through the Rust API.
//! - **Document tests**: JSON fixtures from `src/fixtures` compiled through
//!   [`LabelDocument`].
//!
//! ## Regenerating Golden Files
//!
//! To regenerate all golden files:
//! ```bash
//! cargo test generate_golden_files -- --ignored --nocapture
//! ```

use pretty_assertions::assert_eq;
use std::fs;

use zpl_label::builder::{
    BarcodeOptions, Label, LabelConfig, Pdf417Options, Recall, SymbolOptions, SymbolSize,
    Template, TemplateConfig, TextOptions,
};
use zpl_label::document::LabelDocument;
use zpl_label::printer::Orientation;
use zpl_label::ZplError;

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

/// JSON fixture: a stored shipping format with every variable field kind.
const SHIPPING_TEMPLATE_JSON: &str = include_str!("../src/fixtures/shipping-template.json");

/// JSON fixture: a landscape, inverted product label at 300 dpi.
const PRODUCT_LABEL_JSON: &str = include_str!("../src/fixtures/product-label.json");

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// The reference label: home, border, text and barcode at 203 dpi.
fn build_simple_label() -> String {
    let mut label = Label::new(LabelConfig::default()).unwrap();
    label.home_position(30.0, 30.0);
    label.draw_border(0.0, 0.0, 400.0, 300.0);
    label.text_field("ZEBRA", 10.0, 10.0, TextOptions::default());
    label.bar_code_39("ZEBRA", 10.0, 30.0, BarcodeOptions::default());
    label.to_zpl()
}

fn build_document(json: &str) -> String {
    LabelDocument::from_json(json)
        .expect("Invalid fixture JSON")
        .build()
        .expect("Fixture failed to build")
}

/// The recall job matching the shipping template's six fields.
fn build_shipping_recall() -> String {
    Recall::new("SHIPPING")
        .unwrap()
        .field(1, "ACME Corp")
        .field(2, "123 Main St")
        .field(3, "1Z999")
        .field(4, "PO-4471")
        .field(5, "https://example.com/t/1Z999")
        .field(6, "1Z999")
        .quantity(2)
        .to_zpl()
}

/// Write ZPL to a golden file
fn write_golden(name: &str, zpl: &str) {
    let path = format!("{}/{}.zpl", GOLDEN_DIR, name);
    fs::write(&path, zpl).unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
    println!("Wrote {} ({} bytes)", path, zpl.len());
}

/// Compare ZPL against a golden file
fn check_golden(name: &str, zpl: &str) {
    let path = format!("{}/{}.zpl", GOLDEN_DIR, name);
    let golden = fs::read_to_string(&path).unwrap_or_else(|_| {
        panic!(
            "Golden file not found: {}. Run `cargo test generate_golden_files -- --ignored` to generate.",
            path
        )
    });

    assert_eq!(zpl, golden.trim_end(), "Golden file mismatch for {}", path);
}

// ============================================================================
// GOLDEN FILE GENERATOR
// ============================================================================

/// Generate all golden files.
/// Run with: cargo test generate_golden_files -- --ignored --nocapture
#[test]
#[ignore]
fn generate_golden_files() {
    write_golden("simple_label", &build_simple_label());
    write_golden("shipping_template", &build_document(SHIPPING_TEMPLATE_JSON));
    write_golden("shipping_recall", &build_shipping_recall());
    write_golden("product_label", &build_document(PRODUCT_LABEL_JSON));
}

// ============================================================================
// GOLDEN FILES
// ============================================================================

#[test]
fn test_golden_simple_label() {
    check_golden("simple_label", &build_simple_label());
}

#[test]
fn test_golden_shipping_template() {
    check_golden("shipping_template", &build_document(SHIPPING_TEMPLATE_JSON));
}

#[test]
fn test_golden_shipping_recall() {
    check_golden("shipping_recall", &build_shipping_recall());
}

#[test]
fn test_golden_product_label() {
    check_golden("product_label", &build_document(PRODUCT_LABEL_JSON));
}

// ============================================================================
// LABELS
// ============================================================================

#[test]
fn test_empty_label() {
    let label = Label::new(LabelConfig::default()).unwrap();
    assert_eq!(label.to_zpl(), "^XA^PQ1^XZ");
}

#[test]
fn test_simple_label_exact() {
    assert_eq!(
        build_simple_label(),
        "^XA^LH30,30^FO0,0^GB81200,60900,1^FS^FO2030,2030^A0B,20,20^FDZEBRA^FS^FO2030,6090^B3N,Y,20,N,N^FDZEBRA^FS^PQ1^XZ"
    );
}

#[test]
fn test_label_serialization_is_idempotent() {
    let mut label = Label::new(LabelConfig::default()).unwrap();
    label.text_field("A", 1.0, 1.0, TextOptions::default());
    assert_eq!(label.to_zpl(), label.to_zpl());
}

#[test]
fn test_builder_matches_document() {
    let json = r#"{
        "home": [30, 30],
        "fields": [
            {"type": "border", "x": 0, "y": 0, "width": 400, "height": 300},
            {"type": "text", "content": "ZEBRA", "x": 10, "y": 10},
            {"type": "code39", "content": "ZEBRA", "x": 10, "y": 30}
        ]
    }"#;
    assert_eq!(build_document(json), build_simple_label());
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn test_template_ids_dense_across_kinds() {
    let mut template = Template::new("MIX", TemplateConfig::default()).unwrap();
    let mut ids = Vec::new();
    for round in 0..3 {
        let y = f64::from(round);
        ids.push(template.variable_qr_code(0.0, y, SymbolOptions::default()));
        ids.push(template.variable_text_field(0.0, y, TextOptions::default()));
        ids.push(template.variable_bar_code_pdf417(0.0, y, Pdf417Options::default()));
        ids.push(template.variable_data_matrix(0.0, y, SymbolOptions::default()));
        ids.push(template.variable_bar_code_39(0.0, y, BarcodeOptions::default()));
    }
    assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
    assert_eq!(template.program().field_numbers(), ids);
}

#[test]
fn test_templates_number_independently() {
    let mut first = Template::new("A", TemplateConfig::default()).unwrap();
    let mut second = Template::new("B", TemplateConfig::default()).unwrap();
    first.variable_text_field(0.0, 0.0, TextOptions::default());
    first.variable_text_field(0.0, 0.0, TextOptions::default());
    assert_eq!(second.variable_text_field(0.0, 0.0, TextOptions::default()), 1);
}

#[test]
fn test_blank_template_name_is_an_error_not_a_panic() {
    assert!(matches!(
        Template::new("", TemplateConfig::default()),
        Err(ZplError::BlankTemplateName)
    ));
    assert!(matches!(
        Template::new("   ", TemplateConfig::default()),
        Err(ZplError::BlankTemplateName)
    ));
}

#[test]
fn test_template_serialization_is_idempotent() {
    let mut template = Template::new("T", TemplateConfig::default()).unwrap();
    template.variable_data_matrix(0.5, 0.5, SymbolOptions::default().size(SymbolSize::Large));
    let first = template.to_zpl();
    assert_eq!(template.to_zpl(), first);
    assert_eq!(template.variable_field_count(), 1);
}

#[test]
fn test_landscape_template_round_trip_with_recall() {
    let config = TemplateConfig {
        orientation: Orientation::Landscape,
        height: Some(2.0),
        width: Some(3.0),
        ..Default::default()
    };
    let mut template = Template::new("BIN", config).unwrap();
    let location = template.variable_text_field(0.1, 0.1, TextOptions::default().landscape());
    let code = template.variable_data_matrix(0.1, 0.5, SymbolOptions::default());

    let recall = template
        .recall()
        .field(location, "A-01-03")
        .field(code, "BIN-A0103");

    assert_eq!(
        template.finish(),
        "^XA^LL406^PW609^FWB^DFBIN^FS^FO20,20^A0N,20,20^FN1^FS^FO20,101^BXB,20,200^FN2^FS^XZ"
    );
    assert_eq!(
        recall.to_zpl(),
        "^XA^XFBIN^FS^FN1^FDA-01-03^FS^FN2^FDBIN-A0103^FS^PQ1^XZ"
    );
}

// ============================================================================
// LENIENT COORDINATES
// ============================================================================

#[test]
fn test_non_numeric_coordinates_behave_as_zero() {
    let mut bad = Template::new("T", TemplateConfig::default()).unwrap();
    let mut zero = Template::new("T", TemplateConfig::default()).unwrap();

    bad.variable_text_field(f64::NAN, 1.0, TextOptions::default());
    bad.variable_bar_code_39(1.0, f64::INFINITY, BarcodeOptions::default());
    zero.variable_text_field(0.0, 1.0, TextOptions::default());
    zero.variable_bar_code_39(1.0, 0.0, BarcodeOptions::default());

    assert_eq!(bad.to_zpl(), zero.to_zpl());
}

#[test]
fn test_non_numeric_json_coordinates_behave_as_zero() {
    let bad = r#"{"template": {"name": "T"}, "fields": [
        {"type": "variable_qr", "x": "abc", "y": true},
        {"type": "border", "x": {}, "y": [1], "width": 1, "height": "tall"}
    ]}"#;
    let zero = r#"{"template": {"name": "T"}, "fields": [
        {"type": "variable_qr", "x": 0, "y": 0},
        {"type": "border", "x": 0, "y": 0, "width": 1, "height": 0}
    ]}"#;
    assert_eq!(build_document(bad), build_document(zero));
}
