//! End-to-end tests on a real workbook file.
//!
//! `fixtures/order_workflow_rules.xlsx` holds a title in B1, the order
//! header row in B3:F3, data in row 4, an empty row 5 and a data row 6
//! whose workflow name is a formula.

use drl_core::{ConvertError, convert_workbook};
use drl_ingest::{Cell, load_first_sheet};
use drl_model::{GeneratorOptions, Variant};

const ORDER_WORKBOOK: &[u8] = include_bytes!("fixtures/order_workflow_rules.xlsx");

const EXPECTED_ORDER_DOCUMENT: &str = r#"package com.order.rules;

import com.order.rules.WorkflowParams;

// rule values at row 4
rule "Rule Config_3"
    when
        fact : com.order.rules.WorkflowParams(channel in (APP), circle in ("IN"), ruleKey == "R1")
    then
        fact.setWorkflowName("WF_A");
        fact.setWorkflowVersion("1.0");
end

// rule values at row 6
rule "Rule Config_5"
    when
        fact : com.order.rules.WorkflowParams(channel in (WEB), circle in ("EU","UK"), ruleKey == "R2")
    then
        fact.setWorkflowName("");
        fact.setWorkflowVersion("2.0");
end

"#;

#[test]
fn loaded_sheet_keeps_absolute_positions() {
    let sheet = load_first_sheet(ORDER_WORKBOOK).expect("load workbook");

    assert_eq!(sheet.name(), "Rules");
    assert_eq!(sheet.last_row_index(), Some(5));

    let header = sheet.row(2).expect("header row");
    assert!(header.cell(0).is_none());
    assert_eq!(header.cell(1), Some(&Cell::text("Circle")));
    assert_eq!(header.cell(5), Some(&Cell::text("Channel")));

    let data = sheet.row(3).expect("data row");
    assert_eq!(data.cell(4), Some(&Cell::Numeric(1.0)));
}

#[test]
fn formula_cells_are_detected() {
    let sheet = load_first_sheet(ORDER_WORKBOOK).expect("load workbook");
    let row = sheet.row(5).expect("formula row");
    assert!(matches!(row.cell(3), Some(Cell::Formula(_))));
    assert_eq!(row.cell(2), Some(&Cell::text("R2")));
}

#[test]
fn order_workbook_converts_to_reference_document() {
    let document = convert_workbook(
        ORDER_WORKBOOK,
        Variant::OrderWorkflow,
        &GeneratorOptions::default(),
    )
    .expect("convert workbook");

    assert_eq!(document.header_row, 2);
    assert_eq!(document.skipped_rows, vec![4]);
    assert_eq!(
        document
            .rules
            .iter()
            .map(|rule| rule.row_index)
            .collect::<Vec<_>>(),
        vec![3, 5]
    );
    assert_eq!(document.text(), EXPECTED_ORDER_DOCUMENT);
}

#[test]
fn conversion_is_deterministic() {
    let options = GeneratorOptions::default();
    let first = convert_workbook(ORDER_WORKBOOK, Variant::OrderWorkflow, &options)
        .expect("first conversion");
    let second = convert_workbook(ORDER_WORKBOOK, Variant::OrderWorkflow, &options)
        .expect("second conversion");
    assert_eq!(first.text(), second.text());
}

#[test]
fn truncated_workbook_is_malformed_input() {
    let truncated = &ORDER_WORKBOOK[..ORDER_WORKBOOK.len() / 2];
    let err = convert_workbook(truncated, Variant::OrderWorkflow, &GeneratorOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::MalformedInput { .. }));
}
