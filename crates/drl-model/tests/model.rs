//! Tests for drl-model types.

use drl_model::{Condition, GeneratorOptions, RuleField, RuleRecord, Variant};

#[test]
fn variant_serializes_as_snake_case() {
    let json = serde_json::to_string(&Variant::OrderWorkflow).expect("serialize variant");
    assert_eq!(json, "\"order_workflow\"");
    let round: Variant = serde_json::from_str("\"draft_workflow\"").expect("deserialize variant");
    assert_eq!(round, Variant::DraftWorkflow);
}

#[test]
fn options_fill_missing_package_from_default() {
    let options: GeneratorOptions = serde_json::from_str("{}").expect("deserialize options");
    assert_eq!(options.package, "com.order.rules");
}

#[test]
fn record_round_trips_through_json() {
    let record = RuleRecord {
        row_index: 7,
        circle: "\"A\",\"B\"".to_string(),
        rule_key: "KEY".to_string(),
        workflow_name: "WF".to_string(),
        workflow_version: "2.0".to_string(),
        channel: Some("\"APP\"".to_string()),
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: RuleRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn order_template_tests_channel_first() {
    let template = Variant::OrderWorkflow.template();
    assert_eq!(template.rule_name, "Rule Config");
    assert_eq!(template.fact_type, "WorkflowParams");
    assert_eq!(
        template.conditions,
        &[
            Condition::Within(RuleField::Channel),
            Condition::Within(RuleField::Circle),
            Condition::Equals(RuleField::RuleKey),
        ]
    );
}

#[test]
fn draft_template_has_no_channel() {
    let template = Variant::DraftWorkflow.template();
    assert_eq!(template.rule_name, "Draft Rule Config");
    assert_eq!(template.fact_type, "DraftWorkflowParams");
    assert!(!template.required.contains(&RuleField::Channel));
}
