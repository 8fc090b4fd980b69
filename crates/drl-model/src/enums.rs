//! Type-safe enumerations for rule spreadsheets.
//!
//! Spreadsheet layouts are identified by [`Variant`] and the columns they
//! carry by [`RuleField`]. Both are closed so every layout is handled
//! exhaustively instead of by comparing free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::template::{DRAFT_WORKFLOW_TEMPLATE, ORDER_WORKFLOW_TEMPLATE, RuleTemplate};

/// A column of a rule spreadsheet.
///
/// Each field knows the header label it is authored under and the fact
/// property it is matched against or written to in the generated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleField {
    /// Routing circle(s), a pre-formatted multi-value expression.
    Circle,
    /// Lookup key the rule is selected by.
    RuleKey,
    /// Workflow assigned when the rule fires.
    WorkflowName,
    /// Version of the assigned workflow.
    WorkflowVersion,
    /// Order channel(s), a pre-formatted multi-value expression.
    Channel,
}

impl RuleField {
    /// Returns the header label as authored in the spreadsheet.
    pub fn label(&self) -> &'static str {
        match self {
            RuleField::Circle => "Circle",
            RuleField::RuleKey => "Rule Key",
            RuleField::WorkflowName => "Workflow Name",
            RuleField::WorkflowVersion => "Workflow Version",
            RuleField::Channel => "Channel",
        }
    }

    /// Returns the fact property name used in rule conditions.
    pub fn property(&self) -> &'static str {
        match self {
            RuleField::Circle => "circle",
            RuleField::RuleKey => "ruleKey",
            RuleField::WorkflowName => "workflowName",
            RuleField::WorkflowVersion => "workflowVersion",
            RuleField::Channel => "channel",
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Spreadsheet layout and the rule template it renders into.
///
/// The variant is chosen by the caller for a whole conversion and never
/// changes while a document is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Draft workflow rules, matched on circle and rule key.
    DraftWorkflow,
    /// Order workflow rules, matched on channel, circle and rule key.
    OrderWorkflow,
}

impl Variant {
    /// All supported variants, in display order.
    pub const ALL: [Variant; 2] = [Variant::DraftWorkflow, Variant::OrderWorkflow];

    /// Returns the short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::DraftWorkflow => "draft",
            Variant::OrderWorkflow => "order",
        }
    }

    /// Returns the rule template rendered for this variant.
    pub fn template(&self) -> &'static RuleTemplate {
        match self {
            Variant::DraftWorkflow => &DRAFT_WORKFLOW_TEMPLATE,
            Variant::OrderWorkflow => &ORDER_WORKFLOW_TEMPLATE,
        }
    }

    /// Returns the fields that must be present in the header row.
    pub fn required_fields(&self) -> &'static [RuleField] {
        self.template().required
    }

    /// Returns the header labels that must be present in the header row.
    pub fn required_headers(&self) -> Vec<&'static str> {
        self.required_fields()
            .iter()
            .map(RuleField::label)
            .collect()
    }

    /// Returns the unqualified fact type name.
    pub fn fact_type(&self) -> &'static str {
        self.template().fact_type
    }

    /// Returns true if rows of this variant carry a channel value.
    pub fn reads_channel(&self) -> bool {
        self.required_fields().contains(&RuleField::Channel)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ModelError;

    /// Accepts the short names and the fact type names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "draft" | "draftworkflow" | "draftworkflowparams" => Ok(Variant::DraftWorkflow),
            "order" | "orderworkflow" | "workflowparams" => Ok(Variant::OrderWorkflow),
            _ => Err(ModelError::UnknownVariant {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_headers_by_variant() {
        assert_eq!(
            Variant::DraftWorkflow.required_headers(),
            vec!["Circle", "Rule Key", "Workflow Name", "Workflow Version"]
        );
        assert_eq!(
            Variant::OrderWorkflow.required_headers(),
            vec![
                "Circle",
                "Rule Key",
                "Workflow Name",
                "Workflow Version",
                "Channel"
            ]
        );
    }

    #[test]
    fn test_reads_channel() {
        assert!(!Variant::DraftWorkflow.reads_channel());
        assert!(Variant::OrderWorkflow.reads_channel());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("draft".parse::<Variant>().unwrap(), Variant::DraftWorkflow);
        assert_eq!(
            "DraftWorkflowParams".parse::<Variant>().unwrap(),
            Variant::DraftWorkflow
        );
        assert_eq!(" Order ".parse::<Variant>().unwrap(), Variant::OrderWorkflow);
        assert_eq!(
            "workflowparams".parse::<Variant>().unwrap(),
            Variant::OrderWorkflow
        );
        assert!("invoice".parse::<Variant>().is_err());
    }

    #[test]
    fn test_field_property_names() {
        assert_eq!(RuleField::RuleKey.property(), "ruleKey");
        assert_eq!(RuleField::WorkflowVersion.label(), "Workflow Version");
    }
}
