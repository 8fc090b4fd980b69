//! Rule templates carried by each [`Variant`](crate::Variant).
//!
//! A template is plain data: the rule name prefix, the fact type the rule
//! matches, the header fields a sheet must provide, and the conditions of
//! the `when` clause in output order.

use crate::enums::RuleField;

/// One test in the `when` clause of a generated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `<property> in (<value>)`; the value is a pre-formatted expression
    /// and is written unquoted.
    Within(RuleField),
    /// `<property> == "<value>"`.
    Equals(RuleField),
}

impl Condition {
    /// Returns the field this condition reads.
    pub fn field(&self) -> RuleField {
        match self {
            Condition::Within(field) | Condition::Equals(field) => *field,
        }
    }
}

/// Static description of how one variant renders a rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTemplate {
    /// Prefix of the rule name; the physical row index is appended.
    pub rule_name: &'static str,
    /// Unqualified fact type name.
    pub fact_type: &'static str,
    /// Header fields that must all be present in the header row.
    pub required: &'static [RuleField],
    /// Conditions of the `when` clause, in output order.
    pub conditions: &'static [Condition],
}

pub(crate) static DRAFT_WORKFLOW_TEMPLATE: RuleTemplate = RuleTemplate {
    rule_name: "Draft Rule Config",
    fact_type: "DraftWorkflowParams",
    required: &[
        RuleField::Circle,
        RuleField::RuleKey,
        RuleField::WorkflowName,
        RuleField::WorkflowVersion,
    ],
    conditions: &[
        Condition::Within(RuleField::Circle),
        Condition::Equals(RuleField::RuleKey),
    ],
};

pub(crate) static ORDER_WORKFLOW_TEMPLATE: RuleTemplate = RuleTemplate {
    rule_name: "Rule Config",
    fact_type: "WorkflowParams",
    required: &[
        RuleField::Circle,
        RuleField::RuleKey,
        RuleField::WorkflowName,
        RuleField::WorkflowVersion,
        RuleField::Channel,
    ],
    conditions: &[
        Condition::Within(RuleField::Channel),
        Condition::Within(RuleField::Circle),
        Condition::Equals(RuleField::RuleKey),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_only_read_required_fields() {
        for template in [&DRAFT_WORKFLOW_TEMPLATE, &ORDER_WORKFLOW_TEMPLATE] {
            for condition in template.conditions {
                assert!(template.required.contains(&condition.field()));
            }
        }
    }
}
