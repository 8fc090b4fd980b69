//! Rule records extracted from spreadsheet rows.

use serde::{Deserialize, Serialize};

use crate::enums::RuleField;

/// Field values of one data row.
///
/// `row_index` is the 0-based physical position of the row in the sheet.
/// It is embedded verbatim in the generated rule and is never compacted
/// when blank rows are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub row_index: usize,
    pub circle: String,
    pub rule_key: String,
    pub workflow_name: String,
    pub workflow_version: String,
    /// Only present for variants that read the channel column.
    pub channel: Option<String>,
}

impl RuleRecord {
    /// Returns the value of a field, or an empty string for an absent channel.
    pub fn value(&self, field: RuleField) -> &str {
        match field {
            RuleField::Circle => &self.circle,
            RuleField::RuleKey => &self.rule_key,
            RuleField::WorkflowName => &self.workflow_name,
            RuleField::WorkflowVersion => &self.workflow_version,
            RuleField::Channel => self.channel.as_deref().unwrap_or(""),
        }
    }
}
