//! Rule block rendering.
//!
//! Values are interpolated exactly as read. `circle` and `channel` are
//! pre-formatted value lists (`"A","B"`) and go in unquoted; the other
//! fields are wrapped in double quotes. Nothing is escaped, so a quote
//! inside a spreadsheet value ends up verbatim in the rule.

use drl_model::{Condition, GeneratorOptions, RuleRecord, Variant};

/// Renders the `package`/`import` preamble of a document.
pub fn render_preamble(variant: Variant, options: &GeneratorOptions) -> String {
    format!(
        "package {package};\n\nimport {fact};\n\n",
        package = options.package,
        fact = options.qualify(variant.fact_type()),
    )
}

/// Renders the `when` conditions of a rule, comma separated.
pub fn render_conditions(record: &RuleRecord, variant: Variant) -> String {
    variant
        .template()
        .conditions
        .iter()
        .map(|condition| match condition {
            Condition::Within(field) => {
                format!("{} in ({})", field.property(), record.value(*field))
            }
            Condition::Equals(field) => {
                format!("{} == \"{}\"", field.property(), record.value(*field))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders one rule block, including its trailing blank line.
///
/// The comment carries the 1-based row number and the rule name the
/// 0-based physical row index.
pub fn render_rule(record: &RuleRecord, variant: Variant, options: &GeneratorOptions) -> String {
    let template = variant.template();
    format!(
        concat!(
            "// rule values at row {row_number}\n",
            "rule \"{rule_name}_{row_index}\"\n",
            "    when\n",
            "        fact : {fact}({conditions})\n",
            "    then\n",
            "        fact.setWorkflowName(\"{workflow_name}\");\n",
            "        fact.setWorkflowVersion(\"{workflow_version}\");\n",
            "end\n\n",
        ),
        row_number = record.row_index + 1,
        rule_name = template.rule_name,
        row_index = record.row_index,
        fact = options.qualify(template.fact_type),
        conditions = render_conditions(record, variant),
        workflow_name = record.workflow_name,
        workflow_version = record.workflow_version,
    )
}
