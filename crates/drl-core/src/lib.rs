//! Spreadsheet to DRL rule generation.
//!
//! Reads workflow routing rules from a spreadsheet and renders them as a
//! DRL document: a `package`/`import` preamble followed by one
//! `when`/`then` rule block per data row.
//!
//! # Example
//!
//! ```ignore
//! use drl_core::convert_workbook;
//! use drl_model::{GeneratorOptions, Variant};
//!
//! let bytes = std::fs::read("rules/OrderWorkflowRules.xls")?;
//! let document = convert_workbook(&bytes, Variant::OrderWorkflow, &GeneratorOptions::default())?;
//! println!("{document}");
//! ```

mod document;
mod error;
mod render;

pub use document::{DrlDocument, RenderedRule, convert_workbook, extract_record, generate_document};
pub use error::{ConvertError, Result};
pub use render::{render_conditions, render_preamble, render_rule};
