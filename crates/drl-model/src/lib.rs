//! Data model for spreadsheet-to-DRL rule generation.

pub mod enums;
pub mod error;
pub mod options;
pub mod record;
pub mod template;

pub use enums::{RuleField, Variant};
pub use error::ModelError;
pub use options::{DEFAULT_PACKAGE, GeneratorOptions};
pub use record::RuleRecord;
pub use template::{Condition, RuleTemplate};
