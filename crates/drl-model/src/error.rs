use thiserror::Error;

/// Errors raised while interpreting model values.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown workflow variant '{value}' (expected 'draft' or 'order')")]
    UnknownVariant { value: String },
}
