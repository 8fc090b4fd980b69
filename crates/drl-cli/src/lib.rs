//! Library components of the `xls2drl` batch converter.

pub mod logging;
pub mod pipeline;
