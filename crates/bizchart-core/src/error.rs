// File: crates/bizchart-core/src/error.rs
// Summary: Error type for dataset operations that report failure to the caller.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("no abscissa series set on the dataset")]
    MissingAbscissa,
    #[error("series has {actual} values but the abscissa has {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}
