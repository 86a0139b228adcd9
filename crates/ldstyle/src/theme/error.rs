//! Theme configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use super::breakpoint::Breakpoint;

/// Error returned when building a theme from configuration fails.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The configuration is not valid YAML or does not match the schema.
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration file could not be read.
    #[error("failed to read theme config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A breakpoint name outside the fixed tier set.
    #[error("unknown breakpoint '{name}' (expected one of: xs, sm, md, lg, xl)")]
    UnknownBreakpoint { name: String },

    /// A spacing unit that is negative, infinite or NaN.
    #[error("invalid spacing unit {unit}: must be finite and non-negative")]
    InvalidSpacing { unit: f64 },

    /// A tier narrower than the tier before it.
    #[error(
        "breakpoint '{larger}' ({larger_px}px) is narrower than '{smaller}' ({smaller_px}px)"
    )]
    UnorderedBreakpoints {
        smaller: Breakpoint,
        smaller_px: u32,
        larger: Breakpoint,
        larger_px: u32,
    },
}
