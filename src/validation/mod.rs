//! Heuristic validation of generated artifacts.
//!
//! One configurable `CheckList` type covers every document kind; the
//! per-document presets are configuration values, not separate validators.

pub mod checks;
pub mod result;

pub use checks::CheckList;
pub use result::ValidationResult;
