//! Typed errors for parsing and variable expansion.

use thiserror::Error;

/// Failures surfaced by [`Document::parse`](crate::document::Document::parse)
/// and by expanding lookups.
///
/// The grammar itself is permissive: malformed lines, unknown sections,
/// fields and variables are never errors. Only a broken `lang_ver` value
/// aborts a parse, and only a non-terminating expansion aborts a lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The root-scope `lang_ver` field was present but not three
    /// dot-separated non-negative integers.
    #[error("malformed lang_ver value {0:?}: expected MAJOR.MINOR.REVISION")]
    MalformedVersion(String),

    /// Variable expansion did not settle within
    /// [`MAX_EXPANSION_ROUNDS`](crate::expand::MAX_EXPANSION_ROUNDS) rounds;
    /// the variables reference each other cyclically. The stored raw value
    /// is left untouched.
    #[error("expansion of ${{{variable}}} did not terminate")]
    CyclicExpansion {
        /// The variable being resolved when the bound was hit.
        variable: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
