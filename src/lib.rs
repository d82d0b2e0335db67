//! borr - parser and in-memory model for borr translation files.
//!
//! A borr file is a pseudo-ini translation format with comments, sections,
//! multi-line fields and `${...}` variable expansion:
//!
//! ```text
//! # Language file for British English
//! lang_id = "en_GB"
//! lang_ver = "v1.0.0"
//! lang_desc = "British English translations for My Awesome App!"
//!
//! [start_page]
//! page_title = "Start Here!"
//! greeting = "Welcome to ${start_page:page_title}"
//! about[] = "Multi-line fields are"
//! about[] = "joined with newlines."
//! ```
//!
//! ```
//! use borr::document::Document;
//!
//! let doc = Document::parse(r#"
//! lang_id = "en_GB"
//! lang_ver = "1.0.0"
//! lang_desc = "British English"
//!
//! [start_page]
//! page_title = "Start Here!"
//! greeting = "Welcome to ${start_page:page_title}"
//! "#)?;
//!
//! assert_eq!(doc.lang_id(), "en_GB");
//! assert_eq!(
//!     doc.field("start_page", "greeting")?,
//!     Some("Welcome to Start Here!".to_string()),
//! );
//! # Ok::<(), borr::error::Error>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: command-line demo layer (file loading, show/get/dump)
//! - `document`: the parsed document, its builder and lookups
//! - `error`: typed parse and expansion errors
//! - `expand`: the `${...}` variable-expansion engine and built-ins
//! - `registry`: user-registered variable expanders
//! - `scanner`: stateless per-line grammar classification
//! - `utils`: shared string helpers
//! - `version`: the `lang_ver` value type

pub mod cli;
pub mod document;
pub mod error;
pub mod expand;
pub mod registry;
pub mod scanner;
pub mod utils;
pub mod version;
