//! # TRACERY
//!
//! Textual import dependency graph extraction for source trees.
//!
//! Tracery walks a directory of source files, scans each file for quoted
//! import declarations, and builds a directed graph of which modules import
//! which. The scan is a plain marker search: no tokenizer, no comment or
//! string-literal awareness, and deliberately tolerant of false positives
//! inside comments and strings.
//!
//! ## Output Formats
//!
//! - **Markdown**: flat import-count report with per-file import listings
//! - **JSON-Compact**: minimal token format for programmatic consumption
//!
//! ## Supported Languages
//!
//! Odin, Go, Zig, C — the quoted-import family.

pub mod core;
pub mod extract;
pub mod formatters;
