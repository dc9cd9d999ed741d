//! Report renderers for compatibility results.
//!
//! - [`terminal`] — line-oriented report with colored verdict lines; this is
//!   the default format and the one with a stable, exact output contract.
//! - [`table`] — verdict lines plus a UTF8 table of the dependency set.
//! - [`json`] — single pretty-printed JSON document, no terminal chrome.

pub mod json;
pub mod table;
pub mod terminal;
