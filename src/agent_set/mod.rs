//! Agent collections loaded from column specifications.
//!
//! A column specification is plain text, one agent per line:
//!
//! ```text
//! # comment lines and empty lines are skipped
//! Name   /catalog/book/@id
//! Title  /catalog/book/title[1]
//! /catalog/book/price
//! ```
//!
//! A line with two fields is `title expression...`; the expression runs from
//! the start of the second field to the end of the line and may contain
//! separators. A line with a single field is an expression whose title is
//! synthesized as `[k]`, `k` counting the non-skipped lines so far.
//!
//! The collection keeps a header sequence one longer than its agents: the
//! first header is the collection's default title, labelling the column that
//! carries the source name.

mod parser;
mod set;


pub use parser::{COMMENT_MARKER, DEFAULT_SEPARATORS, DEFAULT_TITLE, LineParser};
pub use set::{AgentEntry, AgentSet};
