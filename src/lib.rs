//! xpmatch: extract values from XML documents with XPath agents.
//!
//! An agent is an XPath expression plus an extraction mode. Agents are
//! collected from a small column-spec format, bound to a parsed document by a
//! mapper and written row by row through an output sink. Source dispatch
//! drives any number of documents through a mapper, each one independently.

pub mod agent;
pub mod agent_set;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod mapper;
pub mod output;

#[cfg(test)]
mod test_support;
