//! XPath agents.
//!
//! An agent is an XPath expression bound to an extraction [`Mode`]: it is
//! evaluated against a node and yields zero, one or many strings, taken from
//! attribute values or from element text depending on the mode.
//!
//! Compound "this node or that attribute" queries are not supported; use
//! two agents instead.

mod mode;
mod xpath_agent;


pub use mode::Mode;
pub use xpath_agent::XpathAgent;
