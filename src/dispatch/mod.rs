//! Source dispatch.
//!
//! Turns logical source names into opened streams and drives each one
//! through a [`SourceHandler`](crate::mapper::SourceHandler). Sources are
//! independent: a name that cannot be opened is reported as a warning and
//! skipped, and a document that fails inside the mapper does not stop the
//! remaining names.
//!
//! Three ways of enumerating sources are offered:
//! - an in-memory list of names ([`SourceDispatcher::process_list`])
//! - names read one per line from a stream or a list file
//!   ([`SourceDispatcher::process_stream`],
//!   [`SourceDispatcher::process_list_file`])
//! - a single stream of document content, with no name resolution
//!   ([`SourceDispatcher::process_input`])

mod names;
mod sources;


pub use names::{DEFAULT_PREFIX, DEFAULT_SEPARATOR, NameMaker};
pub use sources::{DispatchSummary, SourceDispatcher};
