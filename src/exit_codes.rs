//! Exit code constants for the xpmatch CLI.
//!
//! - 0: Success, including runs where individual sources were skipped
//! - 1: Fatal error (bad arguments, unreadable column specs or config,
//!   output failure)

/// Successful execution. Per-source failures do not change this.
pub const SUCCESS: i32 = 0;

/// Fatal error: nothing could be computed or the output stream failed.
pub const FAILURE: i32 = 1;
