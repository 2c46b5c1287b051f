//! Session log lookup under the Claude projects root
//!
//! # Error Handling Strategy
//!
//! The locator favors best-effort degradation over hard failures, since it
//! inspects externally produced, possibly incomplete files:
//!
//! - **No match**: a session that cannot be found is `Ok(None)` / an empty
//!   list, never an error.
//! - **Missing projects root**: yields empty results rather than failing.
//! - **Unreadable project directories**: warned to stderr and skipped, so one
//!   bad directory does not hide the rest.
//! - **Session info**: a missing log yields the default record; a parse
//!   failure on the boundary lines is warned to stderr and the partial record
//!   is still returned.

pub mod info;
pub mod lookup;

pub use info::session_info;
pub use lookup::{LOG_EXTENSION, Locator};
