//! Address processing logic.
//!
//! This module contains the pure pipeline stages between loader and writer:
//! - [`candidates`] - Candidate host enumeration
//! - [`diff`] - Unused-address selection
//! - [`used`] - Used-address extraction

mod candidates;
mod diff;
mod used;

// Re-export public functions
pub use candidates::{candidate_ips, FIRST_HOST, LAST_HOST};
pub use diff::find_unused_ips;
pub use used::used_ips;
