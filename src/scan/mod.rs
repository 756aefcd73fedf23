//! Source tree scanning: ignore rules, line location, and the candidate walk.

mod filter;
mod needle;
mod walker;

pub use filter::IgnoreRules;
pub use needle::seek_needle;
pub use walker::collect_candidates;
