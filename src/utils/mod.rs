//! Shared helpers.

pub mod fmt;
pub mod path;

pub use fmt::{human_bytes, plural_count};
