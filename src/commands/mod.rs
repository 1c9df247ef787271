//! Command implementations

pub mod compat;
pub mod completions;
pub mod inspect;
pub mod validate;
pub mod version;
