//! Command implementations

pub mod login;
pub mod validate;
pub mod version;
