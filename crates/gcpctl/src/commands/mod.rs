//! Command implementations

pub mod endpoints;
pub mod overview;
pub mod project;
