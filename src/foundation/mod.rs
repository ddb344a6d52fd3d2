//! Shared error, geometry, and configuration types.

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod error;
