//! Materializing a compiled document through a host node API.

pub(crate) mod apply;
pub(crate) mod factory;
pub(crate) mod memory;
