//! Report to node-tree compilation.

pub(crate) mod components;
pub(crate) mod factory;
pub(crate) mod layout;
pub(crate) mod screen;
