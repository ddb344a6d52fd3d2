//! Output node tree.

pub(crate) mod document;
pub(crate) mod node;
