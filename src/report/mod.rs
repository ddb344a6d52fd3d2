//! Input document model and defaulting rules.

pub(crate) mod cascade;
pub(crate) mod lenient;
pub(crate) mod model;
