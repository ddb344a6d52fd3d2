//! Color conversion, gradient scanning and theme token resolution.

pub(crate) mod color;
pub(crate) mod gradient;
pub(crate) mod theme;
