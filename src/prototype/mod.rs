//! Navigation wiring between compiled screens.

pub(crate) mod linker;
pub(crate) mod transitions;
