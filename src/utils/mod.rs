//! Internal helpers shared by the wiring and configuration code.

pub(crate) mod bits;
pub(crate) mod converter;
