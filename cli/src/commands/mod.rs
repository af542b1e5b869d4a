//! Command implementations.

pub mod convert;
