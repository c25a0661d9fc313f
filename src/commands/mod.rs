//! Command implementations

pub mod sort;
