//! Advent of Code 2022 puzzle solutions with automatic registration
//!
//! Each day derives `AocSolver` and `AutoRegisterSolver`, so linking this
//! crate is enough for `RegistryBuilder::register_all_plugins` to find it.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
