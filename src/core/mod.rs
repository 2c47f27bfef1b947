//! Core seams shared by the registry, runner and GitHub modules

pub mod traits;
