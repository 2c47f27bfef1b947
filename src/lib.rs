//! Totaliterm - run one shell command across many directories
//!
//! Directories are grouped under tags in a per-user registry file. The crate
//! also lists and bulk-clones the repositories of a GitHub account through
//! the `gh` and `git` command-line tools.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod github;
pub mod registry;
pub mod runner;
pub mod utils;

pub use crate::config::{ConfigStore, resolve_config_path};
pub use crate::core::traits::{CommandExecutor, Confirm, ProcessExit};
pub use crate::registry::{Registry, TagEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
