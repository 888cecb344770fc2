pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FsStore, MemoryStore};
pub use crate::core::{engine::PatchEngine, patcher::Patcher};
pub use crate::utils::error::{PatchError, Result};
