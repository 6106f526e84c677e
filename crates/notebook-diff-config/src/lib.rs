//! Configuration and file locations for nbdiff
//!
//! This crate provides:
//! - Directory utilities for config and cache files
//! - Configuration file discovery (TOML)
//! - Rendering configuration (RenderConfig)

pub mod config_file;
pub mod paths;
pub mod render_config;

pub use config_file::{load_config_file, load_config_file_from};
pub use paths::{cache_dir, global_config_path};
pub use render_config::{HighlighterKind, RenderConfig};
