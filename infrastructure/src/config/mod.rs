//! Configuration file loading for globetrotter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GLOBETROTTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./globetrotter.toml` or `./.globetrotter.toml`
//! 4. Global: `~/.config/globetrotter/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileGameConfig, FileInviteConfig,
    FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
