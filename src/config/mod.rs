#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, ExportFormat, ListFormat};
pub use toml_config::{AppConfig, LogFormat};
