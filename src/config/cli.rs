use crate::adapters::file_store::DEFAULT_PATH;
use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dealership-inventory")]
#[command(about = "Keep a car dealership's vehicle inventory in a pipe-delimited file")]
pub struct CliConfig {
    /// Inventory file; overrides `[store].path` from the config file
    #[arg(long, short)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, short)]
    pub config: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// Print every vehicle and exit
    List {
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Write the whole inventory to another file
    Export {
        #[arg(long, short)]
        output: String,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }

    /// Inventory path: `--file`, then the config file, then [`DEFAULT_PATH`].
    pub fn inventory_path(&self, app_config: &AppConfig) -> PathBuf {
        self.file
            .clone()
            .or_else(|| app_config.store_path().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PATH.to_string())
            .into()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(Command::Export { output, .. }) = &self.command {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_menu_and_default_path() {
        let cli = CliConfig::parse_from(["dealership-inventory"]);
        assert!(matches!(cli.command(), Command::Menu));
        assert_eq!(
            cli.inventory_path(&AppConfig::default()),
            PathBuf::from("inventory.csv")
        );
    }

    #[test]
    fn test_file_flag_wins_over_config() {
        let app_config = AppConfig::from_toml_str("[store]\npath = \"from-config.csv\"\n").unwrap();

        let cli = CliConfig::parse_from(["dealership-inventory"]);
        assert_eq!(cli.inventory_path(&app_config), PathBuf::from("from-config.csv"));

        let cli = CliConfig::parse_from(["dealership-inventory", "--file", "lot.csv"]);
        assert_eq!(cli.inventory_path(&app_config), PathBuf::from("lot.csv"));
    }

    #[test]
    fn test_parse_export_subcommand() {
        let cli = CliConfig::parse_from([
            "dealership-inventory",
            "export",
            "--output",
            "out.json",
            "--format",
            "json",
        ]);
        match cli.command() {
            Command::Export { output, format } => {
                assert_eq!(output, "out.json");
                assert_eq!(format, ExportFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_empty_file_flag_is_rejected() {
        let cli = CliConfig::parse_from(["dealership-inventory", "--file", ""]);
        assert!(cli.validate().is_err());
    }
}
