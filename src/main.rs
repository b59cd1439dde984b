use anyhow::Context;
use clap::Parser;
use dealership_inventory::adapters::export::{export_csv, export_json};
use dealership_inventory::app::display::write_vehicles;
use dealership_inventory::config::{Command, ExportFormat, ListFormat, LogFormat};
use dealership_inventory::utils::{logger, validation::Validate};
use dealership_inventory::{AppConfig, CliConfig, FileStore, InventoryStore, Menu};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let app_config = match &cli.config {
        Some(path) => {
            let config = match AppConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            };
            if let Err(e) = config.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            config
        }
        None => AppConfig::default(),
    };

    match app_config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    let store = FileStore::new(cli.inventory_path(&app_config));
    tracing::debug!("Using inventory file {}", store.path().display());
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.command() {
        Command::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(store, stdin.lock(), io::stdout().lock());
            menu.run()?;
        }
        Command::List { format } => {
            let outcome = store.load();
            if let Some(diagnostic) = &outcome.diagnostic {
                eprintln!("{}", diagnostic.user_friendly_message());
            }
            let vehicles = outcome.inventory.all();
            let mut out = io::stdout().lock();
            match format {
                ListFormat::Table => write_vehicles(&mut out, &vehicles)?,
                ListFormat::Json => export_json(&vehicles, &mut out)?,
            }
            out.flush()?;
        }
        Command::Export { output, format } => {
            let outcome = store.load();
            if let Some(diagnostic) = outcome.diagnostic {
                return Err(anyhow::Error::new(diagnostic)
                    .context("inventory could not be read, nothing exported"));
            }
            let vehicles = outcome.inventory.all();
            let file = File::create(&output).with_context(|| format!("creating {}", output))?;
            let writer = BufWriter::new(file);
            match format {
                ExportFormat::Csv => export_csv(&vehicles, writer)?,
                ExportFormat::Json => export_json(&vehicles, writer)?,
            }
            tracing::info!("Exported {} vehicles to {}", vehicles.len(), output);
            println!("✅ Exported {} vehicles to {}", vehicles.len(), output);
        }
    }

    Ok(())
}
