use anyhow::Result;
use bongtoast::config::Config;
use bongtoast::logger::{init_logging, Logger};
use bongtoast::toast::{ToastOptions, ToastStore, Variant};
use bongtoast::ui;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bongtoast", version, about = "Toast notification showcase for the terminal")]
struct Cli {
    /// Use this configuration file instead of searching for one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(path) = init_logging(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    let store = ToastStore::global().clone();
    store.add(
        ToastOptions::new("Welcome to bongtoast")
            .description("Press 1-5 to add toasts, hover to read more, click to dismiss.")
            .variant(Variant::Info)
            .duration(0),
    );

    ui::run_app(config, store, Logger::new()).await?;

    Ok(())
}
