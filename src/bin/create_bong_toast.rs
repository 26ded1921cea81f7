use anyhow::{Context, Result};
use bongtoast::config::Config;
use bongtoast::constants::INSTALLER_NAME;
use bongtoast::installer::{AssumeAnswer, Confirm, InstallOptions, Installer, StdinConfirm};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = INSTALLER_NAME, version, about = "Install the BongToast component in your React/Next.js project")]
struct Cli {
    /// Project path
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Template tree to copy (defaults to the bundled template)
    #[arg(short, long, env = "BONGTOAST_TEMPLATE_DIR")]
    template: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    yes: bool,

    /// Copy files only, do not run the package manager
    #[arg(long)]
    skip_install: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let project_dir = std::env::current_dir()
        .context("Failed to read current directory")?
        .join(&cli.path);
    let template_dir = cli
        .template
        .or(config.installer.template_dir)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("template"));

    let options = InstallOptions {
        project_dir,
        template_dir,
        skip_install: cli.skip_install,
    };

    println!("📂  {}", "Copying component files...".cyan());
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AssumeAnswer(true))
    } else {
        Box::new(StdinConfirm)
    };
    let report = Installer::new(options, confirm).run()?;

    println!("{}  {} files copied", "✔".green(), report.copied.len());
    if !report.overwritten.is_empty() {
        println!("{}  {} files overwritten", "✔".green(), report.overwritten.len());
    }
    for skipped in &report.skipped {
        println!("{}  Kept existing {}", "⚠️".yellow(), skipped.display().to_string().yellow());
    }
    println!("\n✅  {}", "BongToast installed successfully!".green().bold());
    Ok(())
}
