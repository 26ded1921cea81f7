//! Component installer.
//!
//! Copies the toast component template into a web project, asks before
//! replacing files the project already has, then installs the packages the
//! component imports with the project's package manager.

pub mod package_manager;

pub use package_manager::PackageManager;

use colored::Colorize;
use crate::constants::{COMPONENT_EXTENSION, GLOBALS_CSS_PATH, INSTALL_DEPENDENCIES, TEMPLATE_COMPONENTS_DIR};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk template tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    InstallFailed {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, InstallerError>;

fn io_err<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> InstallerError + 'a {
    move |source| InstallerError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}

/// Answers yes/no questions during installation
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<T: Confirm + ?Sized> Confirm for Box<T> {
    fn confirm(&mut self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

/// Asks on stdout and reads the answer from stdin. Anything but `y` is a no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} {} ", question.yellow(), "(y/N)".dimmed());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}

/// Answers every question with the same value
pub struct AssumeAnswer(pub bool);

impl Confirm for AssumeAnswer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub project_dir: PathBuf,
    pub template_dir: PathBuf,
    pub skip_install: bool,
}

/// What an installation run did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Files written because they did not exist yet
    pub copied: Vec<PathBuf>,
    /// Existing files replaced after confirmation
    pub overwritten: Vec<PathBuf>,
    /// Existing files left alone
    pub skipped: Vec<PathBuf>,
    pub package_manager: Option<PackageManager>,
}

pub struct Installer<C: Confirm> {
    options: InstallOptions,
    confirm: C,
}

impl<C: Confirm> Installer<C> {
    pub fn new(options: InstallOptions, confirm: C) -> Self {
        Self { options, confirm }
    }

    pub fn run(mut self) -> Result<InstallReport> {
        let template_dir = self.options.template_dir.clone();
        let project_dir = self.options.project_dir.clone();
        if !template_dir.is_dir() {
            return Err(InstallerError::TemplateNotFound(template_dir));
        }

        let files = template_files(&template_dir)?;
        let existing: Vec<PathBuf> = files.iter().filter(|rel| project_dir.join(rel).exists()).cloned().collect();

        log::info!("copying {} template files into {}", files.len(), project_dir.display());
        let mut report = InstallReport::default();
        for rel in &files {
            if existing.contains(rel) {
                continue;
            }
            copy_file(&template_dir.join(rel), &project_dir.join(rel))?;
            report.copied.push(rel.clone());
        }

        let globals_css = PathBuf::from(GLOBALS_CSS_PATH);
        if existing.contains(&globals_css) {
            let question = format!(
                "`{GLOBALS_CSS_PATH}` already exists. The component needs its base styles. Overwrite it?"
            );
            self.resolve_conflicts(std::slice::from_ref(&globals_css), &question, &mut report)?;
        }

        let components: Vec<PathBuf> = existing
            .iter()
            .filter(|rel| is_component_file(rel))
            .cloned()
            .collect();
        if !components.is_empty() {
            let listing: Vec<String> = components.iter().map(|p| format!(" - {}", p.display())).collect();
            let question = format!(
                "These component files already exist and may be overwritten:\n{}\nOverwrite them?",
                listing.join("\n")
            );
            self.resolve_conflicts(&components, &question, &mut report)?;
        }

        for rel in existing {
            if !report.overwritten.contains(&rel) && !report.skipped.contains(&rel) {
                report.skipped.push(rel);
            }
        }

        if !self.options.skip_install {
            let manager = PackageManager::detect(&project_dir);
            install_dependencies(manager, &project_dir)?;
            report.package_manager = Some(manager);
        }

        Ok(report)
    }

    fn resolve_conflicts(&mut self, files: &[PathBuf], question: &str, report: &mut InstallReport) -> Result<()> {
        if self.confirm.confirm(question) {
            for rel in files {
                copy_file(&self.options.template_dir.join(rel), &self.options.project_dir.join(rel))?;
                log::info!("overwrote {}", rel.display());
                report.overwritten.push(rel.clone());
            }
        } else {
            report.skipped.extend(files.iter().cloned());
        }
        Ok(())
    }
}

/// Relative paths of every file in the template tree, sorted
pub fn template_files(template_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(template_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            if let Ok(rel) = entry.path().strip_prefix(template_dir) {
                files.push(rel.to_path_buf());
            }
        }
    }
    Ok(files)
}

fn is_component_file(rel: &Path) -> bool {
    rel.starts_with(TEMPLATE_COMPONENTS_DIR) && rel.extension().is_some_and(|ext| ext == COMPONENT_EXTENSION)
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).map_err(io_err("create directory", parent))?;
    }
    std::fs::copy(from, to).map_err(io_err("copy", to))?;
    Ok(())
}

/// Status line printed before the package manager runs
#[must_use]
pub fn install_banner(manager: PackageManager) -> String {
    format!("📦  {} {}...", "Installing dependencies using".cyan(), manager.program().bold())
}

fn install_dependencies(manager: PackageManager, project_dir: &Path) -> Result<()> {
    println!("{}", install_banner(manager));
    let status = manager
        .install_command(project_dir, INSTALL_DEPENDENCIES)
        .status()
        .map_err(|source| InstallerError::Spawn {
            program: manager.program(),
            source,
        })?;

    if !status.success() {
        return Err(InstallerError::InstallFailed {
            program: manager.program(),
            status,
        });
    }
    Ok(())
}
