use std::path::Path;
use std::process::Command;

/// JavaScript package manager used by the target project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detect from lock files, pnpm first, npm when nothing matches
    #[must_use]
    pub fn detect(project_dir: &Path) -> Self {
        if project_dir.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if project_dir.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    #[must_use]
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments that add `deps` to the project
    #[must_use]
    pub fn install_args(&self, deps: &[&str]) -> Vec<String> {
        let verb = match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm => "add",
        };
        std::iter::once(verb.to_string())
            .chain(deps.iter().map(|d| (*d).to_string()))
            .collect()
    }

    #[must_use]
    pub fn install_command(&self, project_dir: &Path, deps: &[&str]) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.install_args(deps)).current_dir(project_dir);
        command
    }
}
