use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

pub(crate) const DATA_DIR_ENV: &str = "FINLEDGER_DATA_DIR";

const TRANSACTIONS_FILE: &str = "transactions.csv";
const USERS_FILE: &str = "users.txt";
const REPORT_FILE: &str = "financial_report.csv";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    data_dir: PathBuf,
    styled: bool,
}

impl Config {
    /// Resolves the data directory (env override first, then the platform
    /// data dir) and makes sure it exists.
    pub(crate) fn from_env() -> Result<Self> {
        let data_dir = resolve_data_dir(std::env::var_os(DATA_DIR_ENV))?;
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        let styled =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Ok(Self { data_dir, styled })
    }

    #[cfg(test)]
    pub(crate) fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            styled: false,
        }
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn styled(&self) -> bool {
        self.styled
    }

    pub(crate) fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(TRANSACTIONS_FILE)
    }

    pub(crate) fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub(crate) fn report_path(&self) -> PathBuf {
        self.data_dir.join(REPORT_FILE)
    }
}

fn resolve_data_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = directories::ProjectDirs::from("com", "finledger", "FinLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
