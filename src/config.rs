// Persisted settings: the column blacklist and the last-used database, table and
// predicate. The last generated statement is kept in a sibling .sql file.

use crate::error::{Error, Result};
use crate::logger;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LAST_INSERT_FILE_NAME: &str = "last-insert-command.sql";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Last statement generated successfully; stored outside the JSON.
    #[serde(skip)]
    pub last_insert_command: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Columns never included in generated statements.
    #[serde(default)]
    pub column_blacklist: Vec<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub where_clause: Option<String>,
}

/// `config.json` next to the running executable, or in the working directory.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

fn last_insert_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name(LAST_INSERT_FILE_NAME)
}

impl AppConfig {
    /// Load the configuration at `path`. A missing file is replaced by a default one
    /// and reported as `ConfigCreated` so the user can review it first.
    pub fn load(path: &Path) -> Result<Self> {
        logger::debug(&format!("LoadConfiguration: {}", path.display()));
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                AppConfig::default().save(path)?;
                return Err(Error::ConfigCreated {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let mut config: AppConfig = serde_json::from_str(&json)?;

        let last = last_insert_path(path);
        if last.exists() {
            config.last_insert_command = Some(fs::read_to_string(last)?);
        }
        Ok(config)
    }

    /// Write the JSON settings and, when present, the last generated statement.
    pub fn save(&self, path: &Path) -> Result<()> {
        logger::debug(&format!("SaveConfiguration: {}", path.display()));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        if let Some(cmd) = self.last_insert_command.as_deref().filter(|c| !c.is_empty()) {
            fs::write(last_insert_path(path), cmd)?;
        }
        Ok(())
    }
}
