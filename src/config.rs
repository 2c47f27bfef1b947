//! Location and persistence of the directory registry file

use crate::registry::Registry;
use crate::utils::error::{AppError, AppResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;
use tracing::debug;

pub const APP_NAME: &str = "totaliterm";
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Directory override; the registry file lives directly inside it
pub const CONFIG_DIR_ENV: &str = "TOTALITERM_CONFIG_DIR";

/// Resolve the registry file path once for the whole process.
///
/// Order: explicit file, `TOTALITERM_CONFIG_DIR`, the platform config home,
/// then a dotfolder in the user's home.
pub fn resolve_config_path(explicit: Option<&Path>) -> AppResult<PathBuf> {
    resolve_with(
        explicit,
        std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from),
        dirs::config_dir(),
        dirs::home_dir(),
    )
}

fn resolve_with(
    explicit: Option<&Path>,
    env_dir: Option<PathBuf>,
    config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> AppResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = config_home {
        return Ok(dir.join(APP_NAME).join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = home {
        return Ok(dir.join(format!(".{}", APP_NAME)).join(CONFIG_FILE_NAME));
    }
    Err(AppError::System(
        "Cannot determine a configuration directory; set TOTALITERM_CONFIG_DIR".to_string(),
    ))
}

/// Reads and writes the registry document at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Bind the store to `path`, creating the parent directory and an empty
    /// file when they do not exist yet
    pub fn open(path: PathBuf) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            debug!(path = %path.display(), "creating empty config file");
            std::fs::File::create(&path)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<Registry> {
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Registry::default());
        }

        let document = content
            .parse::<DocumentMut>()
            .map_err(|e| AppError::Config {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Registry::from_document(document).map_err(|reason| AppError::Config {
            path: self.path.clone(),
            reason,
        })
    }

    /// Write through a temporary sibling file and rename it into place
    pub fn save(&self, registry: &Registry) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(&dir)?;
        file.write_all(registry.to_toml_string().as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        debug!(path = %self.path.display(), "saved registry");
        Ok(())
    }
}
