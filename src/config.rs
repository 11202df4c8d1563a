//! Process-wide settings for failure rendering.

use crate::errors::{GtError, GtResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Environment variable naming a TOML file to load with [`init_from_env`].
pub const CONFIG_ENV: &str = "GT_CONFIG";

static CURRENT: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Settings that shape failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unchanged lines shown around each change in a line diff.
    pub diff_context: usize,
    /// Column at which descriptions are wrapped.
    pub description_width: usize,
    /// Append the caller's source location to failure messages.
    pub show_location: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_context: 3,
            description_width: 80,
            show_location: true,
        }
    }
}

impl Config {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> GtResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GtError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GtError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Snapshot of the installed configuration.
pub fn current() -> Config {
    match CURRENT.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the installed configuration.
pub fn install(config: Config) {
    log::debug!("installing gt config: {:?}", config);
    match CURRENT.write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Install the file named by `GT_CONFIG`, if the variable is set.
pub fn init_from_env() -> GtResult<()> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        install(Config::load(Path::new(&path))?);
    }
    Ok(())
}

/// Serialises tests that touch the installed configuration and restores the
/// previous configuration when dropped.
#[cfg(test)]
pub(crate) struct ScopedConfig {
    previous: Config,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ScopedConfig {
    /// Hold the configuration unchanged.
    pub(crate) fn hold() -> Self {
        static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let lock = match LOCK.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Self {
            previous: current(),
            _lock: lock,
        }
    }

    /// Install `config` until the guard is dropped.
    pub(crate) fn install(config: Config) -> Self {
        let scoped = Self::hold();
        install(config);
        scoped
    }
}

#[cfg(test)]
impl Drop for ScopedConfig {
    fn drop(&mut self) {
        install(self.previous.clone());
    }
}
