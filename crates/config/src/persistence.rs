//! Where volley keeps its files, and how it reads and writes them.
//!
//! Three files live outside the working directory:
//!
//! | File        | Location                                  |
//! |-------------|-------------------------------------------|
//! | config      | `<config_dir>/volley/config.json5` (or `.json`) |
//! | preferences | `<config_dir>/volley/layout.json`         |
//! | debug log   | `<data_dir>/volley/volley.log`            |
//!
//! A `volley.json5` or `volley.json` in the working directory overrides
//! the user config. Files are read as JSON5 (plain JSON parses too) and
//! written as pretty JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ConfigError, Result};

const APP_DIR: &str = "volley";

/// Config names looked up in the working directory, best first.
const LOCAL_CONFIG_NAMES: [&str; 2] = ["volley.json5", "volley.json"];

/// Config names looked up in the user config directory, best first.
const USER_CONFIG_NAMES: [&str; 2] = ["config.json5", "config.json"];

const PREFERENCES_NAME: &str = "layout.json";
const LOG_NAME: &str = "volley.log";

/// Locates the config file to load, if any.
///
/// # Examples
///
/// ```no_run
/// use volley_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("config: {}", path.display()),
///     None => println!("using built-in layout defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_in(Path::new("."), user_config_dir().ok().as_deref())
}

/// Looks for a config in `local` first, then in `user`.
fn find_config_in(local: &Path, user: Option<&Path>) -> Option<PathBuf> {
    first_existing(local, &LOCAL_CONFIG_NAMES)
        .or_else(|| user.and_then(|dir| first_existing(dir, &USER_CONFIG_NAMES)))
}

fn first_existing(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// The `volley` directory under the platform config directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] when the platform has no
/// config directory for this user.
pub fn user_config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir())
}

/// Path of the saved layout preferences.
///
/// # Errors
///
/// See [`user_config_dir`].
pub fn preferences_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(PREFERENCES_NAME))
}

/// Path of the debug log, under the platform data directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] when the platform has no data
/// directory for this user.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(app_dir(dirs::data_dir())?.join(LOG_NAME))
}

fn app_dir(base: Option<PathBuf>) -> Result<PathBuf> {
    base.map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads `path` and deserializes it as JSON5.
///
/// # Errors
///
/// [`ConfigError::ReadFile`] if the file cannot be read,
/// [`ConfigError::ParseJson5`] if its content does not deserialize.
///
/// # Examples
///
/// ```no_run
/// use volley_config::LayoutPreferences;
/// use volley_config::persistence::load_json5;
///
/// # fn main() -> volley_config::Result<()> {
/// let prefs: LayoutPreferences = load_json5("layout.json")?;
/// # Ok(())
/// # }
/// ```
pub fn load_json5<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// Missing parent directories are created. The content goes to a sibling
/// `.tmp` file first, which is then renamed over `path`.
///
/// # Errors
///
/// [`ConfigError::SerializeJson`] if `value` does not serialize,
/// [`ConfigError::WriteFile`] if any file system step fails.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let staging = path.with_extension("tmp");
    fs::write(&staging, content).map_err(write_err)?;
    fs::rename(&staging, path).map_err(write_err)
}
