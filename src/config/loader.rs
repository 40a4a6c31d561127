//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the plugin
//! section from the primary INI file and an optional local override.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::ini::{IniFile, Section};

use super::types::{SECTION_NAME, TrackerConfig};

/// File name of the primary configuration file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".bitbarrc";

/// Suffix appended to the primary path to get the local override path.
pub const LOCAL_SUFFIX: &str = ".local";

/// Where to read configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// The primary file; must exist.
    pub primary: PathBuf,
    /// The local override; read only if it exists.
    pub local: PathBuf,
}

impl ConfigPaths {
    /// Returns `~/.bitbarrc` and `~/.bitbarrc.local`.
    ///
    /// # Errors
    ///
    /// Returns `HomeDirNotFound` if the home directory cannot be determined.
    pub fn default_paths() -> TrackerResult<Self> {
        let home = dirs::home_dir().ok_or(TrackerError::HomeDirNotFound)?;
        Ok(Self::for_primary(home.join(CONFIG_FILE_NAME)))
    }

    /// Uses `primary` and its sibling `<primary>.local`.
    ///
    /// # Example
    ///
    /// ```
    /// use remaining_time::config::ConfigPaths;
    /// use std::path::PathBuf;
    ///
    /// let paths = ConfigPaths::for_primary("/home/me/.bitbarrc");
    /// assert_eq!(paths.local, PathBuf::from("/home/me/.bitbarrc.local"));
    /// ```
    pub fn for_primary<P: Into<PathBuf>>(primary: P) -> Self {
        let primary = primary.into();
        let mut local = primary.clone().into_os_string();
        local.push(LOCAL_SUFFIX);
        Self {
            primary,
            local: PathBuf::from(local),
        }
    }
}

/// Loads and provides access to the plugin configuration.
///
/// The plugin section is taken from the primary file (an absent section
/// counts as empty). If the local override file exists, its plugin section
/// is shallow-merged over the primary one, key by key.
///
/// # Example
///
/// ```no_run
/// use remaining_time::config::{ConfigLoader, ConfigPaths};
///
/// let loader = ConfigLoader::load(&ConfigPaths::default_paths()?)?;
/// let config = loader.tracker_config()?;
/// println!("{} dependents", config.dependents.len());
/// # Ok::<(), remaining_time::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    section: Section,
}

impl ConfigLoader {
    /// Loads the plugin section from `paths`.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - The primary file is missing or unreadable
    /// - The local file exists but is unreadable
    /// - The merged section has no keys (`EmptyConfig`)
    pub fn load(paths: &ConfigPaths) -> TrackerResult<Self> {
        let mut section = Self::load_section(&paths.primary)?;

        if paths.local.exists() {
            let local = Self::load_section(&paths.local)?;
            debug!(
                path = %paths.local.display(),
                keys = local.len(),
                "merging local override"
            );
            section.merge(local);
        }

        Self::from_section(section)
    }

    /// Wraps an already-merged section.
    ///
    /// Returns `EmptyConfig` if the section has no keys.
    pub fn from_section(section: Section) -> TrackerResult<Self> {
        if section.is_empty() {
            return Err(TrackerError::EmptyConfig {
                section: SECTION_NAME.to_string(),
            });
        }
        Ok(Self { section })
    }

    /// Reads the plugin section of one file, empty if the file lacks it.
    fn load_section(path: &Path) -> TrackerResult<Section> {
        let section = IniFile::load(path)?.section_or(SECTION_NAME, Section::new());
        debug!(path = %path.display(), keys = section.len(), "read plugin section");
        Ok(section)
    }

    /// Returns the merged plugin section.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Builds the typed run configuration from the merged section.
    pub fn tracker_config(&self) -> TrackerResult<TrackerConfig> {
        TrackerConfig::from_section(&self.section)
    }
}
