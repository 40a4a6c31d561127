//! Loading INI files and looking up their sections.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::parser::parse_sections;
use super::types::Section;

/// A parsed INI file: section name to [`Section`].
///
/// Built once from the full text of a file and immutable afterwards.
///
/// # Example
///
/// ```
/// use remaining_time::ini::{IniFile, Section};
///
/// let ini = IniFile::parse("; header comment\n[colors]\ntext = black\n");
/// assert_eq!(ini.section("colors").unwrap().get("text"), Some("black"));
///
/// // A missing section can fall back to a default.
/// let fallback = ini.section_or("absent", Section::new());
/// assert!(fallback.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: HashMap<String, Section>,
}

impl IniFile {
    /// Reads and parses the file at `path`.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - The path does not exist (`IniFileNotFound`)
    /// - The file cannot be read as UTF-8 text (`IniFileUnreadable`)
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let source = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrackerError::IniFileNotFound {
                path: path_str.clone(),
            },
            _ => TrackerError::IniFileUnreadable {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        debug!(path = %path_str, bytes = source.len(), "loaded INI file");
        Ok(Self::parse(&source))
    }

    /// Parses INI text. Never fails; unrecognized lines are skipped.
    pub fn parse(source: &str) -> Self {
        Self {
            sections: parse_sections(source),
        }
    }

    /// Looks up a section by name.
    ///
    /// Returns `SectionNotFound` if the section was never declared.
    pub fn section(&self, name: &str) -> TrackerResult<&Section> {
        self.sections.get(name).ok_or_else(|| {
            let declared: Vec<&str> = self.section_names().collect();
            debug!(section = name, ?declared, "section not found");
            TrackerError::SectionNotFound {
                section: name.to_string(),
            }
        })
    }

    /// Looks up a section by name, returning `default` if it is absent.
    pub fn section_or(&self, name: &str, default: Section) -> Section {
        self.sections.get(name).cloned().unwrap_or(default)
    }

    /// Returns the declared section names in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}
