//! A lenient reader for the INI-like dialect used by status-bar plugins.
//!
//! The dialect is deliberately small: `[section]` headers, `key = value`
//! lines, and `;` comment lines. Anything else is skipped silently rather
//! than rejected, so a hand-edited file never stops the plugin from
//! rendering.
//!
//! # Example
//!
//! ```
//! use remaining_time::ini::IniFile;
//!
//! let ini = IniFile::parse("[plugin]\nname = \"demo\"\n");
//! let section = ini.section("plugin").unwrap();
//! assert_eq!(section.get("name"), Some("demo"));
//! ```

mod file;
mod parser;
mod types;

pub use file::IniFile;
pub use parser::{Line, classify_line, parse_sections};
pub use types::Section;
