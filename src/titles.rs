//! Section title → output file name lookup.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Titles of the PICO-8 reference sections and the stub files they become.
const PICO8_TITLES: &[(&str, &str)] = &[
    ("System", "system"),
    ("Graphics", "graphics"),
    ("Table Functions", "table"),
    ("Input", "input"),
    ("Audio", "audio"),
    ("Map", "map"),
    ("Memory", "memory"),
    ("Math", "math"),
    ("Custom Menu Items", "menu"),
    ("Strings and Type Conversion", "string"),
    ("Cartridge Data", "cartridge_data"),
    ("GPIO", "gpio"),
    ("Mouse and Keyboard Input", "mouse_and_keyboard"),
    ("Additional Lua Features", "additional"),
];

#[derive(Debug, Clone)]
pub struct TitleMap {
    entries: HashMap<String, String>,
}

impl Default for TitleMap {
    fn default() -> Self {
        Self {
            entries: PICO8_TITLES
                .iter()
                .map(|(title, name)| (title.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl TitleMap {
    /// Add or replace the output name for `title`.
    pub fn insert(&mut self, title: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(title.into(), name.into());
    }

    pub fn lookup(&self, title: &str) -> Result<&str> {
        self.entries
            .get(title)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownSection(title.to_string()))
    }
}

/// Parse a `TITLE=NAME` override.
pub fn parse_mapping(s: &str) -> std::result::Result<(String, String), String> {
    let (title, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TITLE=NAME, got {:?}", s))?;
    let (title, name) = (title.trim(), name.trim());
    if title.is_empty() || name.is_empty() {
        return Err(format!("expected TITLE=NAME, got {:?}", s));
    }
    Ok((title.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_titles() {
        let map = TitleMap::default();
        assert_eq!(map.lookup("Graphics").unwrap(), "graphics");
        assert_eq!(map.lookup("Strings and Type Conversion").unwrap(), "string");
        assert_eq!(map.lookup("Additional Lua Features").unwrap(), "additional");
    }

    #[test]
    fn unknown_title() {
        assert_eq!(
            TitleMap::default().lookup("Appendix"),
            Err(Error::UnknownSection("Appendix".to_string()))
        );
    }

    #[test]
    fn overrides() {
        let mut map = TitleMap::default();
        map.insert("Graphics", "gfx");
        map.insert("Appendix", "appendix");
        assert_eq!(map.lookup("Graphics").unwrap(), "gfx");
        assert_eq!(map.lookup("Appendix").unwrap(), "appendix");
    }

    #[test]
    fn mapping_arguments() {
        assert_eq!(
            parse_mapping("Table Functions=tables"),
            Ok(("Table Functions".to_string(), "tables".to_string()))
        );
        assert!(parse_mapping("Graphics").is_err());
        assert!(parse_mapping("=gfx").is_err());
        assert!(parse_mapping("Graphics=").is_err());
    }
}
