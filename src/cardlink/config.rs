use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The attorney roster pages shipped as the built-in target list.
static DEFAULT_FILES: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    [
        "attorney-kamal.html",
        "attorney-mustafa.html",
        "attorney-kabir.html",
        "attorney-rashed.html",
        "attorney-mahadi.html",
    ]
    .iter()
    .map(|f| PathBuf::from(*f))
    .collect()
});

/// Built-in name-to-profile mapping. Order matters: entries are applied in
/// declaration order against the current text of each file.
static DEFAULT_CARDS: Lazy<Vec<CardLink>> = Lazy::new(|| {
    [
        ("Nasrin Akter", "attorney-nasrin.html"),
        ("Harun Rayhan", "attorney-harun.html"),
        ("Mustafa Kamal Chowdhury", "attorney-mustafa.html"),
        ("Mohammad Kabir", "attorney-kabir.html"),
        ("Rashed", "attorney-rashed.html"),
        ("Mahadi", "attorney-mahadi.html"),
        ("Mohammed Mostofa Kamal", "attorney-kamal.html"),
    ]
    .iter()
    .map(|(name, href)| CardLink::new(*name, *href))
    .collect()
});

/// One mapping entry: the attorney display name as it appears in the page's
/// marker comment, and the relative path of that attorney's profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardLink {
    pub name: String,
    pub href: String,
}

impl CardLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Configuration for one linking run: which files to rewrite and which cards
/// to link. Passed explicitly into the linker, never read from global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkerConfig {
    /// Target files, processed in order.
    pub files: Vec<PathBuf>,

    /// Name-to-profile mapping, applied in order to each file.
    pub cards: Vec<CardLink>,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES.clone(),
            cards: DEFAULT_CARDS.clone(),
        }
    }
}

impl LinkerConfig {
    /// Load a config from a JSON file. Unlike the built-in defaults this is
    /// explicit user input, so a missing or malformed file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: LinkerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the config as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_match_roster() {
        let config = LinkerConfig::default();
        assert_eq!(config.files.len(), 5);
        assert_eq!(config.cards.len(), 7);
        assert_eq!(config.files[0], PathBuf::from("attorney-kamal.html"));
        assert_eq!(
            config.cards[4],
            CardLink::new("Rashed", "attorney-rashed.html")
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");

        let config = LinkerConfig {
            files: vec![PathBuf::from("team.html")],
            cards: vec![CardLink::new("Rashed", "attorney-rashed.html")],
        };
        config.save(&path).unwrap();

        let loaded = LinkerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.json");
        assert!(LinkerConfig::load(&path).is_err());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(LinkerConfig::load(&path).is_err());
    }
}
