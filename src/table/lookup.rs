use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_table_toml, TableError};
use super::defaults::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable symbol and prosign lookup tables.
#[derive(Debug)]
pub struct MorseTable {
    symbols: HashMap<char, String>,
    prosigns: HashMap<String, String>,
}

impl MorseTable {
    /// Build a table from TOML text. Most callers want [`MorseTable::global`].
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let parsed = parse_table_toml(toml_str)?;
        Ok(Self {
            symbols: parsed.symbols.into_iter().collect(),
            prosigns: parsed.prosigns.into_iter().collect(),
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MorseTable {
        static INSTANCE: OnceLock<MorseTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            MorseTable::from_toml(toml_str).expect("morse table TOML must be valid")
        })
    }

    /// Pattern for a single character, case-folded to ASCII uppercase.
    pub fn symbol(&self, c: char) -> Option<&str> {
        self.symbols
            .get(&c.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Fixed pattern for a whole word, if it is a prosign. The word must
    /// already be uppercase.
    pub fn prosign(&self, word: &str) -> Option<&str> {
        self.prosigns.get(word).map(String::as_str)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn prosign_count(&self) -> usize {
        self.prosigns.len()
    }
}
