use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    symbols: BTreeMap<String, String>,
    #[serde(default)]
    prosigns: BTreeMap<String, String>,
}

/// A single element of a Morse pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Dit,
    Dah,
}

impl Mark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Mark::Dit),
            '-' => Some(Mark::Dah),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::Dit => '.',
            Mark::Dah => '-',
        }
    }
}

/// Validated table contents, sorted by key.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub symbols: BTreeMap<char, String>,
    pub prosigns: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[symbols] table is empty")]
    EmptySymbols,
    #[error("symbol key must be a single non-lowercase character: {0:?}")]
    InvalidSymbolKey(String),
    #[error("prosign key must be an uppercase word of two or more characters: {0:?}")]
    InvalidProsignKey(String),
    #[error("invalid pattern for {key:?}: {pattern:?}")]
    InvalidPattern { key: String, pattern: String },
    #[error("morse table already initialized")]
    AlreadyInitialized,
}

/// Parse a pattern such as `". - ."` into its marks.
///
/// Marks must be separated by exactly one space, with no leading or trailing
/// whitespace. Returns `None` for anything else, including the empty string.
pub fn parse_pattern(pattern: &str) -> Option<Vec<Mark>> {
    if pattern.is_empty() {
        return None;
    }
    pattern
        .split(' ')
        .map(|piece| {
            let mut chars = piece.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Mark::from_char(c),
                _ => None,
            }
        })
        .collect()
}

/// Parse TOML text into validated symbol and prosign maps.
pub fn parse_table_toml(toml_str: &str) -> Result<ParsedTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.symbols.is_empty() {
        return Err(TableError::EmptySymbols);
    }

    let mut symbols = BTreeMap::new();
    for (key, pattern) in config.symbols {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_lowercase() && !c.is_whitespace() => c,
            _ => return Err(TableError::InvalidSymbolKey(key)),
        };
        if parse_pattern(&pattern).is_none() {
            return Err(TableError::InvalidPattern { key, pattern });
        }
        symbols.insert(c, pattern);
    }

    // Prosign keys are whole words, so they can never shadow a symbol key.
    for (key, pattern) in &config.prosigns {
        let well_formed = key.chars().count() >= 2
            && !key.chars().any(char::is_whitespace)
            && key.to_ascii_uppercase() == *key;
        if !well_formed {
            return Err(TableError::InvalidProsignKey(key.clone()));
        }
        if parse_pattern(pattern).is_none() {
            return Err(TableError::InvalidPattern {
                key: key.clone(),
                pattern: pattern.clone(),
            });
        }
    }

    Ok(ParsedTable {
        symbols,
        prosigns: config.prosigns,
    })
}
