//! Morse code tables.
//!
//! The symbol table maps a single uppercase character to its pattern and the
//! prosign table maps a whole standalone word to a fixed pattern. Both are
//! loaded from embedded TOML into a process-wide singleton on first use.

mod config;
mod lookup;
mod defaults;

pub use config::{parse_pattern, parse_table_toml, Mark, ParsedTable, TableError};
pub use lookup::MorseTable;

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    defaults::DEFAULT_TOML
}
