//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! morse table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Widest gap accepted for either spacing value, in spaces.
pub const MAX_GAP: usize = 64;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub spacing: SpacingSettings,
    pub stream: StreamSettings,
}

/// Gaps in space characters. The gap between marks of one character is
/// part of the pattern itself and always one space.
#[derive(Debug, Clone, Deserialize)]
pub struct SpacingSettings {
    pub letter_gap: usize,
    pub word_gap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamSettings {
    pub end_of_message: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    // A letter gap of one would be indistinguishable from a mark gap.
    if s.spacing.letter_gap < 2 {
        return Err(SettingsError::InvalidValue {
            field: "spacing.letter_gap".to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    if s.spacing.word_gap <= s.spacing.letter_gap {
        return Err(SettingsError::InvalidValue {
            field: "spacing.word_gap".to_string(),
            reason: "must be greater than spacing.letter_gap".to_string(),
        });
    }
    // word_gap > letter_gap, so this bounds both.
    if s.spacing.word_gap > MAX_GAP {
        return Err(SettingsError::InvalidValue {
            field: "spacing.word_gap".to_string(),
            reason: format!("must be at most {MAX_GAP}"),
        });
    }
    if s.stream.end_of_message.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "stream.end_of_message".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
