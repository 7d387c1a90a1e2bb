//! Config manager for loading, saving, and atomic updates.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Section-level updates (only the modified table is replaced)
//! - Defaults applied for missing keys on load

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::{DocumentMut, Item};

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages measurement configuration on disk.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Changes are in memory only until `save()` or `update_section()`.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", self.config_path.display());
        Ok(())
    }

    /// Load config from file, creating it with defaults if it doesn't exist.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            self.load()
        } else {
            self.settings = Settings::default();
            self.save()?;
            tracing::info!("Created default config at {}", self.config_path.display());
            Ok(())
        }
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Update a specific section atomically.
    ///
    /// Re-reads the file from disk, replaces only the given table and
    /// writes back, leaving the other tables as they are on disk.
    pub fn update_section(&mut self, section: ConfigSection) -> ConfigResult<()> {
        let current_content = if self.config_path.exists() {
            fs::read_to_string(&self.config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = if current_content.is_empty() {
            DocumentMut::new()
        } else {
            current_content.parse()?
        };

        let section_toml = self.section_toml(section)?;
        let section_doc: DocumentMut = section_toml.parse()?;
        doc[section.table_name()] = Item::Table(section_doc.as_table().clone());

        self.atomic_write(&doc.to_string())?;
        Ok(())
    }

    /// Serialize one section's fields (without the table header).
    fn section_toml(&self, section: ConfigSection) -> ConfigResult<String> {
        let content = match section {
            ConfigSection::Window => toml::to_string_pretty(&self.settings.window)?,
            ConfigSection::Measurement => toml::to_string_pretty(&self.settings.measurement)?,
            ConfigSection::Logging => toml::to_string_pretty(&self.settings.logging)?,
        };
        Ok(content)
    }

    /// Generate config content with a comment above each table.
    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();
        output.push_str("# Noise correlation measurement configuration\n\n");

        for &section in ConfigSection::all() {
            let comment = match section {
                ConfigSection::Window => "# Signal/noise window placement",
                ConfigSection::Measurement => "# Measurement functional and group velocity",
                ConfigSection::Logging => "# Logging",
            };
            output.push_str(comment);
            output.push('\n');
            output.push_str(&format!("[{}]\n", section.table_name()));
            output.push_str(&self.section_toml(section)?);
            output.push('\n');
        }

        Ok(output)
    }

    /// Write content to the config file via a temp file and rename.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;
        Ok(())
    }
}
