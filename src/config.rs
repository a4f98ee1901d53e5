//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.
//! Only [`CompareOptions`] reaches the comparison pipeline; everything that
//! affects drawing is frozen into a [`RenderConfig`] per frame.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_FONT_SIZE, MAX_RECENT_FILES, REPORT_DIR,
};
use crate::diff::CompareOptions;
use crate::style::{RenderConfig, Theme};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Where saved reports go by default, created on demand
    pub fn report_dir(&self) -> Result<PathBuf, ConfigError> {
        let dir = self.data_dir().join(REPORT_DIR);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Add a file to the recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.settings.push_recent_file(path);

        // Save changes in background since it's synchronous IO
        let settings = self.settings.clone();
        std::thread::spawn(move || {
            if let Err(e) = confy::store(APP_NAME, None, &settings) {
                tracing::error!("Failed to save recent files: {}", e);
            }
        });
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// Monospace font size of inputs and result columns
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Highlight the changed characters inside modified lines
    #[serde(default = "default_true")]
    pub inline_highlight: bool,

    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Threshold, pairing strategy and size cap for comparisons
    #[serde(default)]
    pub compare: CompareOptions,

    /// Files recently opened into either input, newest first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: default_font_size(),
            inline_highlight: true,
            show_line_numbers: true,
            compare: CompareOptions::default(),
            recent_files: Vec::new(),
        }
    }
}

impl Settings {
    /// Snapshot of everything the result view needs to draw
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            theme: self.theme,
            font_size: self.font_size,
            inline_highlight: self.inline_highlight,
            show_line_numbers: self.show_line_numbers,
        }
    }

    fn push_recent_file(&mut self, path: PathBuf) {
        // Move the path to the front
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::PairingStrategy;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
        assert!(settings.inline_highlight);
        assert_eq!(settings.compare, CompareOptions::default());
        assert!(settings.recent_files.is_empty());
    }

    #[test]
    fn partial_compare_section_keeps_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme":"dark","compare":{"strategy":"grouped"}}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.compare.strategy, PairingStrategy::Grouped);
        assert_eq!(settings.compare.similarity_threshold, 0.5);
        assert_eq!(settings.compare.max_lines, crate::diff::DEFAULT_MAX_LINES);
        assert_eq!(
            settings.compare.max_table_cells,
            crate::diff::DEFAULT_MAX_TABLE_CELLS
        );
        assert!(!settings.compare.ignore_line_endings);
    }

    #[test]
    fn recent_files_are_deduplicated_and_capped() {
        let mut settings = Settings::default();
        for i in 0..(MAX_RECENT_FILES + 3) {
            settings.push_recent_file(PathBuf::from(format!("/tmp/{}.rs", i)));
        }
        settings.push_recent_file(PathBuf::from("/tmp/5.rs"));

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(settings.recent_files[0], PathBuf::from("/tmp/5.rs"));
        let fives = settings
            .recent_files
            .iter()
            .filter(|p| p.as_path() == std::path::Path::new("/tmp/5.rs"))
            .count();
        assert_eq!(fives, 1);
    }

    #[test]
    fn render_config_mirrors_settings() {
        let settings = Settings {
            theme: Theme::Dark,
            font_size: 16.0,
            inline_highlight: false,
            ..Default::default()
        };
        let render = settings.render_config();
        assert_eq!(render.theme, Theme::Dark);
        assert_eq!(render.font_size, 16.0);
        assert!(!render.inline_highlight);
        assert!(render.show_line_numbers);
    }
}
