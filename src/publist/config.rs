use crate::error::{PublistError, Result};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_PATH: &str = "./data/publications.json";
const DEFAULT_COFIRST_NOTE: &str = " (* co-first author)";
const DEFAULT_PAGE_TITLE: &str = "Publications";

/// Configuration for publist. Looked up as `publist.json` next to the data,
/// or as `config.json` in the per-user config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublistConfig {
    /// Where the publication data lives (the page fetches the same path)
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// The site owner: rendered in bold instead of a link, matched with or
    /// without a trailing `*`
    #[serde(default)]
    pub highlight_author: Option<String>,

    /// Appended after the author line when a record sets `cofirst`
    #[serde(default = "default_cofirst_note")]
    pub cofirst_note: String,

    /// Heading and `<title>` of standalone page snapshots
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

fn default_cofirst_note() -> String {
    DEFAULT_COFIRST_NOTE.to_string()
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_string()
}

impl Default for PublistConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            highlight_author: None,
            cofirst_note: default_cofirst_note(),
            page_title: default_page_title(),
        }
    }
}

impl PublistConfig {
    /// Load a specific config file. Unlike [`PublistConfig::load_dir`] the
    /// file must exist: a user who names a path wants to know when it is bad.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(PublistError::Io)?;
        let config: PublistConfig =
            serde_json::from_str(&content).map_err(PublistError::Serialization)?;
        Ok(config)
    }

    /// Load config from the given directory, or return defaults if not found.
    pub fn load_dir<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&config_path)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PublistError::Io)?;
        }
        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PublistError::Serialization)?;
        fs::write(config_path, content).map_err(PublistError::Io)?;
        Ok(())
    }

    /// The renderer settings this config describes.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            highlight_author: self.highlight_author.clone(),
            cofirst_note: self.cofirst_note.clone(),
            page_title: self.page_title.clone(),
        }
    }

    /// Get a value by key, for `publist config <key>`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_path" => Some(self.data_path.clone()),
            "highlight_author" => Some(self.highlight_author.clone().unwrap_or_default()),
            "cofirst_note" => Some(self.cofirst_note.clone()),
            "page_title" => Some(self.page_title.clone()),
            _ => None,
        }
    }

    /// Set a value by key. An empty `highlight_author` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data_path" => self.data_path = value.to_string(),
            "highlight_author" => {
                self.highlight_author = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "cofirst_note" => self.cofirst_note = value.to_string(),
            "page_title" => self.page_title = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
