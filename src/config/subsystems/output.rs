// src/config/subsystems/output.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use log::LevelFilter;

pub const DEFAULT_EDITION_URL: &str = "https://metseditions.org/editions/RZ5r80ETbe1cKVpHvm1RUl9eMrNR8l";
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://quod.lib.umich.edu/m/middle-english-dictionary/dictionary?utf8=%E2%9C%93&search_field=hnf&q=";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    // Link text and target of the per-row line reference
    pub edition_label: String,
    pub edition_url: String,

    // Search endpoint; the escaped word is appended verbatim
    pub dictionary_url: String,

    // Log level
    pub log_level: String,
    #[serde(skip)]
    level_filter: Option<LevelFilter>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            edition_label: "Pearl".to_string(),
            edition_url: DEFAULT_EDITION_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            log_level: "info".to_string(),
            level_filter: Some(LevelFilter::Info),
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl FromIni for OutputConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "output" {
            return None;
        }

        let value = value.trim_matches('"');
        match key {
            "edition_label" => {
                self.edition_label = value.to_string();
                Some(Ok(()))
            },
            "edition_url" => {
                self.edition_url = value.to_string();
                Some(Ok(()))
            },
            "dictionary_url" => {
                self.dictionary_url = value.to_string();
                Some(Ok(()))
            },
            "log_level" => {
                let level_str = value.trim().to_lowercase();
                Some(match parse_level(&level_str) {
                    Some(level) => {
                        self.log_level = level_str;
                        self.level_filter = Some(level);
                        Ok(())
                    },
                    None => Err(Error::Config(
                        format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
                    )),
                })
            },
            _ => None,
        }
    }
}

impl OutputConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        // If we have a cached level, return it
        if let Some(level) = self.level_filter {
            return level;
        }

        parse_level(&self.log_level.trim().to_lowercase()).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.edition_url).map_err(|e| Error::Config(
            format!("Invalid edition_url '{}': {}", self.edition_url, e)
        ))?;
        url::Url::parse(&self.dictionary_url).map_err(|e| Error::Config(
            format!("Invalid dictionary_url '{}': {}", self.dictionary_url, e)
        ))?;

        if self.edition_label.is_empty() {
            log::warn!("edition_label is empty; line references will have no link text");
        }
        Ok(())
    }
}
