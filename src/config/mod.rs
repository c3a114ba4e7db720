pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KwicConfig {
    // File paths
    pub files: file::FileConfig,

    // Subsystem configs
    pub parser: subsystems::ParserConfig,
    pub output: subsystems::OutputConfig,

    // Problems found while reading the INI file, reported once logging is up
    #[serde(skip)]
    warnings: Vec<String>,
}

impl KwicConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.parser.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Rejected or unknown keys seen by the last INI load.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Log the INI warnings. Call after the logger is installed, since the
    /// log level itself comes from this configuration.
    pub fn report_warnings(&self) {
        for message in &self.warnings {
            warn!("{}", message);
        }
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)?;
        Self::from_ini_str(&content)
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Delegate to appropriate subsystem config
                let handled = match current_section.as_str() {
                    "file" => config.files.from_ini_section(&current_section, key, value),
                    "parser" => {
                        trace!("    Processing parser config: {}={}", key, value);
                        config.parser.from_ini_section(&current_section, key, value)
                    },
                    "output" => config.output.from_ini_section(&current_section, key, value),
                    _ => None,
                };

                match handled {
                    Some(Err(e)) => config.warnings.push(
                        format!("Error processing config key {}={}: {}", key, value, e)
                    ),
                    Some(Ok(())) => {},
                    None => config.warnings.push(
                        format!("Unrecognized config key: {}={} in section [{}]", key, value, current_section)
                    ),
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_validate() {
        let config = KwicConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.files.output_path, PathBuf::from("kwic.csv"));
    }

    #[test]
    fn test_sections_are_delegated() {
        let config = KwicConfig::from_ini_str(
            "# edition settings\n\
             [file]\n\
             input_path = \"data/pearl.xml\"\n\
             output_path = out/pearl.csv\n\
             \n\
             [parser]\n\
             keep_tags = persName, placeName, gloss\n\
             \n\
             [output]\n\
             edition_label = Cleanness\n\
             log_level = debug\n",
        ).unwrap();

        assert_eq!(config.files.input_path, PathBuf::from("data/pearl.xml"));
        assert_eq!(config.files.output_path, PathBuf::from("out/pearl.csv"));
        assert_eq!(config.parser.keep_tags, vec!["persName", "placeName", "gloss"]);
        assert_eq!(config.output.edition_label, "Cleanness");
        assert_eq!(config.output.get_log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = KwicConfig::from_ini_str(
            "[output]\nlog_level = chatty\n[nowhere]\nkey = value\n",
        ).unwrap();

        assert_eq!(config.output.get_log_level(), log::LevelFilter::Info);
        assert_eq!(config.warnings().len(), 2);
        assert!(config.warnings()[0].contains("Invalid log level 'chatty'"));
        assert!(config.warnings()[1].contains("Unrecognized config key: key=value in section [nowhere]"));
    }

    #[test]
    fn test_clean_file_has_no_warnings() {
        let config = KwicConfig::from_ini_str("[output]
log_level = warn
").unwrap();
        assert!(config.warnings().is_empty());
        assert!(KwicConfig::default().warnings().is_empty());
    }

    #[test]
    fn test_invalid_dictionary_url_fails_validation() {
        let result = KwicConfig::from_ini_str("[output]\ndictionary_url = not a url\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
