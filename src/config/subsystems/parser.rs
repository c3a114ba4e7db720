// src/config/subsystems/parser.rs

use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use crate::error::{Error, Result};
use crate::config::FromIni;

pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    // Namespace applied to unqualified tag names below
    pub namespace: String,

    // Element that delimits one line of verse
    pub line_tag: String,

    // Direct children of a line whose own text counts as reading text
    pub keep_tags: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            namespace: TEI_NAMESPACE.to_string(),
            line_tag: "l".to_string(),
            keep_tags: ["persName", "placeName", "foreign", "date", "l"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        }
    }
}

impl FromIni for ParserConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "parser" {
            return None;
        }

        let value = value.trim_matches('"');
        match key {
            "namespace" => {
                self.namespace = value.to_string();
                Some(Ok(()))
            },
            "line_tag" => {
                if value.is_empty() {
                    return Some(Err(Error::Config("line_tag must not be empty".to_string())));
                }
                self.line_tag = value.to_string();
                Some(Ok(()))
            },
            "keep_tags" => {
                self.keep_tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.line_tag.trim().is_empty() {
            return Err(Error::Config("line_tag must not be empty".to_string()));
        }
        if self.keep_tags.is_empty() {
            log::warn!("keep_tags is empty; only text directly inside lines will be kept");
        }
        Ok(())
    }

    /// Spell a configured tag in Clark notation. Names that already carry a
    /// `{namespace}` prefix are returned unchanged.
    pub fn qualify(&self, tag: &str) -> String {
        if tag.starts_with('{') || self.namespace.is_empty() {
            tag.to_string()
        } else {
            format!("{{{}}}{}", self.namespace, tag)
        }
    }

    pub fn qualified_line_tag(&self) -> String {
        self.qualify(&self.line_tag)
    }

    pub fn qualified_keep_tags(&self) -> HashSet<String> {
        self.keep_tags.iter().map(|tag| self.qualify(tag)).collect()
    }

    /// Returns a description of the current extraction settings
    pub fn describe(&self) -> String {
        format!(
            "lines <{}>, keeping text of <{}>",
            self.qualified_line_tag(),
            self.keep_tags.join(">, <")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_uses_namespace() {
        let config = ParserConfig::default();
        assert_eq!(config.qualified_line_tag(), "{http://www.tei-c.org/ns/1.0}l");
        assert!(config.qualified_keep_tags().contains("{http://www.tei-c.org/ns/1.0}persName"));
        assert_eq!(config.qualify("{urn:other}seg"), "{urn:other}seg");
    }

    #[test]
    fn test_empty_namespace_leaves_names_bare() {
        let mut config = ParserConfig::default();
        assert!(config.from_ini_section("parser", "namespace", "\"\"").unwrap().is_ok());
        assert_eq!(config.qualified_line_tag(), "l");
    }

    #[test]
    fn test_empty_line_tag_is_rejected() {
        let mut config = ParserConfig::default();
        assert!(config.from_ini_section("parser", "line_tag", "").unwrap().is_err());
        assert_eq!(config.line_tag, "l");
    }
}
