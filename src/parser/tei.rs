// TEI line flattening and whitespace normalization

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use std::collections::HashSet;
use crate::config::subsystems::ParserConfig;
use crate::document::{Document, Element};

use super::TextParser;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Clone)]
pub struct TeiParser {
    line_tag: String,
    keep_tags: HashSet<String>,
}

impl TeiParser {
    pub fn new(settings: ParserConfig) -> Self {
        let line_tag = settings.qualified_line_tag();
        let keep_tags = settings.qualified_keep_tags();
        debug!("TEI parser: {}", settings.describe());
        Self {
            line_tag,
            keep_tags,
        }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    pub fn keeps(&self, tag: &str) -> bool {
        self.keep_tags.contains(tag)
    }
}

impl TextParser for TeiParser {
    fn lines<'d>(&self, document: &'d Document) -> Vec<&'d Element> {
        document.find_all(&self.line_tag)
    }

    fn extract_text(&self, line: &Element) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(line.children().len() * 2 + 1);

        if let Some(text) = line.text() {
            parts.push(text.trim());
        }

        // Only direct children are inspected; a kept tag nested inside a
        // skipped one is lost together with its wrapper.
        for child in line.children() {
            if self.keeps(child.tag()) {
                if let Some(text) = child.text() {
                    parts.push(text.trim());
                }
            } else {
                trace!("Skipping <{}> inside line", child.local_name());
            }
            if let Some(tail) = child.tail() {
                parts.push(tail.trim());
            }
        }

        parts.retain(|part| !part.is_empty());
        parts.join(" ")
    }

    fn normalize_text(&self, text: &str) -> String {
        let text = text.replace(&['\n', '\t'][..], " ");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}
