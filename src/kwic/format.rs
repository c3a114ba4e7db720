// src/kwic/format.rs

use url::form_urlencoded;
use crate::config::subsystems::OutputConfig;

/// Builds the markdown links written into the `reference` and
/// `word_reference` columns.
#[derive(Debug, Clone)]
pub struct LinkFormatter {
    edition_label: String,
    edition_url: String,
    dictionary_url: String,
}

impl LinkFormatter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            edition_label: config.edition_label.clone(),
            edition_url: config.edition_url.clone(),
            dictionary_url: config.dictionary_url.clone(),
        }
    }

    /// `[Pearl](https://metseditions.org/editions/...): 12`
    pub fn line_reference(&self, line_number: usize) -> String {
        format!("[{}]({}): {}", self.edition_label, self.edition_url, line_number)
    }

    /// Dictionary search URL with `word` escaped as a query value.
    pub fn search_link(&self, word: &str) -> String {
        let escaped: String = form_urlencoded::byte_serialize(word.as_bytes()).collect();
        format!("{}{}", self.dictionary_url, escaped)
    }

    pub fn word_reference(&self, word: &str) -> String {
        format!("[{}]({})", word, self.search_link(word))
    }
}

impl Default for LinkFormatter {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_reference() {
        let links = LinkFormatter::default();
        assert_eq!(
            links.line_reference(7),
            "[Pearl](https://metseditions.org/editions/RZ5r80ETbe1cKVpHvm1RUl9eMrNR8l): 7"
        );
    }

    #[test]
    fn test_word_reference() {
        let links = LinkFormatter::default();
        assert_eq!(
            links.word_reference("perle"),
            "[perle](https://quod.lib.umich.edu/m/middle-english-dictionary/dictionary?utf8=%E2%9C%93&search_field=hnf&q=perle)"
        );
    }

    #[test]
    fn test_search_link_escapes_reserved_characters() {
        let links = LinkFormatter::default();
        let link = links.search_link("don't a&b=c?d#e");
        let query = link.rsplit("&q=").next().unwrap();

        assert_eq!(query, "don%27t+a%26b%3Dc%3Fd%23e");
        for reserved in [' ', '&', '=', '?', '#', '\''] {
            assert!(!query.contains(reserved), "unescaped {:?} in {}", reserved, query);
        }
    }

    #[test]
    fn test_search_link_escapes_non_ascii() {
        let links = LinkFormatter::default();
        assert!(links.search_link("þat").ends_with("&q=%C3%BEat"));
    }

    #[test]
    fn test_custom_edition() {
        let mut config = OutputConfig::default();
        config.edition_label = "Cleanness".to_string();
        config.edition_url = "https://example.org/cleanness".to_string();
        let links = LinkFormatter::new(&config);
        assert_eq!(links.line_reference(0), "[Cleanness](https://example.org/cleanness): 0");
    }
}
