pub mod tei;

use crate::document::{Document, Element};

pub trait TextParser: Sync + Send {
    /// Line elements of the document, in document order
    fn lines<'d>(&self, document: &'d Document) -> Vec<&'d Element>;

    /// Flatten the reading text of one line, dropping editorial markup
    fn extract_text(&self, line: &Element) -> String;

    /// Collapse whitespace runs into single spaces and trim both ends
    fn normalize_text(&self, text: &str) -> String;

    /// Flattened and normalized text of one line
    fn line_text(&self, line: &Element) -> String {
        self.normalize_text(&self.extract_text(line))
    }

    /// Flattened text of every line, before whitespace normalization
    fn line_texts(&self, document: &Document) -> Vec<String> {
        self.lines(document)
            .into_iter()
            .map(|line| self.extract_text(line))
            .collect()
    }

    /// One entry per direct child of every line: its qualified tag, or
    /// `tag\ttext` when `with_text` is set. Newlines and tabs inside the
    /// text become spaces so each entry stays on one output line.
    fn child_tag_listing(&self, document: &Document, with_text: bool) -> Vec<String> {
        let mut listing = Vec::new();
        for line in self.lines(document) {
            if with_text {
                for (tag, text) in line.child_tags_with_text() {
                    let text = text.unwrap_or_default().replace(&['\n', '\t'][..], " ");
                    listing.push(format!("{}\t{}", tag, text));
                }
            } else {
                listing.extend(line.child_tags().into_iter().map(str::to_string));
            }
        }
        listing
    }
}

pub use self::tei::TeiParser;
