pub mod loader;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    #[error("XML error after byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Ill-formed document: {0}")]
    IllFormed(String),

    #[error("Invalid text encoding: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// An element of the in-memory document tree.
///
/// Text is stored the ElementTree way: `text` is the character data before
/// the first child, and each child carries the `tail` that follows its end
/// tag up to the next sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    text: Option<String>,
    tail: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(tag: String) -> Self {
        Self {
            tag,
            text: None,
            tail: None,
            children: Vec::new(),
        }
    }

    /// Qualified tag in Clark notation, e.g. `{http://www.tei-c.org/ns/1.0}l`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag without its namespace part.
    pub fn local_name(&self) -> &str {
        match self.tag.rfind('}') {
            Some(pos) => &self.tag[pos + 1..],
            None => &self.tag,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All elements below this one with the given qualified tag, in document
    /// order. The element itself is never part of the result.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(element) = pending.pop() {
            if element.tag == tag {
                found.push(element);
            }
            pending.extend(element.children.iter().rev());
        }
        found
    }

    /// Qualified tags of the direct children.
    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.tag()).collect()
    }

    /// Qualified tags of the direct children paired with their direct text.
    pub fn child_tags_with_text(&self) -> Vec<(&str, Option<&str>)> {
        self.children
            .iter()
            .map(|child| (child.tag(), child.text()))
            .collect()
    }

    pub(crate) fn append_text(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        let slot = match self.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(content);
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}

/// A fully loaded, read-only XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse the document at `path` into memory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_path(path.as_ref())
    }

    /// Parse an in-memory XML string.
    pub fn parse_str(xml: &str) -> Result<Self> {
        loader::load_str(xml)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element below the root matching the qualified tag, in document
    /// order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        self.root.find_all(tag)
    }

    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }
}
