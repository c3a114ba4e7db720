// src/document/loader.rs

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::{debug, info, trace};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use super::{Document, DocumentError, Element, Result};

pub(crate) fn load_path(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
        _ => DocumentError::IoError(e),
    })?;

    info!("Loading document from {:?}", path);
    let document = build_tree(NsReader::from_reader(BufReader::new(file)))?;
    debug!("Loaded document with root <{}>", document.root().tag());
    Ok(document)
}

pub(crate) fn load_str(xml: &str) -> Result<Document> {
    build_tree(NsReader::from_str(xml))
}

fn build_tree<R: BufRead>(mut reader: NsReader<R>) -> Result<Document> {
    let mut buf = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let (namespace, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok(resolved) => resolved,
            Err(source) => return Err(DocumentError::Xml { position, source }),
        };

        match event {
            Event::Start(e) => {
                let tag = qualified_name(namespace, e.local_name().as_ref())?;
                if open.is_empty() && root.is_some() {
                    return Err(DocumentError::IllFormed(format!(
                        "element <{}> after the document element",
                        tag
                    )));
                }
                trace!("Open <{}>", tag);
                open.push(Element::new(tag));
            }
            Event::Empty(e) => {
                let element = Element::new(qualified_name(namespace, e.local_name().as_ref())?);
                attach(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                // End names are checked against start names by the reader
                let element = open.pop().ok_or_else(|| {
                    DocumentError::IllFormed("unexpected closing tag".to_string())
                })?;
                attach(element, &mut open, &mut root)?;
            }
            Event::Text(e) => {
                let raw = std::str::from_utf8(&e)
                    .map_err(|err| DocumentError::Encoding(err.to_string()))?;
                let content = quick_xml::escape::unescape(raw).map_err(|err| {
                    DocumentError::IllFormed(format!("invalid character reference: {}", err))
                })?;
                push_text(&content, &mut open)?;
            }
            Event::CData(e) => {
                let content = std::str::from_utf8(&e)
                    .map_err(|err| DocumentError::Encoding(err.to_string()))?;
                push_text(content, &mut open)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // are not part of the tree
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(DocumentError::IllFormed(format!(
            "unclosed element <{}> at end of input",
            unclosed.tag()
        )));
    }

    root.map(Document::new)
        .ok_or_else(|| DocumentError::IllFormed("no document element".to_string()))
}

fn qualified_name(namespace: ResolveResult<'_>, local: &[u8]) -> Result<String> {
    let local = std::str::from_utf8(local)
        .map_err(|err| DocumentError::Encoding(err.to_string()))?;

    match namespace {
        ResolveResult::Bound(Namespace(uri)) => {
            let uri = std::str::from_utf8(uri)
                .map_err(|err| DocumentError::Encoding(err.to_string()))?;
            Ok(format!("{{{}}}{}", uri, local))
        }
        ResolveResult::Unbound => Ok(local.to_string()),
        ResolveResult::Unknown(prefix) => Err(DocumentError::IllFormed(format!(
            "unbound namespace prefix '{}' on <{}>",
            String::from_utf8_lossy(&prefix),
            local
        ))),
    }
}

fn attach(element: Element, open: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(DocumentError::IllFormed(format!(
                "element <{}> after the document element",
                element.tag()
            )))
        }
    }
    Ok(())
}

fn push_text(content: &str, open: &mut [Element]) -> Result<()> {
    match open.last_mut() {
        Some(current) => current.append_text(content),
        // Only whitespace may appear outside the document element
        None if content.trim().is_empty() => {}
        None => {
            return Err(DocumentError::IllFormed(
                "text outside the document element".to_string(),
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mismatched_end_tag_is_rejected() {
        let result = load_str("<l>one <date>two</l></date>");
        assert!(matches!(result, Err(DocumentError::Xml { .. })));
    }

    #[test]
    fn test_unclosed_element_is_rejected() {
        let result = load_str("<TEI><l>never closed");
        assert!(matches!(
            result,
            Err(DocumentError::IllFormed(_)) | Err(DocumentError::Xml { .. })
        ));
    }

    #[test]
    fn test_empty_input_has_no_document_element() {
        assert!(matches!(load_str(""), Err(DocumentError::IllFormed(_))));
    }

    #[test]
    fn test_unknown_prefix_is_rejected() {
        let result = load_str("<tei:l>text</tei:l>");
        assert!(matches!(
            result,
            Err(DocumentError::IllFormed(_)) | Err(DocumentError::Xml { .. })
        ));
    }

    #[test]
    fn test_second_document_element_is_rejected() {
        let result = load_str("<a/><b/>");
        assert!(matches!(result, Err(DocumentError::IllFormed(_))));
    }

    #[test]
    fn test_entities_and_cdata_become_text() {
        let doc = load_str("<l>Perle &amp; <![CDATA[<spot>]]> &#254;e</l>").unwrap();
        assert_eq!(doc.root().text(), Some("Perle & <spot> þe"));
    }

    #[test]
    fn test_comments_are_skipped_and_text_merged() {
        let doc = load_str("<l>hygh <!-- editorial -->seysoun</l>").unwrap();
        assert_eq!(doc.root().text(), Some("hygh seysoun"));
        assert!(doc.root().children().is_empty());
    }

    #[test]
    fn test_missing_file_is_reported_as_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.xml");
        match load_path(&missing) {
            Err(DocumentError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_path_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pearl.xml");
        std::fs::write(
            &path,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<TEI xmlns=\"http://www.tei-c.org/ns/1.0\"><l>Perle</l></TEI>\n",
        ).unwrap();

        let doc = load_path(&path).unwrap();
        assert_eq!(doc.find_all("{http://www.tei-c.org/ns/1.0}l").len(), 1);
    }
}
