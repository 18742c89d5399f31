//! Streaming XML parse into the owned element tree.

use infalens_core::errors::DocumentError;
use infalens_core::types::FxHashMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{Document, Element};

/// Parse a complete mapping export from raw bytes.
///
/// All-or-nothing: any well-formedness violation fails the call and no
/// partial tree is returned. Text content, comments and processing
/// instructions are ignored; only the element structure and attributes
/// matter to extraction.
pub fn parse(bytes: &[u8]) -> Result<Document, DocumentError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().check_end_names = true;

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start, position)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or(DocumentError::UnexpectedClose { position })?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(DocumentError::Syntax {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                });
            }
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(DocumentError::Unclosed { tag: open.tag });
    }

    root.map(|root| Document { root })
        .ok_or(DocumentError::NoRoot)
}

/// Build an element from a start (or self-closing) tag.
fn element_from_start(start: &BytesStart<'_>, position: u64) -> Result<Element, DocumentError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attrs = FxHashMap::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DocumentError::Attribute {
            position,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| DocumentError::Attribute {
                position,
                message: e.to_string(),
            })?
            .into_owned();
        attrs.insert(key, value);
    }

    Ok(Element {
        tag,
        attrs,
        children: Vec::new(),
    })
}

/// Hand a completed element to its parent, or make it the document root.
fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<(), DocumentError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(DocumentError::TrailingContent { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse(b"<POWERMART><MAPPING NAME=\"m\"/></POWERMART>").unwrap();
        assert_eq!(doc.root().tag(), "POWERMART");
        assert_eq!(doc.root().children().len(), 1);
        assert_eq!(doc.root().children()[0].attr("NAME"), Some("m"));
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let doc = parse(
            b"<T><TABLEATTRIBUTE NAME=\"Sql Query\" VALUE=\"SELECT a FROM t WHERE a &gt; 1\"/></T>",
        )
        .unwrap();
        let attr = &doc.root().children()[0];
        assert_eq!(attr.attr("VALUE"), Some("SELECT a FROM t WHERE a > 1"));
    }

    #[test]
    fn test_mismatched_close_is_an_error() {
        assert!(parse(b"<A><B></A></B>").is_err());
    }

    #[test]
    fn test_unclosed_element_is_an_error() {
        let err = parse(b"<A><B>").unwrap_err();
        assert!(matches!(err, DocumentError::Unclosed { ref tag } if tag == "B"));
    }

    #[test]
    fn test_stray_close_is_an_error() {
        let err = parse(b"</A>").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnexpectedClose { .. } | DocumentError::Syntax { .. }
        ));
    }

    #[test]
    fn test_second_root_is_an_error() {
        let err = parse(b"<A/><B/>").unwrap_err();
        assert!(matches!(err, DocumentError::TrailingContent { .. }));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(parse(b""), Err(DocumentError::NoRoot)));
    }
}
