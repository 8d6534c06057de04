//! Snapshot loader: XML-serialized document capture → arena [`Document`].
//!
//! The capture step serializes the rendered tree as well-formed XML and
//! embeds computed render metrics as `data-width`, `data-height`,
//! `data-font-size`, `data-display`, and `data-visibility` attributes.
//! Absent or unparsable metrics load as the defaults (zero size), which
//! every visibility-gated detector treats as "not visibly rendered".

use quick_xml::events::Event;
use quick_xml::Reader;

use lure_core::errors::DomError;
use lure_core::types::NodeId;

use super::{Document, RenderMetrics};

/// Parse a snapshot into a document. The snapshot must be well-formed
/// and contain a `<body>` element.
pub fn load_snapshot(markup: &str) -> Result<Document, DomError> {
    if markup.trim().is_empty() {
        return Err(DomError::EmptySnapshot);
    }

    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut doc: Option<Document> = None;
    let mut stack: Vec<NodeId> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let id = open_element(&mut doc, &stack, &reader, &start)?;
                stack.push(id);
            }
            Ok(Event::Empty(start)) => {
                // Self-closing element: opened and immediately closed.
                open_element(&mut doc, &stack, &reader, &start)?;
            }
            Ok(Event::End(end)) => {
                let tag = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                let balanced = match (stack.pop(), doc.as_ref()) {
                    (Some(id), Some(doc)) => {
                        doc.element(id).is_some_and(|el| el.tag == tag)
                    }
                    _ => false,
                };
                if !balanced {
                    return Err(DomError::UnbalancedClose { tag });
                }
            }
            Ok(Event::Text(text)) => {
                let unescaped = text.unescape().map_err(|e| DomError::MalformedMarkup {
                    position: reader.buffer_position() as u64,
                    reason: e.to_string(),
                })?;
                if let (Some(doc), Some(&parent)) = (doc.as_mut(), stack.last()) {
                    if !unescaped.trim().is_empty() {
                        doc.append_text(parent, &unescaped);
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Comments, CDATA, processing instructions, declarations.
            Ok(_) => {}
            Err(e) => {
                return Err(DomError::MalformedMarkup {
                    position: reader.buffer_position() as u64,
                    reason: e.to_string(),
                })
            }
        }
    }

    let doc = doc.ok_or(DomError::EmptySnapshot)?;
    if doc.elements_where(|el| el.tag == "body").is_empty() {
        return Err(DomError::MissingBody);
    }
    Ok(doc)
}

fn open_element(
    doc: &mut Option<Document>,
    stack: &[NodeId],
    reader: &Reader<&[u8]>,
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<NodeId, DomError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();

    match (doc.as_mut(), stack.last()) {
        (Some(doc), Some(&parent)) => {
            let id = doc.append_element(parent, &tag);
            fill_element(doc, id, reader, start)?;
            Ok(id)
        }
        (Some(_), None) => Err(DomError::MalformedMarkup {
            position: reader.buffer_position() as u64,
            reason: "multiple root elements".to_string(),
        }),
        (None, _) => {
            let mut new_doc = Document::with_root(&tag);
            let id = new_doc.root();
            fill_element(&mut new_doc, id, reader, start)?;
            *doc = Some(new_doc);
            Ok(id)
        }
    }
}

fn fill_element(
    doc: &mut Document,
    id: NodeId,
    reader: &Reader<&[u8]>,
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<(), DomError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DomError::MalformedMarkup {
            position: reader.buffer_position() as u64,
            reason: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(|e| DomError::MalformedMarkup {
            position: reader.buffer_position() as u64,
            reason: e.to_string(),
        })?;
        doc.set_attr(id, &key, &value);
    }

    let metrics = doc
        .element(id)
        .map(metrics_from_attrs)
        .unwrap_or_default();
    doc.set_metrics(id, metrics);
    Ok(())
}

/// Read embedded measurement attributes into render metrics.
/// Unparsable values fall back to the defaults rather than erroring.
fn metrics_from_attrs(el: &super::ElementData) -> RenderMetrics {
    let mut metrics = RenderMetrics::default();

    let parse = |name: &str| -> Option<f32> {
        let raw = el.attr(name)?;
        match raw.parse::<f32>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
            _ => {
                tracing::trace!(attribute = name, value = raw, "unparsable metric, using default");
                None
            }
        }
    };

    if let Some(w) = parse("data-width") {
        metrics.width = w;
    }
    if let Some(h) = parse("data-height") {
        metrics.height = h;
    }
    if let Some(fs) = parse("data-font-size") {
        metrics.font_size = fs;
    }
    if el.attr("data-display") == Some("none") || el.attr("data-visibility") == Some("hidden") {
        metrics.displayed = false;
    }

    metrics
}
