//! Pull parser for TS catalog XML.
//!
//! Accepts the layout produced by Qt Linguist: XML declaration, `<!DOCTYPE
//! TS>`, a `<TS>` root with `version` and `language` attributes, and
//! `<context>` blocks of `<message>` entries. Unknown elements (such as
//! `<location>` metadata) are skipped; malformed XML and structurally
//! incomplete messages fail fast with a diagnostic naming the offender.

use crate::catalog::model::{Message, MessageContext, TranslationState, TsDocument};
use crate::error::CatalogError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Which leaf element's text is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    None,
    ContextName,
    Source,
    Translation,
    Comment,
}

/// In-progress `<message>` state.
#[derive(Default)]
struct PendingMessage {
    source: Option<String>,
    translation: Option<String>,
    comment: Option<String>,
    state: TranslationState,
}

/// Parse a complete TS document from UTF-8 XML text.
pub fn parse_document(xml: &str) -> Result<TsDocument, CatalogError> {
    let mut reader = Reader::from_str(xml);

    let mut doc: Option<TsDocument> = None;
    let mut context: Option<MessageContext> = None;
    let mut context_ordinal = 0usize;
    let mut message: Option<PendingMessage> = None;
    let mut leaf = Leaf::None;
    let mut text = String::new();
    // Depth of unknown elements currently being skipped
    let mut skip_depth = 0usize;
    let mut finished = false;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|source| CatalogError::Xml { position, source })?;

        if skip_depth > 0 {
            match event {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => return Err(CatalogError::TruncatedDocument),
                _ => {}
            }
            continue;
        }

        match event {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}

            Event::Start(e) => match e.name().as_ref() {
                b"TS" if doc.is_none() => {
                    let mut version = None;
                    let mut language = None;
                    for attr in e.attributes() {
                        let attr = attr.map_err(|err| CatalogError::Xml {
                            position,
                            source: err.into(),
                        })?;
                        let value = attr
                            .unescape_value()
                            .map_err(|err| CatalogError::Xml {
                                position,
                                source: err.into(),
                            })?
                            .into_owned();
                        match attr.key.as_ref() {
                            b"version" => version = Some(value),
                            b"language" => language = Some(value),
                            _ => {}
                        }
                    }
                    let version = version
                        .ok_or(CatalogError::MissingTsAttribute { attribute: "version" })?;
                    let language = language
                        .ok_or(CatalogError::MissingTsAttribute { attribute: "language" })?;
                    doc = Some(TsDocument::new(version, language));
                }
                other if doc.is_none() => {
                    return Err(CatalogError::UnexpectedRoot {
                        found: String::from_utf8_lossy(other).into_owned(),
                    });
                }
                b"context" if context.is_none() => {
                    context_ordinal += 1;
                    context = Some(MessageContext::new(""));
                }
                b"name" if context.is_some() && message.is_none() => {
                    leaf = Leaf::ContextName;
                    text.clear();
                }
                b"message" if context.is_some() && message.is_none() => {
                    message = Some(PendingMessage::default());
                }
                b"source" if message.is_some() => {
                    leaf = Leaf::Source;
                    text.clear();
                }
                b"translation" if message.is_some() => {
                    leaf = Leaf::Translation;
                    text.clear();
                    let state = translation_state(&e, position)?;
                    if let Some(pending) = message.as_mut() {
                        pending.state = state;
                    }
                }
                b"comment" if message.is_some() => {
                    leaf = Leaf::Comment;
                    text.clear();
                }
                _ => skip_depth = 1,
            },

            Event::Empty(e) => match e.name().as_ref() {
                b"translation" if message.is_some() => {
                    // Self-closing form, common for unfinished entries
                    let state = translation_state(&e, position)?;
                    if let Some(pending) = message.as_mut() {
                        pending.translation = Some(String::new());
                        pending.state = state;
                    }
                }
                b"source" if message.is_some() => {
                    if let Some(pending) = message.as_mut() {
                        pending.source = Some(String::new());
                    }
                }
                _ => {}
            },

            Event::Text(t) => {
                if leaf != Leaf::None {
                    let unescaped = t.unescape().map_err(|err| CatalogError::Xml {
                        position,
                        source: err.into(),
                    })?;
                    text.push_str(&unescaped);
                }
            }

            Event::CData(c) => {
                if leaf != Leaf::None {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }

            Event::End(e) => match e.name().as_ref() {
                b"name" if leaf == Leaf::ContextName => {
                    if let Some(ctx) = context.as_mut() {
                        ctx.name = std::mem::take(&mut text);
                    }
                    leaf = Leaf::None;
                }
                b"source" if leaf == Leaf::Source => {
                    if let Some(pending) = message.as_mut() {
                        pending.source = Some(std::mem::take(&mut text));
                    }
                    leaf = Leaf::None;
                }
                b"translation" if leaf == Leaf::Translation => {
                    if let Some(pending) = message.as_mut() {
                        pending.translation = Some(std::mem::take(&mut text));
                    }
                    leaf = Leaf::None;
                }
                b"comment" if leaf == Leaf::Comment => {
                    if let Some(pending) = message.as_mut() {
                        pending.comment = Some(std::mem::take(&mut text));
                    }
                    leaf = Leaf::None;
                }
                b"message" => {
                    let pending = message.take().ok_or(CatalogError::TruncatedDocument)?;
                    let ctx = context.as_mut().ok_or(CatalogError::TruncatedDocument)?;
                    let ordinal = ctx.messages.len() + 1;
                    let source =
                        pending.source.ok_or_else(|| CatalogError::IncompleteMessage {
                            context: ctx.name.clone(),
                            ordinal,
                            element: "source",
                        })?;
                    let translation =
                        pending
                            .translation
                            .ok_or_else(|| CatalogError::IncompleteMessage {
                                context: ctx.name.clone(),
                                ordinal,
                                element: "translation",
                            })?;
                    ctx.messages.push(Message {
                        source,
                        translation,
                        comment: pending.comment,
                        state: pending.state,
                    });
                }
                b"context" => {
                    let ctx = context.take().ok_or(CatalogError::TruncatedDocument)?;
                    if ctx.name.is_empty() {
                        return Err(CatalogError::UnnamedContext {
                            ordinal: context_ordinal,
                        });
                    }
                    if let Some(d) = doc.as_mut() {
                        d.contexts.push(ctx);
                    }
                }
                b"TS" => finished = true,
                _ => {}
            },

            Event::Eof => {
                if !finished {
                    return Err(CatalogError::TruncatedDocument);
                }
                break;
            }
        }
    }

    doc.ok_or(CatalogError::TruncatedDocument)
}

/// Read the optional `type` attribute from a `<translation>` start tag.
fn translation_state(
    e: &quick_xml::events::BytesStart<'_>,
    position: u64,
) -> Result<TranslationState, CatalogError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CatalogError::Xml {
            position,
            source: err.into(),
        })?;
        if attr.key.as_ref() == b"type" {
            let value = attr.unescape_value().map_err(|err| CatalogError::Xml {
                position,
                source: err.into(),
            })?;
            return Ok(TranslationState::from_attr(&value));
        }
    }
    Ok(TranslationState::Finished)
}
