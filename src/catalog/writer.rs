//! Serialization back to the canonical TS layout.
//!
//! Output mirrors what Qt Linguist emits: XML declaration, `<!DOCTYPE TS>`,
//! 4-space indented contexts. Parsing the output of `write_document`
//! preserves every `(context, source, translation)` triple in order.

use crate::catalog::model::{Message, TsDocument};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Serialize a document to TS XML text.
pub fn write_document(doc: &TsDocument) -> String {
    let mut out = String::with_capacity(doc.message_count() * 128 + 256);

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");
    let _ = writeln!(
        out,
        "<TS version=\"{}\" language=\"{}\">",
        escape(&doc.version),
        escape(&doc.language)
    );

    for context in &doc.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", escape(&context.name));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message>\n");
    let _ = writeln!(out, "        <source>{}</source>", escape(&message.source));
    if let Some(comment) = &message.comment {
        let _ = writeln!(out, "        <comment>{}</comment>", escape(comment));
    }
    match message.state.as_attr() {
        Some(state) => {
            let _ = writeln!(
                out,
                "        <translation type=\"{}\">{}</translation>",
                state,
                escape(&message.translation)
            );
        }
        None => {
            let _ = writeln!(
                out,
                "        <translation>{}</translation>",
                escape(&message.translation)
            );
        }
    }
    out.push_str("    </message>\n");
}
