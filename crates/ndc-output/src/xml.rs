//! XML serialization of a finished [`A560Document`].

use std::io::Write;

use anyhow::{Context, Result};
use ndc_core::{A560_NAMESPACE, A560Document, DocumentVisitor, ROOT_TAG, encode_latin1};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Charset declared in the prolog and used for the artifact bytes.
pub const XML_ENCODING: &str = "ISO-8859-1";

const INDENT_WIDTH: usize = 2;

struct XmlVisitor<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> DocumentVisitor for XmlVisitor<W> {
    type Error = anyhow::Error;

    fn open(&mut self, tag: &'static str) -> Result<()> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .with_context(|| format!("write <{tag}>"))
    }

    fn leaf(&mut self, tag: &'static str, text: &str) -> Result<()> {
        write_text_element(&mut self.writer, tag, text)
    }

    fn close(&mut self, tag: &'static str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .with_context(|| format!("write </{tag}>"))
    }
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render the document as indented XML text.
pub fn render_xml(document: &A560Document) -> Result<String> {
    let mut visitor = XmlVisitor {
        writer: Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH),
    };
    visitor
        .writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some(XML_ENCODING), None)))?;

    let mut root = BytesStart::new(ROOT_TAG);
    root.push_attribute(("xmlns", A560_NAMESPACE));
    visitor.writer.write_event(Event::Start(root))?;
    document.accept(&mut visitor)?;
    visitor
        .writer
        .write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    let bytes = visitor.writer.into_inner();
    String::from_utf8(bytes).context("serialized xml is not valid UTF-8")
}

/// Artifact bytes: the rendered XML encoded as ISO-8859-1.
pub fn encode_artifact(document: &A560Document) -> Result<Vec<u8>> {
    let text = render_xml(document)?;
    let bytes = encode_latin1(&text).context("encode artifact")?;
    Ok(bytes)
}
