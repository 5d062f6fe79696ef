//! Embedded data blocks.

use clsgen_codegen::{CodeFragment, Renderable};

use crate::{Annotations, DocString, Value};

/// An `XData` block carrying an opaque, pre-rendered document.
///
/// The content is written between the braces exactly as supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct XData {
    pub name: String,
    pub content: String,
    pub keywords: Annotations,
    pub doc: DocString,
}

impl XData {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
    }

    /// Set the `MimeType` keyword.
    pub fn mime_type(self, mime: impl Into<String>) -> Self {
        self.keyword_value("MimeType", mime.into())
    }

    pub fn keyword(mut self, name: impl Into<String>) -> Self {
        self.keywords.set_flag(name);
        self
    }

    pub fn keyword_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.set(name, value);
        self
    }

    pub fn doc(mut self, doc: impl Into<DocString>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn header(&self) -> String {
        match self.keywords.keyword_bracket() {
            Some(keywords) => format!("XData {} {}", self.name, keywords),
            None => format!("XData {}", self.name),
        }
    }
}

impl Renderable for XData {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Line(self.header()));
        fragments.push(CodeFragment::line("{"));
        fragments.push(CodeFragment::verbatim(&self.content));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use clsgen_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_content_is_verbatim() {
        let content = "<MapItems>\n  <MapItem MessageType=\"A&amp;B\"/>\n</MapItems>";
        let xdata = XData::new("MessageMap", content).mime_type("application/xml");

        let mut builder = CodeBuilder::objectscript();
        builder.push_indent().emit(&xdata);
        assert_eq!(
            builder.build(),
            format!(
                "\tXData MessageMap [ MimeType = \"application/xml\" ]\n\t{{\n{}\n\t}}\n",
                content
            )
        );
    }

    #[test]
    fn test_header_without_keywords() {
        assert_eq!(XData::new("Data", "").header(), "XData Data");
    }
}
