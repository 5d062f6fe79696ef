//! Code builder utility for generating properly indented code.

use crate::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use clsgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::objectscript()
///     .line("ClassMethod Ping() As %Status")
///     .line("{")
///     .indent()
///     .line("return $$$OK")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "ClassMethod Ping() As %Status\n{\n\treturn $$$OK\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use clsgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::xml();
/// builder
///     .push_line("<MapItems>")
///     .push_indent()
///     .push_line("<MapItem/>")
///     .push_dedent()
///     .push_line("</MapItems>");
/// assert_eq!(builder.build(), "<MapItems>\n  <MapItem/>\n</MapItems>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (class source default).
    pub fn objectscript() -> Self {
        Self::new(Indent::OBJECTSCRIPT)
    }

    /// Create a new CodeBuilder with 2-space indentation (XML default).
    pub fn xml() -> Self {
        Self::new(Indent::XML)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add text exactly as given, followed by a newline (mutable).
    pub fn push_verbatim(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a documentation comment (`/// text`) (mutable).
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Verbatim(s) => {
                self.push_verbatim(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use clsgen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::xml()
    ///     .block_with_close("<MapItem>", "</MapItem>", |b| {
    ///         b.line("<Method>Ping</Method>")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "<MapItem>\n  <Method>Ping</Method>\n</MapItem>\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::objectscript().line("set x = 1").build();
        assert_eq!(code, "set x = 1\n");
    }

    #[test]
    fn test_tab_indentation() {
        let code = CodeBuilder::objectscript()
            .line("{")
            .indent()
            .line("quit")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "{\n\tquit\n}\n");
    }

    #[test]
    fn test_xml_indentation() {
        let code = CodeBuilder::xml()
            .block_with_close("<a>", "</a>", |b| b.line("<b/>"))
            .build();

        assert_eq!(code, "<a>\n  <b/>\n</a>\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::objectscript()
            .each(["A", "B"], |b, name| b.line(&format!("Property {};", name)))
            .build();

        assert_eq!(code, "Property A;\nProperty B;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::Line("Method Run()".to_string()),
                    CodeFragment::Block {
                        header: "{".to_string(),
                        body: vec![CodeFragment::Line("quit".to_string())],
                        close: Some("}".to_string()),
                    },
                ]
            }
        }

        let mut builder = CodeBuilder::objectscript();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "Method Run()\n{\n\tquit\n}\n");
    }

    #[test]
    fn test_verbatim_ignores_indentation() {
        let mut builder = CodeBuilder::objectscript();
        builder
            .push_indent()
            .apply_fragment(CodeFragment::verbatim("<a>\n  <b/>\n</a>"));
        assert_eq!(builder.build(), "<a>\n  <b/>\n</a>\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::objectscript()
            .dedent()
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "}\n");
    }

    #[test]
    fn test_blank_and_doc_fragments() {
        let mut builder = CodeBuilder::objectscript();
        builder.push_indent();
        builder.apply_fragment(CodeFragment::doc("Summary"));
        builder.apply_fragment(CodeFragment::Blank);
        assert_eq!(builder.build(), "\t/// Summary\n\n");
    }
}
