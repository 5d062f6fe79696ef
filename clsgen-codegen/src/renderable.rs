//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Model nodes describe themselves as fragments; the [`CodeBuilder`]
//! turns fragments into text with the configured indentation.
//!
//! [`CodeBuilder`]: crate::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Text written exactly as given, ignoring indentation, followed by a newline.
    Verbatim(String),
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A documentation comment line (`/// text`).
    Doc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a verbatim text fragment.
    pub fn verbatim(s: impl Into<String>) -> Self {
        Self::Verbatim(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a documentation comment fragment.
    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
