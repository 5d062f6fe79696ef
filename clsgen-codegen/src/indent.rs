//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as written by the class editor for method bodies.
    pub const OBJECTSCRIPT: Self = Self::Tab;

    /// 2-space indentation for embedded XML documents.
    pub const XML: Self = Self::Spaces(2);

    /// Append `level` indentation units to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', level * usize::from(*width)))
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}
