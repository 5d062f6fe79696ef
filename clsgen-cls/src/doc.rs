//! Documentation comments preceding a class or member.

use clsgen_codegen::{CodeFragment, Renderable};

/// Documentation attached to a class or component.
///
/// Holds either a single string or an ordered sequence of strings; every
/// line of every entry becomes one `///` comment line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocString {
    entries: Vec<String>,
}

impl DocString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The comment lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().flat_map(|entry| entry.lines())
    }
}

impl Renderable for DocString {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::line("///")
                } else {
                    CodeFragment::doc(line)
                }
            })
            .collect()
    }
}

impl From<&str> for DocString {
    fn from(s: &str) -> Self {
        Self {
            entries: vec![s.to_string()],
        }
    }
}

impl From<String> for DocString {
    fn from(s: String) -> Self {
        Self { entries: vec![s] }
    }
}

impl From<Vec<String>> for DocString {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl From<Vec<&str>> for DocString {
    fn from(entries: Vec<&str>) -> Self {
        Self {
            entries: entries.into_iter().map(str::to_string).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for DocString {
    fn from(entries: [&str; N]) -> Self {
        Self {
            entries: entries.into_iter().map(str::to_string).collect(),
        }
    }
}
