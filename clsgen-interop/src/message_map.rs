//! XML routing table for business operations.

use clsgen_codegen::CodeBuilder;
use indexmap::IndexMap;

/// Maps message types to the method handling them.
///
/// Renders the `<MapItems>` document embedded in a `MessageMap` XData
/// block. Entries keep insertion order; re-inserting a message type
/// replaces its method in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMap {
    items: IndexMap<String, String>,
}

impl MessageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, message_type: impl Into<String>, method: impl Into<String>) {
        self.items.insert(message_type.into(), method.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Render the document with 2-space indentation and no trailing newline.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return "<MapItems/>".to_string();
        }

        CodeBuilder::xml()
            .block_with_close("<MapItems>", "</MapItems>", |b| {
                b.each(&self.items, |b, (message_type, method)| {
                    b.block_with_close(
                        &format!("<MapItem MessageType=\"{}\">", escape_attr(message_type)),
                        "</MapItem>",
                        |b| b.line(&format!("<Method>{}</Method>", escape_text(method))),
                    )
                })
            })
            .build()
            .trim_end()
            .to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (message_type, method) in iter {
            map.insert(message_type, method);
        }
        map
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
