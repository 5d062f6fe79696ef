//! Keyword and parameter annotation lists.

use indexmap::IndexMap;

use crate::Value;

/// An insertion-ordered mapping of annotation name to optional value.
///
/// The same type backs both annotation lists of a declaration: the keyword
/// bracket (`[ Required, InitialExpression = 0 ]`) and the type parameter
/// list (`(MAXLEN = 50)`). An entry without a value, or with an empty
/// one, renders as a bare flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    entries: IndexMap<String, Option<Value>>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a bare flag. An existing entry keeps its position.
    pub fn set_flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Set a `Name = value` entry. An existing entry keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(name.into(), Some(value.into()));
        self
    }

    /// Look up an entry. `Some(None)` means the name is present as a flag.
    pub fn get(&self, name: &str) -> Option<Option<&Value>> {
        self.entries.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Render the entries joined with `, ` in insertion order.
    pub fn render_entries(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| match value {
                Some(value) if !value.is_empty() => format!("{} = {}", name, value),
                _ => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render as a keyword bracket, `[ A, B = 1 ]`, or `None` when empty.
    pub fn keyword_bracket(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("[ {} ]", self.render_entries()))
    }

    /// Render as a type parameter list, `(A = 1, B = "x")`, or `None` when empty.
    pub fn param_bracket(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("({})", self.render_entries()))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Annotations
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}
