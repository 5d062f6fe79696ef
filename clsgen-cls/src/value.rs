//! Literal values used by keywords, parameters and argument defaults.

use std::fmt;

/// A literal value, rendered according to its type.
///
/// Text is double-quoted, numbers are written as-is, booleans use the
/// `1`/`0` convention of the target language and lists are parenthesised.
/// Text is not escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    /// A token written verbatim, such as an identifier or expression.
    Raw(String),
}

impl Value {
    /// Create a quoted text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a verbatim value.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Whether the value has no content: empty text, raw or list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// The textual content of a `Text` or `Raw` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Raw(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "\"{}\"", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", if *b { 1 } else { 0 }),
            Self::List(items) => {
                let items = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({})", items)
            }
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_quoted() {
        assert_eq!(Value::from("Ens.Response").to_string(), "\"Ens.Response\"");
    }

    #[test]
    fn test_numbers_are_unquoted() {
        assert_eq!(Value::from(50).to_string(), "50");
        assert_eq!(Value::from(-3i64).to_string(), "-3");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_bool_uses_numeric_literal() {
        assert_eq!(Value::from(true).to_string(), "1");
        assert_eq!(Value::from(false).to_string(), "0");
    }

    #[test]
    fn test_list_is_bracketed() {
        let list = Value::List(vec![Value::raw("Demo.A"), Value::raw("Demo.B")]);
        assert_eq!(list.to_string(), "(Demo.A, Demo.B)");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "(1, 2)");
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(Value::from("a\"b").to_string(), "\"a\"b\"");
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::text("").is_empty());
        assert!(Value::raw("").is_empty());
        assert!(Value::List(Vec::new()).is_empty());
        assert!(!Value::text(" ").is_empty());
        assert!(!Value::Int(0).is_empty());
        assert!(!Value::Bool(false).is_empty());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::raw("expression").as_str(), Some("expression"));
        assert_eq!(Value::text("x").as_str(), Some("x"));
        assert_eq!(Value::Int(1).as_str(), None);
    }
}
