//! Property declarations.

use std::fmt;

use clsgen_codegen::{CodeFragment, Renderable};

use crate::{Annotations, DocString, Value};

/// Collection kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    List,
    Array,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Array => f.write_str("array"),
        }
    }
}

/// A `Property` member.
///
/// Type parameters (`params`) and keywords are kept apart and render as two
/// separate brackets:
///
/// ```text
/// Property TestAbc123 As %String(MAXLEN = 50) [ Deprecated ];
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub collection: Option<Collection>,
    pub params: Annotations,
    pub keywords: Annotations,
    pub doc: DocString,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            collection: None,
            params: Annotations::new(),
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
    }

    pub fn collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn list(self) -> Self {
        self.collection(Collection::List)
    }

    pub fn array(self) -> Self {
        self.collection(Collection::Array)
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.set(name, value);
        self
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

    /// The single declaration line, including the trailing `;`.
    pub fn declaration(&self) -> String {
        let mut line = format!("Property {} As ", self.name);
        if let Some(collection) = self.collection {
            line.push_str(&format!("{} Of ", collection));
        }
        line.push_str(&self.ty);
        if let Some(params) = self.params.param_bracket() {
            line.push_str(&params);
        }
        if let Some(keywords) = self.keywords.keyword_bracket() {
            line.push(' ');
            line.push_str(&keywords);
        }
        line.push(';');
        line
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Line(self.declaration()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_property() {
        let prop = Property::new("status", "%String");
        assert_eq!(prop.declaration(), "Property status As %String;");
    }

    #[test]
    fn test_list_collection() {
        let prop = Property::new("Body", "Test.Object").list();
        assert_eq!(prop.declaration(), "Property Body As list Of Test.Object;");
    }

    #[test]
    fn test_array_collection() {
        let prop = Property::new("Tags", "%String").array();
        assert_eq!(prop.declaration(), "Property Tags As array Of %String;");
    }

    #[test]
    fn test_params_and_keywords_stay_separate() {
        let prop = Property::new("TestAbc123", "%String")
            .param("XMLNAME", "test_abc 123")
            .param("MAXLEN", 50)
            .keyword("Deprecated");
        assert_eq!(
            prop.declaration(),
            "Property TestAbc123 As %String(XMLNAME = \"test_abc 123\", MAXLEN = 50) [ Deprecated ];"
        );
    }

    #[test]
    fn test_keywords_only() {
        let prop = Property::new("Id", "%Integer")
            .keyword("Required")
            .keyword_value("InitialExpression", 0);
        assert_eq!(
            prop.declaration(),
            "Property Id As %Integer [ Required, InitialExpression = 0 ];"
        );
    }

    #[test]
    fn test_doc_precedes_declaration() {
        let prop = Property::new("Id", "%Integer").doc("Required property");
        assert_eq!(
            prop.to_fragments(),
            vec![
                CodeFragment::doc("Required property"),
                CodeFragment::line("Property Id As %Integer;"),
            ]
        );
    }
}
