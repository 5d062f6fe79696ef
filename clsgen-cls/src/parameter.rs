//! Class parameter declarations.

use clsgen_codegen::{CodeFragment, Renderable};

use crate::{Annotations, DocString, Value};

/// A `Parameter` member.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Option<String>,
    pub value: Option<Value>,
    pub keywords: Annotations,
    pub doc: DocString,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            value: None,
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
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

    /// `Parameter NAME As TYPE [ keywords ] = value;`, omitting absent parts.
    pub fn declaration(&self) -> String {
        let mut line = format!("Parameter {}", self.name);
        if let Some(ty) = &self.ty {
            line.push_str(&format!(" As {}", ty));
        }
        if let Some(keywords) = self.keywords.keyword_bracket() {
            line.push(' ');
            line.push_str(&keywords);
        }
        if let Some(value) = &self.value {
            line.push_str(&format!(" = {}", value));
        }
        line.push(';');
        line
    }
}

impl Renderable for Parameter {
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
    fn test_typed_text_value() {
        let param = Parameter::new("RESPONSECLASSNAME")
            .ty("STRING")
            .value("Ens.Response");
        assert_eq!(
            param.declaration(),
            "Parameter RESPONSECLASSNAME As STRING = \"Ens.Response\";"
        );
    }

    #[test]
    fn test_keyword_before_value() {
        let param = Parameter::new("%JSONENABLED").value(1).keyword("Deprecated");
        assert_eq!(
            param.declaration(),
            "Parameter %JSONENABLED [ Deprecated ] = 1;"
        );
    }

    #[test]
    fn test_bare_parameter() {
        assert_eq!(Parameter::new("FLAG").declaration(), "Parameter FLAG;");
    }
}
