//! Top-level class definitions.

use std::io::Write;

use clsgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::{Annotations, Component, DocString, Result, Value};

/// A class definition: header, ordered members and closing brace.
///
/// Superclasses and components render in insertion order. The name is
/// written as given, without validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub extends: Vec<String>,
    pub components: Vec<Component>,
    pub keywords: Annotations,
    pub doc: DocString,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            components: Vec::new(),
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
    }

    /// Add a superclass. The first one added is the primary superclass.
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends.push(superclass.into());
        self
    }

    pub fn extends_all(
        mut self,
        superclasses: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extends.extend(superclasses.into_iter().map(Into::into));
        self
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    /// Append a component to an existing class.
    pub fn push(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
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

    /// `Class <name>[ Extends ...][ [ keywords ]]`
    pub fn header(&self) -> String {
        let mut line = format!("Class {}", self.name);
        match self.extends.as_slice() {
            [] => {}
            [single] => line.push_str(&format!(" Extends {}", single)),
            many => line.push_str(&format!(" Extends ({})", many.join(", "))),
        }
        if let Some(keywords) = self.keywords.keyword_bracket() {
            line.push(' ');
            line.push_str(&keywords);
        }
        line
    }

    /// Check every component can be rendered in its declared mode.
    pub fn validate(&self) -> Result<()> {
        self.components.iter().try_for_each(Component::check)
    }

    /// Render the full class source.
    pub fn render(&self) -> Result<String> {
        self.validate()?;
        let mut builder = CodeBuilder::objectscript();
        builder.emit(self);
        Ok(builder.build())
    }

    /// Write the full class source to `out`.
    ///
    /// Nothing is written when validation fails.
    pub fn generate<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let source = self.render()?;
        out.write_all(source.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Line(self.header()));
        fragments.push(CodeFragment::line("{"));
        for component in &self.components {
            fragments.push(CodeFragment::blank());
            fragments.extend(component.to_fragments());
        }
        fragments.push(CodeFragment::blank());
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Method, Parameter, Property, XData};

    #[test]
    fn test_empty_class() {
        let class = Class::new("Demo.Empty");
        assert_eq!(class.render().unwrap(), "Class Demo.Empty\n{\n\n}\n");
    }

    #[test]
    fn test_single_superclass() {
        let class = Class::new("Demo.A").extends("%Persistent");
        assert_eq!(class.header(), "Class Demo.A Extends %Persistent");
    }

    #[test]
    fn test_superclass_order_is_kept() {
        let class = Class::new("Demo.A")
            .extends("%Persistent")
            .extends_all(["Ens.Request", "%JSON.Adaptor"]);
        assert_eq!(
            class.header(),
            "Class Demo.A Extends (%Persistent, Ens.Request, %JSON.Adaptor)"
        );
    }

    #[test]
    fn test_class_keywords_and_doc() {
        let class = Class::new("Test.Test")
            .keyword("Abstract")
            .doc("Sample class");
        assert_eq!(
            class.render().unwrap(),
            "/// Sample class\nClass Test.Test [ Abstract ]\n{\n\n}\n"
        );
    }

    #[test]
    fn test_components_keep_append_order() {
        let names = ["Zeta", "Alpha", "Mid", "Beta"];
        let mut class = Class::new("Demo.Order");
        for name in names {
            class.push(Property::new(name, "%String"));
        }
        let source = class.render().unwrap();
        let positions: Vec<usize> = names
            .iter()
            .map(|n| source.find(&format!("Property {} ", n)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_components_separated_by_blank_lines() {
        let class = Class::new("Demo.B")
            .component(Parameter::new("VERSION").value(1))
            .component(XData::new("Data", "payload"));
        assert_eq!(
            class.render().unwrap(),
            "Class Demo.B\n{\n\nParameter VERSION = 1;\n\nXData Data\n{\npayload\n}\n\n}\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let class = Class::new("Demo.C")
            .component(Method::new("A").body(["set x = 1", "quit x"]))
            .component(Component::class_method(Method::new("B").expression("1")));
        assert_eq!(class.render().unwrap(), class.render().unwrap());
    }

    #[test]
    fn test_generate_writes_nothing_on_invalid_method() {
        let class = Class::new("Demo.Bad").component(
            Method::new("Broken")
                .keyword_value("CodeMode", Value::raw("expression"))
                .body(["A", "B"]),
        );
        let mut out = Vec::new();
        let err = class.generate(&mut out).unwrap_err();
        assert!(matches!(err, Error::ExpressionBody { statements: 2, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_matches_render() {
        let class = Class::new("Demo.D").component(Property::new("A", "%String"));
        let mut out = Vec::new();
        class.generate(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), class.render().unwrap());
    }

    #[test]
    fn test_name_is_not_validated() {
        let class = Class::new("NoPackage");
        assert_eq!(class.header(), "Class NoPackage");
    }
}
