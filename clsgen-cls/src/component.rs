//! The closed set of class members.

use clsgen_codegen::{CodeFragment, Renderable};

use crate::{Method, MethodKind, Parameter, Property, Result, XData};

/// A renderable member of a [`Class`](crate::Class).
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Property(Property),
    Parameter(Parameter),
    Method(Method),
    ClassMethod(Method),
    XData(XData),
}

impl Component {
    /// Wrap a method as a class-level (static) method.
    pub fn class_method(method: Method) -> Self {
        Self::ClassMethod(method)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Parameter(p) => &p.name,
            Self::Method(m) | Self::ClassMethod(m) => &m.name,
            Self::XData(x) => &x.name,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Self::Method(m) | Self::ClassMethod(m) => Some(m),
            _ => None,
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        match self.as_method() {
            Some(method) => method.check(),
            None => Ok(()),
        }
    }
}

impl Renderable for Component {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Property(p) => p.to_fragments(),
            Self::Parameter(p) => p.to_fragments(),
            Self::Method(m) => m.fragments(MethodKind::Instance),
            Self::ClassMethod(m) => m.fragments(MethodKind::Class),
            Self::XData(x) => x.to_fragments(),
        }
    }
}

impl From<Property> for Component {
    fn from(p: Property) -> Self {
        Self::Property(p)
    }
}

impl From<Parameter> for Component {
    fn from(p: Parameter) -> Self {
        Self::Parameter(p)
    }
}

impl From<Method> for Component {
    fn from(m: Method) -> Self {
        Self::Method(m)
    }
}

impl From<XData> for Component {
    fn from(x: XData) -> Self {
        Self::XData(x)
    }
}
