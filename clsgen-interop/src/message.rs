//! Request and response message classes.

use std::{fmt, str::FromStr};

use clsgen_cls::{Class, Component, DocString, Method, MethodArgument, Property};

const PERSISTENT: &str = "%Persistent";
const REQUEST: &str = "Ens.Request";
const RESPONSE: &str = "Ens.Response";
const HTTP_REQUEST: &str = "%Net.HttpRequest";

/// Where a request property is sent in the outgoing HTTP call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Query,
    Path,
    Body,
    Header,
    /// Accepted in mappings but not sent.
    Cookie,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Body => "body",
            Self::Header => "header",
            Self::Cookie => "cookie",
        };
        f.write_str(s)
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "path" => Ok(Self::Path),
            "body" => Ok(Self::Body),
            "header" => Ok(Self::Header),
            "cookie" => Ok(Self::Cookie),
            other => Err(format!("unknown parameter location '{}'", other)),
        }
    }
}

/// A request message carrying the parameters of an HTTP call.
///
/// The generated class extends `%Persistent` and `Ens.Request` and gets two
/// helper methods: `InitParams` copies query properties onto the outgoing
/// request and `InitHeaders` copies header properties (plus the content
/// type, when set).
#[derive(Debug, Clone)]
pub struct RequestClass {
    name: String,
    extends: Vec<String>,
    properties: Vec<(Property, Location)>,
    content_type: Option<String>,
    components: Vec<Component>,
    doc: DocString,
}

impl RequestClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            properties: Vec::new(),
            content_type: None,
            components: Vec::new(),
            doc: DocString::new(),
        }
    }

    /// Add a superclass after `%Persistent` and `Ens.Request`.
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends.push(superclass.into());
        self
    }

    pub fn property(mut self, property: Property, location: Location) -> Self {
        self.properties.push((property, location));
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Add a component rendered before the properties.
    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<DocString>) -> Self {
        self.doc = doc.into();
        self
    }

    fn names_at(&self, location: Location) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(move |(_, loc)| *loc == location)
            .map(|(prop, _)| prop.name.as_str())
    }

    fn init_params(&self) -> Method {
        Method::new("InitParams")
            .argument(MethodArgument::typed("pRequest", HTTP_REQUEST).by_ref())
            .body(
                self.names_at(Location::Query)
                    .map(|name| format!("Do pRequest.SetParam(\"{}\", ..{})", name, name)),
            )
    }

    fn init_headers(&self) -> Method {
        let mut method = Method::new("InitHeaders")
            .argument(MethodArgument::typed("pRequest", HTTP_REQUEST).by_ref())
            .body(
                self.names_at(Location::Header)
                    .map(|name| format!("Do pRequest.SetHeader(\"{}\", ..{})", name, name)),
            );
        if let Some(content_type) = &self.content_type {
            method.push_statement(format!(
                "Do pRequest.SetHeader(\"Content-Type\", \"{}\")",
                content_type
            ));
        }
        method
    }

    pub fn into_class(self) -> Class {
        let init_params = self.init_params();
        let init_headers = self.init_headers();
        Class::new(self.name)
            .extends_all([PERSISTENT, REQUEST])
            .extends_all(self.extends)
            .doc(self.doc)
            .components(self.components)
            .components(
                self.properties
                    .into_iter()
                    .map(|(prop, _)| Component::Property(prop)),
            )
            .component(init_params)
            .component(init_headers)
    }
}

impl From<RequestClass> for Class {
    fn from(request: RequestClass) -> Self {
        request.into_class()
    }
}

/// A response message, extending `%Persistent` and `Ens.Response`.
#[derive(Debug, Clone)]
pub struct ResponseClass {
    class: Class,
}

impl ResponseClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            class: Class::new(name).extends_all([PERSISTENT, RESPONSE]),
        }
    }

    /// Add a superclass after `%Persistent` and `Ens.Response`.
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.class = self.class.extends(superclass);
        self
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.class.push(component);
        self
    }

    pub fn doc(mut self, doc: impl Into<DocString>) -> Self {
        self.class = self.class.doc(doc);
        self
    }

    pub fn into_class(self) -> Class {
        self.class
    }
}

impl From<ResponseClass> for Class {
    fn from(response: ResponseClass) -> Self {
        response.into_class()
    }
}
