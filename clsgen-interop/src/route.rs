//! HTTP route methods.

use std::{fmt, str::FromStr};

use clsgen_cls::{Annotations, DocString, Method, MethodArgument, Value};

/// HTTP verb invoked by a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// The adapter method name, e.g. `Post` for `POST`.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Patch => "Patch",
            Self::Delete => "Delete",
            Self::Head => "Head",
            Self::Options => "Options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb().to_ascii_uppercase())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            "head" => Ok(Self::Head),
            "options" => Ok(Self::Options),
            other => Err(format!("unknown HTTP method '{}'", other)),
        }
    }
}

/// A method forwarding its request message to an HTTP call.
///
/// ```text
/// Method AddPet(pInput As Test.AddPetRequest, Output pOutput As Ens.Response) As %Status [ CodeMode = expression ]
/// ..Post("/pet", pInput, .pOutput)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub request: String,
    pub response: String,
    pub http_method: HttpMethod,
    pub url: String,
    /// Extra method keywords, written before `CodeMode`.
    pub keywords: Annotations,
    pub doc: DocString,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        request: impl Into<String>,
        response: impl Into<String>,
        http_method: HttpMethod,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            request: request.into(),
            response: response.into(),
            http_method,
            url: url.into(),
            keywords: Annotations::new(),
            doc: DocString::new(),
        }
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

    pub fn expression(&self) -> String {
        format!(
            "..{}(\"{}\", pInput, .pOutput)",
            self.http_method.verb(),
            self.url
        )
    }

    pub fn to_method(&self) -> Method {
        let mut method = Method::new(&self.name)
            .argument(MethodArgument::typed("pInput", &self.request))
            .argument(MethodArgument::typed("pOutput", &self.response).output())
            .returns("%Status")
            .doc(self.doc.clone());
        method.keywords = self.keywords.clone();
        method.expression(self.expression())
    }
}

impl From<Route> for Method {
    fn from(route: Route) -> Self {
        route.to_method()
    }
}
