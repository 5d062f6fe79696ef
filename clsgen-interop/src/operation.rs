//! Business operation classes.

use clsgen_cls::{Class, Component, XData};

use crate::{MessageMap, Route};

const SUPERCLASS: &str = "Ens.BusinessOperation";

/// A business operation dispatching request messages to route methods.
///
/// Renders the routes as methods followed by a `MessageMap` XData block
/// built from each route's request type.
#[derive(Debug, Clone)]
pub struct BusinessOperation {
    name: String,
    routes: Vec<Route>,
    components: Vec<Component>,
}

impl BusinessOperation {
    pub fn new(name: impl Into<String>, routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            name: name.into(),
            routes: routes.into_iter().collect(),
            components: Vec::new(),
        }
    }

    /// Add a component rendered before the routes.
    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn message_map(&self) -> MessageMap {
        self.routes
            .iter()
            .map(|route| (route.request.as_str(), route.name.as_str()))
            .collect()
    }

    pub fn into_class(self) -> Class {
        let message_map = self.message_map().render();
        Class::new(self.name)
            .extends(SUPERCLASS)
            .components(self.components)
            .components(self.routes.iter().map(|r| Component::Method(r.to_method())))
            .component(XData::new("MessageMap", message_map))
    }
}

impl From<BusinessOperation> for Class {
    fn from(operation: BusinessOperation) -> Self {
        operation.into_class()
    }
}
