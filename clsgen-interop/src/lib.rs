//! Interoperability class builders layered on the `clsgen-cls` model.
//!
//! Every builder here produces plain [`Class`](clsgen_cls::Class) or
//! [`Method`](clsgen_cls::Method) values through the public model API:
//!
//! - [`RequestClass`] / [`ResponseClass`] - message classes for HTTP calls
//! - [`Route`] - an expression method forwarding a request to an HTTP verb
//! - [`BusinessOperation`] - an operation class with its `MessageMap`
//! - [`MessageMap`] - the XML routing table embedded as `XData`

mod message;
mod message_map;
mod operation;
mod route;

pub use message::{Location, RequestClass, ResponseClass};
pub use message_map::MessageMap;
pub use operation::BusinessOperation;
pub use route::{HttpMethod, Route};
