//! Shared code generation utilities for clsgen.
//!
//! This crate provides language-agnostic primitives used by the class
//! model (`clsgen-cls`) and the composite builders layered on top of it:
//!
//! - [`CodeBuilder`] - Fluent API for building indented text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
