//! Class model and serializer for ObjectScript class definitions.
//!
//! A [`Class`] is built by the caller from an ordered list of
//! [`Component`]s and written out with [`Class::generate`]. Rendering never
//! mutates the model, so the same class can be rendered any number of times
//! with identical output.
//!
//! ```
//! use clsgen_cls::{Class, Property};
//!
//! let class = Class::new("Demo.Person")
//!     .extends("%Persistent")
//!     .component(Property::new("Name", "%String").keyword("Required"));
//!
//! let source = class.render().unwrap();
//! assert!(source.starts_with("Class Demo.Person Extends %Persistent\n{\n"));
//! assert!(source.contains("Property Name As %String [ Required ];"));
//! ```

mod annotations;
mod argument;
mod class;
mod component;
mod doc;
mod error;
mod file;
mod method;
mod parameter;
mod property;
mod value;
mod xdata;

pub use annotations::Annotations;
pub use argument::{MethodArgument, PassingMode};
pub use class::Class;
pub use component::Component;
pub use doc::DocString;
pub use error::{Error, Result};
pub use file::ClassFile;
pub use method::{CODE_MODE, Method, MethodBody, MethodKind};
pub use parameter::Parameter;
pub use property::{Collection, Property};
pub use value::Value;
pub use xdata::XData;
