//! Formal method arguments.

use std::fmt;

use crate::Value;

/// How an argument is passed to a method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PassingMode {
    #[default]
    ByValue,
    ByRef,
    Output,
}

impl PassingMode {
    /// The signature prefix, if the mode has one.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::ByValue => None,
            Self::ByRef => Some("ByRef"),
            Self::Output => Some("Output"),
        }
    }
}

/// One formal parameter of a method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodArgument {
    pub name: String,
    pub ty: Option<String>,
    pub default: Option<Value>,
    pub mode: PassingMode,
}

impl MethodArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            mode: PassingMode::ByValue,
        }
    }

    /// Shorthand for an argument with a declared type.
    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name).ty(ty)
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn by_ref(mut self) -> Self {
        self.mode = PassingMode::ByRef;
        self
    }

    pub fn output(mut self) -> Self {
        self.mode = PassingMode::Output;
        self
    }
}

impl fmt::Display for MethodArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.mode.prefix() {
            write!(f, "{} ", prefix)?;
        }
        f.write_str(&self.name)?;
        if let Some(ty) = &self.ty {
            write!(f, " As {}", ty)?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}
