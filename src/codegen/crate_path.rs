//! Paths into the generated crate.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CaseConversionError;
use crate::text::{escape_reserved_keyword, Identifier};

/// Where a [`CratePath`] is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathAnchor {
    /// Absolute, rendered as `crate::a::b`
    Crate,
    /// Relative to the enclosing module, rendered as `a::b`
    Relative,
}

/// An immutable sequence of module names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CratePath {
    components: Vec<Identifier>,
    anchor: PathAnchor,
}

impl CratePath {
    /// The crate root itself (`crate`)
    pub fn crate_root() -> Self {
        Self {
            components: Vec::new(),
            anchor: PathAnchor::Crate,
        }
    }

    /// An absolute path below the crate root
    pub fn crate_local(components: Vec<Identifier>) -> Self {
        Self {
            components,
            anchor: PathAnchor::Crate,
        }
    }

    pub fn relative(components: Vec<Identifier>) -> Self {
        Self {
            components,
            anchor: PathAnchor::Relative,
        }
    }

    pub fn components(&self) -> &[Identifier] {
        &self.components
    }

    pub fn anchor(&self) -> PathAnchor {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn last_component(&self) -> Option<&Identifier> {
        self.components.last()
    }

    /// A new path with `component` appended
    pub fn append(&self, component: Identifier) -> Self {
        let mut components = self.components.clone();
        components.push(component);
        Self {
            components,
            anchor: self.anchor,
        }
    }

    /// The path made of the first `len` components, same anchor
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            components: self.components[..len.min(self.components.len())].to_vec(),
            anchor: self.anchor,
        }
    }
}

impl fmt::Display for CratePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.components.len() + 1);
        if self.anchor == PathAnchor::Crate {
            parts.push("crate".to_string());
        }
        parts.extend(
            self.components
                .iter()
                .map(|c| escape_reserved_keyword(&c.to_string())),
        );
        f.write_str(&parts.join("::"))
    }
}

impl Serialize for CratePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A type name together with the module that defines it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RustType {
    pub path: CratePath,
    pub name: String,
}

impl RustType {
    /// Fails if `name` cannot be rendered in PascalCase
    pub fn new(path: CratePath, name: &Identifier) -> Result<Self, CaseConversionError> {
        Ok(Self {
            path,
            name: name.to_pascal_case()?,
        })
    }
}

impl fmt::Display for RustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.path, self.name)
    }
}
