//! Parsers for the two shapes of schema identifier in a Redfish document.
//!
//! Most schemas are published per version as `Module_vX_Y_Z_Model`; the
//! rest are unversioned `Module_Model`. The model is always the last
//! token; the module keeps every segment before it, underscores included.
//! Each parser either recognises its shape or returns an
//! [`IdentifierParseError`]; [`SchemaIdentifier::parse`] chains them.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::IdentifierParseError;
use crate::text::Identifier;

static VERSIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<module>[A-Za-z0-9][A-Za-z0-9_-]*?)_(?P<version>v[0-9]+_[0-9]+_[0-9]+)_(?P<model>[A-Za-z0-9]+)$",
    )
    .expect("versioned identifier pattern is valid")
});

static UNVERSIONED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<module>[A-Za-z0-9][A-Za-z0-9_-]*)_(?P<model>[A-Za-z0-9]+)$")
        .expect("unversioned identifier pattern is valid")
});

/// `Chassis_v1_0_0_PowerState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedSchemaIdentifier {
    module: String,
    version: String,
    model: String,
}

impl VersionedSchemaIdentifier {
    pub fn parse(identifier: &str) -> Result<Self, IdentifierParseError> {
        let captures = VERSIONED
            .captures(identifier)
            .ok_or_else(|| IdentifierParseError {
                identifier: identifier.to_string(),
                shape: "a versioned",
            })?;

        Ok(Self {
            module: captures["module"].to_string(),
            version: captures["version"].to_string(),
            model: captures["model"].to_string(),
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The module and version as module path components
    pub fn module_path(&self) -> Vec<Identifier> {
        vec![Identifier::parse(&self.module), Identifier::parse(&self.version)]
    }
}

/// `Resource_Id`, `odata-v4_Context`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnversionedSchemaIdentifier {
    module: String,
    model: String,
}

impl UnversionedSchemaIdentifier {
    pub fn parse(identifier: &str) -> Result<Self, IdentifierParseError> {
        let captures = UNVERSIONED
            .captures(identifier)
            .ok_or_else(|| IdentifierParseError {
                identifier: identifier.to_string(),
                shape: "an unversioned",
            })?;

        Ok(Self {
            module: captures["module"].to_string(),
            model: captures["model"].to_string(),
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// A schema identifier of either shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIdentifier {
    Versioned(VersionedSchemaIdentifier),
    Unversioned(UnversionedSchemaIdentifier),
}

impl SchemaIdentifier {
    /// Try the versioned shape, then the unversioned one
    ///
    /// Only the unversioned failure is reported: an identifier of neither
    /// shape cannot be named.
    pub fn parse(identifier: &str) -> Result<Self, IdentifierParseError> {
        match VersionedSchemaIdentifier::parse(identifier) {
            Ok(versioned) => Ok(SchemaIdentifier::Versioned(versioned)),
            Err(_) => UnversionedSchemaIdentifier::parse(identifier).map(SchemaIdentifier::Unversioned),
        }
    }

    pub fn module(&self) -> &str {
        match self {
            SchemaIdentifier::Versioned(v) => v.module(),
            SchemaIdentifier::Unversioned(u) => u.module(),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            SchemaIdentifier::Versioned(v) => v.model(),
            SchemaIdentifier::Unversioned(u) => u.model(),
        }
    }

    /// `#Module.Version.Model` or `#Module.Model`
    pub fn odata_type(&self) -> String {
        match self {
            SchemaIdentifier::Versioned(v) => format!("#{}.{}.{}", v.module, v.version, v.model),
            SchemaIdentifier::Unversioned(u) => format!("#{}.{}", u.module, u.model),
        }
    }
}
