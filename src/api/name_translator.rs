//! Names for endpoint path segments.

use regex::Regex;

use crate::codegen::config::GeneratorConfig;
use crate::error::CodegenError;

/// A regex with a `name` group that picks the usable part of a segment
#[derive(Debug, Clone)]
pub struct NameMapper {
    pattern: Regex,
}

impl NameMapper {
    pub fn new(pattern: &str) -> Result<Self, CodegenError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CodegenError::Config(format!("invalid path name pattern '{}': {}", pattern, e)))?;

        if !pattern.capture_names().any(|name| name == Some("name")) {
            return Err(CodegenError::Config(format!(
                "path name pattern '{}' has no 'name' capture group",
                pattern
            )));
        }

        Ok(Self { pattern })
    }

    pub fn translate<'a>(&self, segment: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(segment)
            .and_then(|captures| captures.name("name"))
            .map(|m| m.as_str())
    }
}

/// Ordered name mappers; the first one that matches a segment wins
///
/// With the default patterns `Chassis` stays `Chassis`, `{ChassisId}`
/// becomes `ChassisId`, `ComputerSystem.Reset` becomes `Reset` and
/// `$metadata` becomes `metadata`.
#[derive(Debug, Clone)]
pub struct PathNameTranslator {
    mappers: Vec<NameMapper>,
}

impl PathNameTranslator {
    pub fn new(mappers: Vec<NameMapper>) -> Self {
        Self { mappers }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CodegenError> {
        let mappers = config
            .path_name_patterns
            .iter()
            .map(|pattern| NameMapper::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(mappers))
    }

    pub fn translate_segment<'a>(&self, segment: &'a str) -> Option<&'a str> {
        self.mappers.iter().find_map(|mapper| mapper.translate(segment))
    }

    /// The name of an endpoint: its last path segment, translated
    pub fn translate(&self, path: &str) -> Result<String, CodegenError> {
        let segment = last_segment(path);
        self.translate_segment(segment)
            .map(str::to_string)
            .ok_or_else(|| CodegenError::UntranslatableSegment {
                segment: segment.to_string(),
                path: path.to_string(),
            })
    }
}

pub(crate) fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
