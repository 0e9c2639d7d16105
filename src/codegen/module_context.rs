//! Module declarations of the generated crate.
//!
//! Every generated module is a [`ModuleContext`] holding the submodules it
//! declares. A submodule is either *named* (`pub mod name;`, referenced by
//! path) or *anonymous* (`mod name; pub use name::*;`), in which case its
//! items are re-exported and its name disappears from paths that point at
//! them.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::codegen::crate_path::CratePath;
use crate::text::{escape_reserved_keyword, Identifier};

/// How a parent module exposes a submodule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Declared and referenced by its own name
    Named,
    /// Declared privately, all public items re-exported into the parent
    Anonymous,
}

/// A submodule declaration as the emitter renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    pub identifier: Identifier,
    pub visibility: Visibility,
}

impl Submodule {
    /// The module name, escaped if it collides with a keyword
    pub fn name(&self) -> String {
        escape_reserved_keyword(&self.identifier.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.visibility == Visibility::Anonymous
    }
}

impl Serialize for Submodule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Submodule", 2)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("visibility", &self.visibility)?;
        state.end()
    }
}

/// One module of the generated crate and the submodules it declares
#[derive(Debug, Clone)]
pub struct ModuleContext {
    path: CratePath,
    // Keyed by identifier alone: the first visibility registered for a name sticks.
    submodules: IndexMap<Identifier, Visibility>,
}

impl ModuleContext {
    pub fn new(path: CratePath) -> Self {
        Self {
            path,
            submodules: IndexMap::new(),
        }
    }

    pub fn path(&self) -> &CratePath {
        &self.path
    }

    /// Items of a named submodule are not re-exported here, so references
    /// to them must spell out the submodule's name.
    pub fn add_named_submodule(&mut self, name: Identifier) {
        self.submodules.entry(name).or_insert(Visibility::Named);
    }

    /// Items of an anonymous submodule are re-exported from this module,
    /// which makes the submodule invisible when referring to them by path.
    pub fn add_anonymous_submodule(&mut self, name: Identifier) {
        self.submodules.entry(name).or_insert(Visibility::Anonymous);
    }

    /// Submodules in emission order: named first, then anonymous, each
    /// group sorted by identifier
    pub fn submodules(&self) -> Vec<Submodule> {
        let mut submodules: Vec<Submodule> = self
            .submodules
            .iter()
            .map(|(identifier, visibility)| Submodule {
                identifier: identifier.clone(),
                visibility: *visibility,
            })
            .collect();
        submodules.sort_by(|a, b| {
            a.visibility
                .cmp(&b.visibility)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        submodules
    }

    pub fn has_submodule(&self, name: &Identifier) -> bool {
        self.submodules.contains_key(name)
    }
}

impl Serialize for ModuleContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModuleContext", 2)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("submodules", &self.submodules())?;
        state.end()
    }
}

/// All modules of a generation run, keyed by the string form of their path
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ModuleRegistry {
    modules: IndexMap<String, ModuleContext>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The context for `path`, created if this is the first time it is seen
    pub fn context_mut(&mut self, path: &CratePath) -> &mut ModuleContext {
        self.modules
            .entry(path.to_string())
            .or_insert_with(|| ModuleContext::new(path.clone()))
    }

    /// Register every module on `path` below its first component
    ///
    /// The first component is the base module (`models`, `api`). Each later
    /// component is declared in the module just above it: named for the
    /// intermediate ones, anonymous for the leaf. Registering the same path
    /// again changes nothing.
    pub fn register_path(&mut self, path: &CratePath) {
        let components = path.components();
        for i in 1..components.len() {
            let parent = self.context_mut(&path.prefix(i));
            let component = components[i].clone();
            if i == components.len() - 1 {
                parent.add_anonymous_submodule(component);
            } else {
                parent.add_named_submodule(component);
            }
        }
    }

    pub fn add_named(&mut self, parent: &CratePath, child: Identifier) {
        self.context_mut(parent).add_named_submodule(child);
    }

    pub fn add_anonymous(&mut self, parent: &CratePath, child: Identifier) {
        self.context_mut(parent).add_anonymous_submodule(child);
    }

    pub fn get(&self, key: &str) -> Option<&ModuleContext> {
        self.modules.get(key)
    }

    pub fn get_path(&self, path: &CratePath) -> Option<&ModuleContext> {
        self.modules.get(&path.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleContext)> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
