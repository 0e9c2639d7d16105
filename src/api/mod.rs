//! Endpoint naming: the path table to a tree of handler traits.

pub mod endpoint;
pub mod name_translator;
pub mod path_map;
pub mod trait_context;

pub use endpoint::ApiEndpoint;
pub use name_translator::{NameMapper, PathNameTranslator};
pub use path_map::{project, EndpointGraph};
pub use trait_context::{TraitContext, TraitContextFactory};
