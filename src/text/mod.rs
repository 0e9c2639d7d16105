//! Identifier model shared by every naming stage.

pub mod identifier;

pub use identifier::{escape_reserved_keyword, CaseStyle, Identifier};
