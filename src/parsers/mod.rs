//! Parsing functionality for frontend sources
//!
//! Script extraction from single file components, module parsing with OXC, and
//! resolution of kit references from the parsed program.

pub mod ast_parser;
pub mod kit_alias;
pub mod kit_resolver;
pub mod script_extractor;

pub use ast_parser::ASTParser;
pub use kit_alias::KitAliases;
pub use kit_resolver::KitResolver;
pub use script_extractor::{component_script, extract_script};
