/// The configuration value model.
///
/// Defines the `Value` enum, the tagged union every parsed value becomes:
/// integers, strings, arrays, unresolved bare names and nested blocks.
pub mod core;
/// Ordered key/value storage.
///
/// Defines `Config`, the insertion-ordered mapping produced by the parser for
/// the top level and for every block, and `SymbolTable`, the parse-wide
/// store of defined constants.
pub mod config;
/// JSON rendering.
///
/// Implements `serde::Serialize` for the value tree and provides the
/// `to_json` entry point used by the library facade and the CLI.
pub mod json;
