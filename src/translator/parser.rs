/// Core parsing logic.
///
/// Contains the `Parser` itself, the entry loop shared by the top level and
/// blocks, and the `define` and key/value forms.
pub mod core;

/// Value parsing.
///
/// Parses literals, arrays, blocks, bare names and constant expression
/// regions, handing region tokens to the evaluator as they are read.
pub mod value;

/// Utility functions for the parser.
///
/// Provides token expectations and the comma-separated list helper used by
/// arrays.
pub mod utils;
