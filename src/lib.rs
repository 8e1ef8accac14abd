//! # conflang
//!
//! conflang translates a small configuration language into JSON.
//! It tokenizes and parses a configuration, resolves named constants,
//! evaluates postfix constant expressions, and renders the resulting ordered
//! key/value tree as pretty or compact JSON.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    translator::{
        parser::core::Parser,
        value::{config::Config, json::to_json},
    },
};

/// Provides unified error types for tokenizing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while translating a
/// configuration. Every error that reaches the caller carries the line and
/// column of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the translation of a configuration.
///
/// This module ties together lexing, tokenizing, parsing, constant
/// evaluation and the value model to turn source text into an ordered
/// configuration tree.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, tokenizer, parser, evaluator and
///   value types.
/// - Manages the flow of tokens, constants and errors between phases.
pub mod translator;
/// General utilities for numeric literals and arithmetic.
///
/// This module provides checked conversions of decimal and hexadecimal digit
/// runs into `i64`, and the floor division used by constant expressions.
pub mod util;

/// Parses a configuration source into its ordered key/value tree.
///
/// Translation stops at the first error; no partial configuration is
/// returned.
///
/// # Errors
/// Returns the first lexical, structural or evaluation error in source order.
///
/// # Examples
/// ```
/// use conflang::{parse, translator::value::core::Value};
///
/// let config = parse("(define base 8000)\nport .{base 80 +}.\nname @\"web\"").unwrap();
/// assert_eq!(config.get("port"), Some(&Value::Int(8080)));
/// assert_eq!(config.get("name"), Some(&Value::from("web")));
///
/// let error = parse("port .{1 0 /}.").unwrap_err();
/// assert_eq!((error.line(), error.column()), (1, 12));
/// ```
pub fn parse(source: &str) -> Result<Config, Error> {
    Parser::new(source)?.parse()
}

/// Translates a configuration source into a JSON document.
///
/// The document is a single object whose keys appear in first-definition
/// order. With `compact` set the document is written on one line; otherwise
/// it is pretty-printed.
///
/// # Errors
/// Returns an error if translation fails, or if the configuration cannot be
/// serialized.
///
/// # Examples
/// ```
/// use conflang::convert_to_json;
///
/// let json = convert_to_json("key @\"value\"", true).unwrap();
/// assert_eq!(json, r#"{"key":"value"}"#);
///
/// // Undefined names inside an expression are an error.
/// assert!(convert_to_json("port .{base 1 +}.", false).is_err());
/// ```
pub fn convert_to_json(source: &str, compact: bool) -> Result<String, Box<dyn std::error::Error>> {
    let config = parse(source)?;

    Ok(to_json(&config, compact)?)
}
