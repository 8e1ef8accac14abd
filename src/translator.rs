/// The evaluator module computes constant expressions.
///
/// The evaluator runs the postfix stack machine behind every `.{ ... }.`
/// region. It is driven by the parser one token at a time and reads the
/// constants defined so far from the symbol table.
///
/// # Responsibilities
/// - Pushes literals and resolved constants onto the operand stack.
/// - Applies `+ - * /` and `abs` with checked integer arithmetic.
/// - Reports evaluation errors such as division by zero or a malformed stack.
pub mod evaluator;
/// The lexer module declares the raw token grammar.
///
/// The lexer is generated by `logos` from the `RawToken` enum. It recognizes
/// literals, names, delimiters, operators and the `(define` form, and skips
/// whitespace and both comment styles.
///
/// # Responsibilities
/// - Matches every token of the language in a single pass.
/// - Unescapes string literals and converts numeric literals to `i64`.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module turns tokens into a configuration.
///
/// The parser pulls tokens on demand, records constants in the symbol table,
/// and builds the ordered configuration tree. Constant expressions are
/// evaluated as soon as they are read.
///
/// # Responsibilities
/// - Validates the grammar, reporting errors with line and column.
/// - Resolves constants and bare names.
/// - Applies last-write-wins semantics to repeated keys and constants.
pub mod parser;
/// The tokenizer module positions raw tokens.
///
/// Wraps the `logos` lexer in a pull-based cursor that attaches a 1-based line
/// and column to every token and yields an end-of-input token once the
/// source is exhausted.
pub mod tokenizer;
/// The value module defines the translated data.
///
/// This module declares the value tree the parser produces, the ordered
/// configuration map, the symbol table, and the JSON serialization of the
/// result.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Keeps keys in first-insertion order with last-write-wins values.
/// - Renders configurations as pretty or compact JSON.
pub mod value;
