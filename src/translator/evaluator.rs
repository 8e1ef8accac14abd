/// The postfix stack machine.
///
/// Contains the `Evaluator` with its operand stack, the `Operand` type and the
/// resolution of names and seed operands against the symbol table.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * /` over integer and string operands, including floor
/// division and string concatenation.
pub mod binary;

/// Built-in function evaluation.
///
/// Implements `abs`, the only built-in function of the language.
pub mod function;
