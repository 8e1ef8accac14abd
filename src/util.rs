/// Numeric literal and arithmetic helpers.
///
/// This module provides the checked conversions the lexer uses to turn decimal
/// and hexadecimal digit runs into `i64` values, and the floor division used
/// by the constant expression evaluator.
///
/// All fallible functions report failure instead of wrapping or panicking.
pub mod num;
