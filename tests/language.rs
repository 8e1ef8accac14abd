use std::fs;

use conflang::{
    convert_to_json,
    error::{Error, EvalError, LexError, ParseError},
    parse,
    translator::value::{config::Config, core::Value},
};
use serde_json::json;
use walkdir::WalkDir;

/// Values computed by each sample config, addressed by JSON pointer.
const SAMPLE_VALUES: &[(&str, &str, i64)] = &[("web_server.conf", "/server/client_max_body_size", 10_485_760),
                                             ("web_server.conf", "/server/listen/1", 443),
                                             ("smart_home.conf", "/smart_home/thermostat/spread", 150),
                                             ("smart_home.conf", "/smart_home/thermostat/min_temp", -50),
                                             ("smart_home.conf", "/smart_home/mqtt_broker/keepalive", 60),
                                             ("game_settings.conf", "/pixels", 2_073_600),
                                             ("game_settings.conf", "/frame_budget_us", 6944),
                                             ("game_settings.conf", "/audio/music", 33)];

/// Strings produced by each sample config, addressed by JSON pointer.
const SAMPLE_STRINGS: &[(&str, &str, &str)] = &[("ci_pipeline.conf", "/pipeline/test_stage/image", "node:16"),
                                                ("ci_pipeline.conf", "/pipeline/deploy_stage/environment", "staging"),
                                                ("ci_pipeline.conf", "/pipeline/test_stage/services/1/name", "redis"),
                                                ("smart_home.conf", "/smart_home/home_id", "smart_home_001"),
                                                ("game_settings.conf", "/title", "The \"Quiet\" Valley"),
                                                ("web_server.conf", "/server/ssl/enabled", "true")];

#[test]
fn sample_configs_translate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/configs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "conf"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let json = convert_to_json(&source, false).unwrap_or_else(|e| {
                                                       panic!("Config {path:?} failed:\n{source}\nError: {e}")
                                                   });
        let document: serde_json::Value = serde_json::from_str(&json).unwrap_or_else(|e| {
                                                                        panic!("Config {path:?} produced invalid JSON: {e}")
                                                                    });
        assert!(document.is_object(), "Config {path:?} is not a JSON object");

        let file = entry.file_name().to_string_lossy();
        let mut checked = 0;
        for (_, pointer, expected) in SAMPLE_VALUES.iter().filter(|(name, ..)| *name == file) {
            checked += 1;
            assert_eq!(document.pointer(pointer).and_then(serde_json::Value::as_i64),
                       Some(*expected),
                       "{pointer} in {path:?}");
        }
        for (_, pointer, expected) in SAMPLE_STRINGS.iter().filter(|(name, ..)| *name == file) {
            checked += 1;
            assert_eq!(document.pointer(pointer).and_then(serde_json::Value::as_str),
                       Some(*expected),
                       "{pointer} in {path:?}");
        }
        assert!(checked > 0, "Config {path:?} has no expected values");
    }

    assert!(count > 0, "No sample configs found in tests/configs");
}

fn assert_success(src: &str) -> Config {
    parse(src).unwrap_or_else(|e| panic!("Config failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match parse(src) {
        Ok(config) => panic!("Config succeeded but was expected to fail: {config}"),
        Err(e) => e,
    }
}

fn assert_json(src: &str, expected: &serde_json::Value) {
    let json = convert_to_json(src, true).unwrap_or_else(|e| panic!("Config failed: {e}"));
    let actual: serde_json::Value = serde_json::from_str(&json).expect("output is valid JSON");
    assert_eq!(&actual, expected, "JSON for {src:?}");
}

fn value(src: &str, key: &str) -> Value {
    assert_success(src).get(key)
                       .cloned()
                       .unwrap_or_else(|| panic!("Key {key:?} missing in {src:?}"))
}

#[test]
fn integer_literals() {
    assert_eq!(value("n 42", "n"), Value::Int(42));
    assert_eq!(value("n 007", "n"), Value::Int(7));
    assert_eq!(value("n 0x0A", "n"), Value::Int(10));
    assert_eq!(value("n 0xFF", "n"), Value::Int(255));
    assert_eq!(value("n 0XABCD", "n"), Value::Int(43981));
    assert_eq!(value("n 0xabcd", "n"), Value::Int(43981));
    assert_eq!(value("n 9223372036854775807", "n"), Value::Int(i64::MAX));
}

#[test]
fn malformed_integer_literals() {
    assert!(matches!(assert_failure("n 0x"),
                     Error::Parse(ParseError::Lexical { error: LexError::MissingDigits, .. })));
    assert!(matches!(assert_failure("n 9223372036854775808"),
                     Error::Parse(ParseError::Lexical { error: LexError::LiteralTooLarge, .. })));
    assert!(matches!(assert_failure("n 0x10000000000000000"),
                     Error::Parse(ParseError::Lexical { error: LexError::LiteralTooLarge, .. })));
}

#[test]
fn string_pair_becomes_json_object() {
    assert_json("key @\"value\"", &json!({ "key": "value" }));
    assert_eq!(convert_to_json("key @\"value\"", true).unwrap(), r#"{"key":"value"}"#);
}

#[test]
fn pretty_output_uses_two_space_indent() {
    let json = convert_to_json("a 1\nb [2]", false).unwrap();
    assert_eq!(json, "{\n  \"a\": 1,\n  \"b\": [\n    2\n  ]\n}");
}

#[test]
fn non_ascii_text_is_not_escaped() {
    let json = convert_to_json("city @\"Москва\"", true).unwrap();
    assert_eq!(json, r#"{"city":"Москва"}"#);
}

#[test]
fn empty_input_is_an_empty_object() {
    assert_eq!(convert_to_json("", true).unwrap(), "{}");
    assert_eq!(convert_to_json("% only a comment\n<# and\nanother #>", true).unwrap(), "{}");
}

#[test]
fn doubled_quotes() {
    assert_eq!(value(r#"s @"say ""hi""""#, "s"), Value::from("say \"hi\""));
    assert_eq!(value(r#"s @"plain text""#, "s"), Value::from("plain text"));
    assert_eq!(value(r#"s @"""#, "s"), Value::from(""));
}

#[test]
fn arrays_keep_order_and_types() {
    assert_json("ports [80, 443, 8080]", &json!({ "ports": [80, 443, 8080] }));
    assert_json("mixed [1, @\"two\", 0x03]", &json!({ "mixed": [1, "two", 3] }));
    assert_json("nested [[1, 2], [], [[3]]]", &json!({ "nested": [[1, 2], [], [[3]]] }));
    assert_json("empty []", &json!({ "empty": [] }));
}

#[test]
fn malformed_arrays() {
    assert!(matches!(assert_failure("a [1, 2,]"),
                     Error::Parse(ParseError::UnexpectedToken { context: "value", .. })));
    assert!(matches!(assert_failure("a [1 2]"),
                     Error::Parse(ParseError::ExpectedToken { line: 1, column: 6, .. })));
    assert!(matches!(assert_failure("a [,]"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn constants_are_substituted() {
    assert_eq!(value("(define base_port 8000)\nport .{base_port 80 +}.", "port"),
               Value::Int(8080));
    assert_eq!(value("(define host @\"localhost\")\nserver host", "server"),
               Value::from("localhost"));
    assert_eq!(value("(define ports [80, 443])\nlisten ports", "listen"),
               Value::Array(vec![Value::Int(80), Value::Int(443)]));
}

#[test]
fn constants_are_not_emitted() {
    let config = assert_success("(define base 1)\nkey base");
    assert_eq!(config.keys().collect::<Vec<_>>(), ["key"]);
}

#[test]
fn constants_build_on_each_other() {
    let src = "(define base 10)\n(define offset .{base 5 +}.)\nresult .{offset base *}.";
    assert_eq!(value(src, "result"), Value::Int(150));
}

#[test]
fn abs_and_floor_division() {
    assert_eq!(value("a .{5 10 - abs}.", "a"), Value::Int(5));
    assert_eq!(value("a .{7 2 /}.", "a"), Value::Int(3));
    assert_eq!(value("a .{0 7 - 2 /}.", "a"), Value::Int(-4));
    assert_eq!(value("a .{0 8 - 2 /}.", "a"), Value::Int(-4));
    assert!(matches!(assert_failure("a .{1 0 /}."),
                     Error::Eval(EvalError::DivisionByZero { line: 1, column: 9 })));
}

#[test]
fn seeded_expressions() {
    assert_eq!(value("(define base 100)\nport base .{1 +}.", "port"), Value::Int(101));
    assert_eq!(value("(define base 100)\nlist [base .{2 *}.]", "list"),
               Value::Array(vec![Value::Int(200)]));
    assert!(matches!(assert_failure("port nothing .{1 +}."),
                     Error::Eval(EvalError::InvalidSeed { ref name, line: 1, column: 6 }) if name == "nothing"));
}

#[test]
fn string_concatenation_through_constants() {
    let src = "(define image @\"node:\")\n(define v @\"16\")\n(define p @\"v\")\n\
               tag .{image v +}.\nlabel .{p 2 +}.";
    let config = assert_success(src);

    assert_eq!(config.get("tag"), Some(&Value::from("node:16")));
    assert_eq!(config.get("label"), Some(&Value::from("v2")));
}

#[test]
fn string_literal_inside_expression_is_fatal() {
    assert!(matches!(assert_failure("a .{@\"x\" 1 +}."),
                     Error::Parse(ParseError::UnexpectedToken { context: "constant expression",
                                                                line: 1,
                                                                column: 5,
                                                                .. })));
}

#[test]
fn expression_errors() {
    assert!(matches!(assert_failure("a .{missing 1 +}."),
                     Error::Eval(EvalError::UnknownConstant { .. })));
    assert!(matches!(assert_failure("a .{1 +}."),
                     Error::Eval(EvalError::NotEnoughOperands { expected: 2, found: 1, .. })));
    assert!(matches!(assert_failure("a .{1 2}."),
                     Error::Eval(EvalError::InvalidExpression { depth: 2, .. })));
    assert!(matches!(assert_failure("a .{}."),
                     Error::Eval(EvalError::InvalidExpression { depth: 0, .. })));
    assert!(matches!(assert_failure("(define s @\"x\")\na .{s 1 *}."),
                     Error::Eval(EvalError::TypeError { .. })));
    assert!(matches!(assert_failure("a .{9223372036854775807 1 +}."),
                     Error::Eval(EvalError::Overflow { .. })));
}

#[test]
fn undefined_bare_names_fall_back_to_strings() {
    assert_eq!(value("mode production", "mode"), Value::Name("production".into()));
    assert_json("mode production\nflags [on, off]",
                &json!({ "mode": "production", "flags": ["on", "off"] }));
}

#[test]
fn repeated_keys_and_redefinitions_are_last_write_wins() {
    let config = assert_success("a 1\nb 2\na 3");
    assert_eq!(config.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(config.get("a"), Some(&Value::Int(3)));

    assert_eq!(value("(define x 1)\n(define x 2)\ny x", "y"), Value::Int(2));
    assert_eq!(value("(define x 1)\ny x\n(define x 2)", "y"), Value::Int(1));
}

#[test]
fn blocks_nest() {
    assert_json("a { b { c 1 } }", &json!({ "a": { "b": { "c": 1 } } }));
    assert_json("a {}", &json!({ "a": {} }));
    assert_json("list [{ x 1 }, { x 2 }]", &json!({ "list": [{ "x": 1 }, { "x": 2 }] }));
}

#[test]
fn block_keys_keep_insertion_order() {
    let json = convert_to_json("outer { zeta 1 alpha 2 zeta 3 }", true).unwrap();
    assert_eq!(json, r#"{"outer":{"zeta":3,"alpha":2}}"#);
}

#[test]
fn defines_inside_blocks_are_global() {
    let config = assert_success("server { (define port 8080) listen port }\nproxy port");
    assert_eq!(config.get("proxy"), Some(&Value::Int(8080)));
    assert_eq!(config.get("server").and_then(|s| s.get("listen")), Some(&Value::Int(8080)));
}

#[test]
fn define_form_requires_close_paren() {
    assert_success("(define x 1)");
    assert!(matches!(assert_failure("(define x 1"),
                     Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("(define x 1 y 2)"),
                     Error::Parse(ParseError::ExpectedToken { line: 1, column: 13, .. })));
    assert!(matches!(assert_failure("(define 1 2)"),
                     Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("a 1 )"),
                     Error::Parse(ParseError::UnexpectedToken { context: "top level", .. })));
    assert!(matches!(assert_failure("(defin x 1)"),
                     Error::Parse(ParseError::Lexical { error: LexError::MalformedDefine { .. }, .. })));
}

#[test]
fn truncated_input_is_fatal() {
    assert!(matches!(assert_failure("a [1, 2"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { context: "array", .. })));
    assert!(matches!(assert_failure("a { b 1"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { context: "block", .. })));
    assert!(matches!(assert_failure("a .{1 2 +"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { context: "constant expression", .. })));
    assert!(matches!(assert_failure("a @\"open"),
                     Error::Parse(ParseError::Lexical { error: LexError::UnclosedString, .. })));
    assert!(matches!(assert_failure("a 1 <# open"),
                     Error::Parse(ParseError::Lexical { error: LexError::UnclosedComment, .. })));
    assert!(matches!(assert_failure("a"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { context: "value", .. })));
}

#[test]
fn structural_errors() {
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::UnexpectedToken { context: "top level", .. })));
    assert!(matches!(assert_failure("a ]"),
                     Error::Parse(ParseError::UnexpectedToken { context: "value", .. })));
    assert!(matches!(assert_failure("a }"),
                     Error::Parse(ParseError::UnexpectedToken { context: "value", .. })));
    assert!(matches!(assert_failure("a 1 }"),
                     Error::Parse(ParseError::UnexpectedToken { context: "top level", .. })));
    assert!(matches!(assert_failure("a $"),
                     Error::Parse(ParseError::UnexpectedCharacter { found: '$', .. })));
}

#[test]
fn errors_carry_line_and_column() {
    let error = assert_failure("a 1\nb [1, 2]\n  c .{x 1 +}.");
    assert_eq!((error.line(), error.column()), (3, 7));
    assert_eq!(error.to_string(), "Error at 3:7: Unknown constant 'x'.");

    let error = assert_failure("a 1\n\n   @");
    assert_eq!((error.line(), error.column()), (3, 4));
}

#[test]
fn first_error_in_source_order_wins() {
    let error = assert_failure("a .{1 0 /}. $");
    assert!(matches!(error, Error::Eval(EvalError::DivisionByZero { .. })));

    let error = assert_failure("a .{1 2}. $");
    assert!(matches!(error, Error::Eval(EvalError::InvalidExpression { .. })));
}

#[test]
fn names_and_whitespace_are_unicode() {
    assert_json("порт 80", &json!({ "порт": 80 }));
    assert_json("city_é 1", &json!({ "city_é": 1 }));
    assert_json("режим производство", &json!({ "режим": "производство" }));
    assert_json("a\u{a0}1\u{b}b\u{3000}2", &json!({ "a": 1, "b": 2 }));
    assert_eq!(value("(define базовый 8000)\nпорт .{базовый 80 +}.", "порт"), Value::Int(8080));
    assert!(matches!(assert_failure("Порт 80"),
                     Error::Parse(ParseError::UnexpectedCharacter { found: 'П', line: 1, column: 1 })));
}

#[test]
fn comments_are_ignored() {
    let src = "% leading comment\na 1 % trailing\n<# multi\nline #> b <# inline #> 2";
    let config = assert_success(src);

    assert_eq!(config.get("a"), Some(&Value::Int(1)));
    assert_eq!(config.get("b"), Some(&Value::Int(2)));
}
