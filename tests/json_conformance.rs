//! Parser and serializer conformance tests.
//!
//! These tests pin the observable contract: exact syntax error messages,
//! escape decoding, number formatting, structural equality and the mutation
//! surface.

use picojson::json::{parse, parse_with_limits, stringify, stringify_pretty, Limits, Value};
use picojson::Error;

/// Escape text `\uXXXX` for `code`.
fn u(code: &str) -> String {
    format!("\\u{code}")
}

fn syntax_message(input: &str) -> String {
    match parse(input) {
        Ok(value) => panic!("expected a syntax error for {input:?}, got {value:?}"),
        Err(err) => {
            assert!(err.is_syntax(), "expected a syntax error, got {err:?}");
            err.to_string()
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn literal_true_parses() {
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
}

#[test]
fn literal_false_parses() {
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
}

#[test]
fn literal_null_parses() {
    assert_eq!(parse("null").unwrap(), Value::Null);
}

#[test]
fn literal_surrounding_whitespace_ignored() {
    assert_eq!(parse(" \t\r\n true \r\n").unwrap(), Value::Bool(true));
}

#[test]
fn literal_nan_and_infinity_rejected() {
    assert_eq!(syntax_message("NaN"), "syntax error at line 1 near: NaN");
    assert_eq!(syntax_message("Infinity"), "syntax error at line 1 near: Infinity");
    assert_eq!(syntax_message("-Infinity"), "syntax error at line 1 near: Infinity");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn number_fraction_parses() {
    assert_eq!(parse("41.5").unwrap(), Value::Number(41.5));
}

#[test]
fn number_integer_is_a_double() {
    assert_eq!(parse("2").unwrap(), Value::Number(2.0));
    assert_eq!(parse("2").unwrap(), parse("2.0").unwrap());
    assert_eq!(parse("2").unwrap(), parse("20e-1").unwrap());
}

#[test]
fn number_exponents_parse() {
    assert_eq!(parse("1e3").unwrap(), Value::Number(1000.0));
    assert_eq!(parse("1E+3").unwrap(), Value::Number(1000.0));
    assert_eq!(parse("-5e-1").unwrap(), Value::Number(-0.5));
}

#[test]
fn number_beyond_safe_integers_parses() {
    assert_eq!(
        parse("9007199254740993").unwrap(),
        Value::Number(9007199254740992.0)
    );
}

#[test]
fn number_overflow_rejected() {
    assert_eq!(syntax_message("[1e400]"), "syntax error at line 1 near: 1e400]");
}

#[test]
fn number_malformed_rejected() {
    assert_eq!(syntax_message("+1"), "syntax error at line 1 near: +1");
    assert_eq!(syntax_message(".5"), "syntax error at line 1 near: .5");
    assert_eq!(syntax_message("1.e5"), "syntax error at line 1 near: e5");
    assert_eq!(syntax_message("00"), "syntax error at line 1 near: 0");
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn string_plain_parses() {
    assert_eq!(parse(r#""hello""#).unwrap(), Value::from("hello"));
}

#[test]
fn string_simple_escapes_decode() {
    assert_eq!(
        parse("\"\\\"\\\\\\/\\b\\f\\n\\r\\t\"").unwrap(),
        Value::from("\"\\/\x08\x0C\n\r\t")
    );
}

#[test]
fn string_unicode_escapes_decode_to_utf8() {
    let input = format!("\"{}{}{}{}\"", u("0061"), u("30af"), u("30ea"), u("30b9"));
    let value = parse(&input).unwrap();
    assert_eq!(
        value.as_str().unwrap().as_bytes(),
        b"a\xe3\x82\xaf\xe3\x83\xaa\xe3\x82\xb9"
    );
}

#[test]
fn string_surrogate_pair_decodes_to_one_code_point() {
    let input = format!("\"{}{}\"", u("d840"), u("dc0b"));
    let value = parse(&input).unwrap();
    assert_eq!(value.as_str().unwrap().as_bytes(), b"\xf0\xa0\x80\x8b");
    assert_eq!(value.as_str().unwrap().chars().count(), 1);
}

#[test]
fn string_uppercase_hex_accepted() {
    let input = format!("\"{}{}\"", u("D83D"), u("DE00"));
    assert_eq!(parse(&input).unwrap(), Value::from("\u{1F600}"));
}

#[test]
fn string_raw_utf8_passes_through() {
    assert_eq!(
        parse("\"caf\u{e9} \u{2000B}\"").unwrap(),
        Value::from("caf\u{e9} \u{2000B}")
    );
}

#[test]
fn string_lone_surrogates_rejected() {
    let high_only = format!("\"{}\"", u("d840"));
    assert_eq!(syntax_message(&high_only), "syntax error at line 1 near: \"");

    let low_only = format!("\"{}\"", u("dc0b"));
    assert_eq!(
        syntax_message(&low_only),
        format!("syntax error at line 1 near: {}\"", u("dc0b"))
    );
}

#[test]
fn string_unknown_escape_rejected() {
    assert_eq!(syntax_message(r#""\q""#), "syntax error at line 1 near: q\"");
}

#[test]
fn string_raw_line_break_rejected() {
    assert_eq!(syntax_message("\"abc\nd\""), "syntax error at line 1 near: ");
}

#[test]
fn string_raw_tab_rejected() {
    assert_eq!(syntax_message("\"a\tb\""), "syntax error at line 1 near: b\"");
}

#[test]
fn string_unterminated_rejected() {
    assert_eq!(syntax_message("[\"abc"), "syntax error at line 1 near: ");
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn container_empty_array() {
    let value = parse("[]").unwrap();
    assert!(value.as_array().unwrap().is_empty());
}

#[test]
fn container_empty_object() {
    let value = parse("{}").unwrap();
    assert!(value.as_object().unwrap().is_empty());
}

#[test]
fn container_array_of_mixed_values() {
    let value = parse(r#"[1,true,"hello"]"#).unwrap();
    assert_eq!(value, Value::Array(vec![1.0.into(), true.into(), "hello".into()]));
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn container_object_lookup() {
    let value = parse(r#"{ "a": true }"#).unwrap();
    assert_eq!(value.get("a"), Ok(&Value::Bool(true)));
    assert!(!value.contains_key("z"));
    assert_eq!(value.get("z"), Err(Error::KeyNotFound("z".to_string())));
}

#[test]
fn container_duplicate_keys_last_wins() {
    let value = parse(r#"{"a": 1, "a": 2}"#).unwrap();
    assert_eq!(value, parse(r#"{"a": 2}"#).unwrap());
}

#[test]
fn container_duplicate_keys_after_unescape_last_wins() {
    let input = format!(r#"{{"A": 1, "{}": 2}}"#, u("0041"));
    assert_eq!(parse(&input).unwrap(), parse(r#"{"A": 2}"#).unwrap());
}

// ============================================================================
// Syntax error messages
// ============================================================================

#[test]
fn error_literal_mismatch() {
    assert_eq!(syntax_message("falsoa"), "syntax error at line 1 near: oa");
}

#[test]
fn error_object_closed_by_bracket() {
    assert_eq!(syntax_message("{]"), "syntax error at line 1 near: ]");
}

#[test]
fn error_control_character_on_second_line() {
    assert_eq!(syntax_message("\n\x08bell"), "syntax error at line 2 near: bell");
}

#[test]
fn error_line_break_inside_string() {
    assert_eq!(syntax_message("\"abc\nd\""), "syntax error at line 1 near: ");
}

#[test]
fn error_context_stops_at_line_end() {
    assert_eq!(
        syntax_message("[1,\n  oops, 2,\n  3]"),
        "syntax error at line 2 near: oops, 2,"
    );
}

#[test]
fn error_missing_colon() {
    assert_eq!(syntax_message(r#"{"a" true}"#), "syntax error at line 1 near: true}");
}

#[test]
fn error_non_string_key() {
    assert_eq!(syntax_message("{a:1}"), "syntax error at line 1 near: a:1}");
}

#[test]
fn error_trailing_comma() {
    assert_eq!(syntax_message("[1, 2,]"), "syntax error at line 1 near: ]");
    assert_eq!(syntax_message(r#"{"a":1,}"#), "syntax error at line 1 near: }");
}

#[test]
fn error_missing_close() {
    assert_eq!(syntax_message("[1, 2"), "syntax error at line 1 near: ");
    assert_eq!(syntax_message("{\"a\": 1\n"), "syntax error at line 2 near: ");
}

#[test]
fn error_trailing_content() {
    assert_eq!(syntax_message("{} {}"), "syntax error at line 1 near: {}");
    assert_eq!(syntax_message("1\n2"), "syntax error at line 2 near: 2");
}

#[test]
fn error_nesting_limit_is_distinct() {
    let err = parse(&"[".repeat(1000)).unwrap_err();
    assert!(!err.is_syntax());
    assert!(err.is_limit());
    assert_eq!(err, Error::NestingTooDeep { line: 1, limit: 128 });
}

#[test]
fn error_strict_limits() {
    let big = format!("\"{}\"", "x".repeat(70 * 1024));
    assert!(matches!(
        parse_with_limits(&big, Limits::strict()),
        Err(Error::StringTooLong { .. })
    ));
    assert!(parse(&big).is_ok());
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn stringify_scalars() {
    assert_eq!(stringify(&Value::Bool(true)), "true");
    assert_eq!(stringify(&Value::Bool(false)), "false");
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::from("hello")), r#""hello""#);
}

#[test]
fn stringify_integral_number_without_point() {
    assert_eq!(stringify(&Value::Number(42.0)), "42");
    assert_eq!(stringify(&Value::Number(-7.0)), "-7");
}

#[test]
fn stringify_fractional_number() {
    assert_eq!(stringify(&Value::Number(41.5)), "41.5");
}

#[test]
fn stringify_containers() {
    let value = parse(r#"{ "b": true, "a": [1, 2, "three"], "d": 2 }"#).unwrap();
    assert_eq!(stringify(&value), r#"{"b":true,"a":[1,2,"three"],"d":2}"#);
}

#[test]
fn stringify_escapes_round_trip() {
    let value = Value::from("quote\" slash/ back\\ nl\n bell\x07 del\x7f \u{30af}");
    let text = stringify(&value);
    assert!(!text.contains('\n'));
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn stringify_pretty_round_trips() {
    let value = parse(r#"{"a":[1,{"b":null}],"c":"d"}"#).unwrap();
    let pretty = stringify_pretty(&value);
    assert!(pretty.contains("\n  \"a\": [\n"));
    assert_eq!(parse(&pretty).unwrap(), value);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn equality_objects_ignore_order() {
    let v1 = parse(r#"{ "b": true, "a": [1,2,"three"], "d": 2 }"#).unwrap();
    let v2 = parse(r#"{ "d": 2.0, "b": true, "a": [1,2,"three"] }"#).unwrap();
    assert_eq!(v1, v2);
}

#[test]
fn equality_arrays_respect_order() {
    assert_ne!(parse("[1,2]").unwrap(), parse("[2,1]").unwrap());
}

#[test]
fn equality_detects_nested_difference() {
    let v1 = parse(r#"{ "b": true, "a": [1,2,"three"], "d": 2 }"#).unwrap();
    let v2 = parse(r#"{ "d": 2.0, "a": [1,"three"], "b": true }"#).unwrap();
    assert_ne!(v1, v2);
}

#[test]
fn equality_no_cross_kind_coercion() {
    assert_ne!(parse("1").unwrap(), parse("true").unwrap());
    assert_ne!(parse("0").unwrap(), parse("null").unwrap());
    assert_ne!(parse(r#""1""#).unwrap(), parse("1").unwrap());
    assert_ne!(parse("[]").unwrap(), parse("{}").unwrap());
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn mutation_delete_key_and_nested_value() {
    let mut value = parse(r#"{ "b": true, "a": [1,2,"three"], "d": 2 }"#).unwrap();
    value.delete_key("b");
    value
        .get_mut("a")
        .unwrap()
        .delete_value(&Value::from("three"));
    assert_eq!(value, parse(r#"{ "a": [1,2], "d": 2 }"#).unwrap());
}

#[test]
fn mutation_delete_missing_is_noop() {
    let mut value = parse(r#"{"a":[1]}"#).unwrap();
    assert_eq!(value.delete_key("zzz"), None);
    assert_eq!(value.get_mut("a").unwrap().delete_value(&Value::Null), None);
    assert_eq!(value, parse(r#"{"a":[1]}"#).unwrap());
}

#[test]
fn mutation_delete_value_matches_structurally() {
    let mut value = parse(r#"[{"x":[1,2]}, {"x":[2,1]}, {"x":[1,2]}]"#).unwrap();
    let needle = parse(r#"{"x":[1,2.0]}"#).unwrap();
    assert!(value.delete_value(&needle).is_some());
    assert_eq!(value, parse(r#"[{"x":[2,1]}, {"x":[1,2]}]"#).unwrap());
}
