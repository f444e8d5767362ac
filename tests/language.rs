use std::fs;

use bblisp::{
    error::ParseError,
    evaluate,
    interpreter::{parser::MAX_NESTING, value::core::Value},
    run_line,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_transcript(&content) {
            count += 1;
            assert_eq!(output_of(&input), expected, "input `{input}` in {path:?}");
        }
    }

    assert!(count > 0, "No transcripts found in tests/scripts");
}

/// Pairs every `> input` line with the line that follows it.
fn extract_transcript(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut lines = content.lines().filter(|line| !line.starts_with('#'));

    while let Some(line) = lines.next() {
        if let Some(input) = line.strip_prefix("> ") {
            let expected = lines.next().unwrap_or_else(|| panic!("missing output for `{input}`"));
            pairs.push((input.to_string(), expected.to_string()));
        }
    }

    pairs
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    run_line(src, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    text.strip_suffix('\n')
        .unwrap_or_else(|| panic!("output of `{src}` is not newline terminated"))
        .to_string()
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "input `{src}`");
}

#[test]
fn sum_of_many_operands() {
    assert_output("(+ 1 2 3)", "6");
    assert_output("(+ 1 2 3 4 5 6 7 8 9 10)", "55");
}

#[test]
fn unary_minus_negates() {
    assert_output("(- 5)", "-5");
    assert_output("(- -5)", "5");
    assert_output("(- 10 3 2)", "5");
}

#[test]
fn nested_expressions() {
    assert_output("(* 2 (+ 1 1))", "4");
    assert_output("(+ (* 2 3) (- 10 (/ 8 2)))", "12");
}

#[test]
fn min_and_max() {
    assert_output("(min 4 2 7)", "2");
    assert_output("(max 4 2 7)", "7");
    assert_output("(min 5)", "5");
}

#[test]
fn empty_group_is_not_an_error() {
    assert_output("()", "()");
    assert_output("", "()");
    assert_output("(())", "()");
}

#[test]
fn top_level_sequence_is_an_expression() {
    assert_output("+ 1 2", "3");
    assert_output("42", "42");
    assert_output("max", "max");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("(/ 7 2)", "3");
    assert_output("(/ -7 2)", "-3");
}

#[test]
fn division_by_zero_is_error() {
    assert_output("(/ 4 0)", "Error: division by zero");
    assert_output("(/ 4 0 (+ 1 1))", "Error: division by zero");
}

#[test]
fn errors_propagate_from_any_depth() {
    assert_output("(+ 1 (* 2 (/ 3 0)))", "Error: division by zero");
    assert_output("(+ 1 (* 2 99999999999999999999))", "Error: invalid number");
}

#[test]
fn first_error_wins() {
    assert_output("(+ (/ 1 0) 99999999999999999999)", "Error: division by zero");
    assert_output("(+ 99999999999999999999 (/ 1 0))", "Error: invalid number");
}

#[test]
fn head_must_be_a_symbol() {
    assert_output("(1 2 3)", "Error: S-expression does not start with symbol");
    assert_output("((+ 1 2) 3)", "Error: S-expression does not start with symbol");
}

#[test]
fn operands_must_be_numbers() {
    assert_output("(+ 1 +)", "Error: cannot operate on non-number");
    assert_output("(+ 1 ())", "Error: cannot operate on non-number");
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_output("(+ 9223372036854775807 1)", "-9223372036854775808");
    assert_output("(- -9223372036854775808)", "-9223372036854775808");
    assert_output("(/ -9223372036854775808 -1)", "-9223372036854775808");
}

#[test]
fn parse_errors_pass_through() {
    assert_output("(+ 1 2", "<stdin>:1:1: error: Expected closing parenthesis ')' for this '(' but none found.");
    assert_output("(+ 1 2))", "<stdin>:1:8: error: Unexpected token: ')'.");
    assert_output("(+ 1 x)", "<stdin>:1:6: error: Unexpected token: 'x'.");
}

#[test]
fn parse_error_points_at_offending_column() {
    assert_eq!(evaluate("(+ 1 (* 2 3)").unwrap_err().column(), 1);
    assert_eq!(evaluate("(+ 1 (* 2 3").unwrap_err().column(), 6);
    assert_eq!(evaluate("(min 1 2) )").unwrap_err().column(), 11);
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    let src = format!("{}7{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));

    assert_eq!(evaluate(&src).unwrap(), Value::Number(7));
}

#[test]
fn nesting_past_the_limit_is_a_parse_error() {
    let depth = MAX_NESTING + 1;
    let src = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(evaluate(&src).unwrap_err(),
               ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                            column: depth, });
}

#[test]
fn very_deep_nesting_does_not_overflow() {
    let depth = 100_000;
    let src = format!("{}{}", "(".repeat(depth), ")".repeat(depth));

    assert_output(&src,
                  &format!("<stdin>:1:{}: error: Expressions nested deeper than {MAX_NESTING} levels are not supported.",
                           MAX_NESTING + 1));
}
