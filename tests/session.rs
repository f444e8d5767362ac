use bblisp::session::{Session, located};
use pretty_assertions::assert_eq;

fn run(session: Session<'_>, input: &[u8]) -> String {
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let out = run(Session::script("<stdin>"), b"(+ 1 2)\n(+ 1 \xff)\n(+ 3 4)\n");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "3");
    assert!(lines[1].starts_with("<stdin>:2:6: error: Unexpected token"),
            "unexpected diagnostic: {}",
            lines[1]);
    assert_eq!(lines[2], "7");
}

#[test]
fn script_diagnostics_name_the_file_and_line() {
    let script = b"(+ 1 2)\n\n(* 2 3\n(max 1 2))\n";

    assert_eq!(run(Session::script("calc.txt"), script),
               "3\n\
                calc.txt:3:1: error: Expected closing parenthesis ')' for this '(' but none found.\n\
                calc.txt:4:10: error: Unexpected token: ')'.\n");
}

#[test]
fn script_skips_blank_lines() {
    assert_eq!(run(Session::script("calc.txt"), b"\n   \n(- 5)\r\n\n"), "-5\n");
}

#[test]
fn interactive_session_prompts_for_every_line() {
    assert_eq!(run(Session::interactive("> "), b"(+ 1 2)\n\n(/ 1 0)\n"),
               "> 3\n> ()\n> Error: division by zero\n> \n");
}

#[test]
fn interactive_line_numbers_count_every_line() {
    assert_eq!(run(Session::interactive(""), b"1\n2\n(\n"),
               "1\n2\n<stdin>:3:1: error: Expected closing parenthesis ')' for this '(' but none found.\n\n");
}

#[test]
fn missing_final_newline_still_evaluates() {
    assert_eq!(run(Session::script("calc.txt"), b"(* 6 7)"), "42\n");
}

#[test]
fn located_prefixes_origin_line_and_column() {
    let e = bblisp::evaluate("(+ 1 2").unwrap_err();

    assert_eq!(located(&e, "calc.txt", 12),
               "calc.txt:12:1: error: Expected closing parenthesis ')' for this '(' but none found.");
}
