use std::io::{BufRead, Write};

use crate::{error::ParseError, evaluate};

/// Source name used for lines typed at the prompt.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// A read-eval-print loop over a stream of lines.
///
/// Each input line produces exactly one output line: the rendered result, or
/// a parse diagnostic of the form `<origin>:<line>:<column>: error: ...`.
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` so a bad line is
/// reported like any other malformed input and the loop carries on.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    /// Name shown in diagnostics, such as `<stdin>` or a file path.
    pub origin:           &'a str,
    /// Prompt written before each line, if any.
    pub prompt:           Option<&'a str>,
    /// Whether lines holding only whitespace are skipped instead of evaluated.
    pub skip_blank_lines: bool,
}

impl<'a> Session<'a> {
    /// A session reading lines typed at `prompt`.
    #[must_use]
    pub const fn interactive(prompt: &'a str) -> Self {
        Self { origin:           STDIN_ORIGIN,
               prompt:           Some(prompt),
               skip_blank_lines: false, }
    }

    /// A session evaluating the lines of a script named `origin`.
    #[must_use]
    pub const fn script(origin: &'a str) -> Self {
        Self { origin,
               prompt: None,
               skip_blank_lines: true }
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// # Errors
    /// Returns an error only if reading `input` or writing `out` fails.
    ///
    /// # Example
    /// ```
    /// use bblisp::session::Session;
    ///
    /// let input: &[u8] = b"(+ 1 2)\n\n(+ 1 \xff)\n(* 3 4)\n";
    /// let mut out = Vec::new();
    /// Session::script("calc.txt").run(input, &mut out).unwrap();
    ///
    /// let out = String::from_utf8(out).unwrap();
    /// let lines: Vec<&str> = out.lines().collect();
    /// assert_eq!(lines.len(), 3);
    /// assert_eq!(lines[0], "3");
    /// assert!(lines[1].starts_with("calc.txt:3:6: error: Unexpected token"));
    /// assert_eq!(lines[2], "12");
    /// ```
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> std::io::Result<()> {
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            if let Some(prompt) = self.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                if self.prompt.is_some() {
                    writeln!(out)?;
                }
                return Ok(());
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.skip_blank_lines && line.trim().is_empty() {
                continue;
            }

            run_line_at(line, self.origin, line_number, out)?;
        }
    }
}

/// Runs one read-eval-print step for line `line_number` of `origin`.
///
/// The rendered result is written followed by a newline. If the line does not
/// parse, the located diagnostic is written instead.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn run_line_at<W: Write>(source: &str,
                             origin: &str,
                             line_number: usize,
                             out: &mut W)
                             -> std::io::Result<()> {
    match evaluate(source) {
        Ok(value) => {
            tracing::debug!(input = source, result = %value, "evaluated");
            writeln!(out, "{value}")
        },
        Err(e) => {
            tracing::debug!(input = source, error = %e, "parse failed");
            writeln!(out, "{}", located(&e, origin, line_number))
        },
    }
}

/// Prefixes a parse diagnostic with where it happened.
///
/// # Example
/// ```
/// use bblisp::{evaluate, session::located};
///
/// let e = evaluate("(+ 1 2))").unwrap_err();
/// assert_eq!(located(&e, "<stdin>", 1), "<stdin>:1:8: error: Unexpected token: ')'.");
/// ```
#[must_use]
pub fn located(error: &ParseError, origin: &str, line_number: usize) -> String {
    format!("{origin}:{line_number}:{}: error: {error}", error.column())
}
