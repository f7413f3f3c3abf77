use std::fs;

use tally::{
    error::{Error, ParseError, RuntimeError},
    interpreter::lexer::{Scanned, Scanner},
    Session,
};

fn eval_script(lines: &[&str]) -> Result<Vec<String>, Error> {
    let mut session = Session::new();
    let mut output = Vec::new();

    for line in lines {
        output.extend(session.eval_line(line)?);
    }

    Ok(output)
}

fn assert_prints(lines: &[&str], expected: &[&str]) {
    match eval_script(lines) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(lines: &[&str]) {
    if eval_script(lines).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_prints(&["x = 1 + 2", "PRINT x"], &["3"]);
    assert_prints(&["x = 7 * 9", "PRINT x"], &["63"]);
    assert_prints(&["x = 8 - 5", "PRINT x"], &["3"]);
    assert_prints(&["x = 10 / 2", "PRINT x"], &["5"]);
}

#[test]
fn assignment_produces_no_output() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("x = 5").unwrap(), Vec::<String>::new());
}

#[test]
fn precedence_and_parentheses() {
    assert_prints(&["PRINT 2 + 3 * 4"], &["14"]);
    assert_prints(&["PRINT (2 + 3) * 4"], &["20"]);
    assert_prints(&["PRINT 2 * (3 + 4) - 5"], &["9"]);
}

#[test]
fn left_associativity() {
    assert_prints(&["PRINT 2 - 3 - 4"], &["-5"]);
    assert_prints(&["PRINT 100 / 5 / 2"], &["10"]);
}

#[test]
fn division_truncates_toward_zero() {
    assert_prints(&["PRINT 7 / 2"], &["3"]);
    assert_prints(&["x = 0 - 7", "PRINT x / 2"], &["-3"]);
}

#[test]
fn sequential_mutation() {
    assert_prints(&["x = 5", "x = x + 1", "PRINT x"], &["6"]);
}

#[test]
fn multiple_statements_on_one_line() {
    assert_prints(&["x = 1 PRINT x x = x + 1 PRINT x"], &["1", "2"]);
}

#[test]
fn print_output_is_plain_decimal() {
    assert_prints(&["PRINT 0 - 5"], &["-5"]);
    assert_prints(&["PRINT 0"], &["0"]);
}

#[test]
fn keyword_is_exact_and_case_sensitive() {
    // Only the exact text "PRINT" is the keyword; any other letter run is a
    // variable name.
    assert_prints(&["print = 3", "PRINT print"], &["3"]);
    assert_prints(&["PRINTER = 2", "PRINT PRINTER"], &["2"]);
}

#[test]
fn blank_line_is_a_noop() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("").unwrap(), Vec::<String>::new());
    assert_eq!(session.eval_line("   \t ").unwrap(), Vec::<String>::new());
}

#[test]
fn undefined_variable_is_error() {
    assert_failure(&["PRINT y"]);

    let mut session = Session::new();
    let result = session.eval_line("PRINT y");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::UnknownVariable { .. }))));
}

#[test]
fn division_by_zero_is_error() {
    let mut session = Session::new();
    let result = session.eval_line("PRINT 4 / 0");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn unrecognized_character_is_syntax_error() {
    let mut session = Session::new();
    let result = session.eval_line("PRINT 2 $ 3");
    match result {
        Err(Error::Parse(ParseError::UnrecognizedCharacter { text, .. })) => {
            assert_eq!(text, "$");
        },
        other => panic!("Expected an unrecognized-character error, got {other:?}"),
    }
}

#[test]
fn expect_reports_found_and_expected() {
    let mut session = Session::new();
    let e = session.eval_line("x 5").unwrap_err();
    let message = format!("{e}");
    assert!(message.contains("integer literal"));
    assert!(message.contains("'='"));
}

#[test]
fn missing_closing_paren_is_error() {
    let mut session = Session::new();
    let result = session.eval_line("PRINT (1 + 2");
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn statement_must_start_with_assignment_or_print() {
    let mut session = Session::new();
    let result = session.eval_line("= 5");
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::InvalidStatement { .. }))));
}

#[test]
fn print_without_expression_is_error() {
    let mut session = Session::new();
    let result = session.eval_line("PRINT");
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::ExpectedValue { .. }))));
}

#[test]
fn values_are_64_bit_signed() {
    assert_prints(&["PRINT 9223372036854775807"], &["9223372036854775807"]);

    let mut session = Session::new();
    let result = session.eval_line("PRINT 9223372036854775808");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::LiteralTooLarge { .. }))));
}

#[test]
fn overflow_is_error_not_wraparound() {
    let mut session = Session::new();
    session.eval_line("x = 9223372036854775807").unwrap();

    let result = session.eval_line("PRINT x + 1");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Overflow { .. }))));

    // i64::MIN, spelled without unary minus, divided by -1 overflows too.
    session.eval_line("y = 0 - 9223372036854775807 - 1").unwrap();
    let result = session.eval_line("PRINT y / (0 - 1)");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Overflow { .. }))));
}

#[test]
fn failing_line_keeps_earlier_assignments() {
    let mut session = Session::new();
    assert!(session.eval_line("x = 1 y = x + z").is_err());

    assert!(session.symbols().is_defined("x"));
    assert!(!session.symbols().is_defined("y"));
    assert_eq!(session.symbols().get("x"), Some(1));
}

#[test]
fn session_continues_after_error() {
    let mut session = Session::new();
    assert!(session.eval_line("PRINT 1 / 0").is_err());
    assert_eq!(session.eval_line("PRINT 1 + 1").unwrap(), vec!["2"]);
}

#[test]
fn scanner_is_idempotent_at_end_of_input() {
    let mut scanner = Scanner::new("x");
    assert!(matches!(scanner.next_token(), Scanned::Token(_)));

    for _ in 0..3 {
        assert_eq!(scanner.next_token(), Scanned::Eof);
    }
}

#[test]
fn scanner_splits_adjacent_runs() {
    let mut scanner = Scanner::new("12abc(");
    assert!(matches!(scanner.next_token(), Scanned::Token(_)));
    assert!(matches!(scanner.next_token(), Scanned::Token(_)));
    assert!(matches!(scanner.next_token(), Scanned::Token(_)));
    assert_eq!(scanner.next_token(), Scanned::Eof);
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut session = Session::new();
    let mut output = Vec::new();

    for line in script.lines() {
        output.extend(session.eval_line(line)
                             .unwrap_or_else(|e| panic!("Script failed: {e}")));
    }

    assert_eq!(output, ["14", "20", "6", "42"]);
}
