// tests/session.rs
use std::io::Cursor;
use table_robot::{
    ErrorPolicy, Heading, InterpreterError, RobotState, SessionError, SessionOptions,
    SessionOutcome, TableConfig, run_session,
};

fn session(input: &str, options: SessionOptions) -> (Result<SessionOutcome, SessionError>, String) {
    let mut out = Vec::new();
    let result = run_session(
        TableConfig::default(),
        options,
        Cursor::new(input.as_bytes()),
        &mut out,
    );
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_session_stops_at_first_report() {
    let (result, out) = session(
        "PLACE 0,0,NORTH\r\nMOVE\nREPORT\nMOVE\nREPORT\n",
        SessionOptions::default(),
    );
    let outcome = result.unwrap();
    assert_eq!(out, "0,1,NORTH\n");
    match outcome {
        SessionOutcome::Reported(report) => assert_eq!(report.to_string(), "0,1,NORTH"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn test_session_leading_blank_line() {
    let options = SessionOptions {
        leading_blank_line: true,
        ..Default::default()
    };
    let (result, out) = session("PLACE 2,3,WEST\nREPORT", options);
    assert!(result.is_ok());
    assert_eq!(out, "\n2,3,WEST\n");
}

#[test]
fn test_session_end_of_input_is_not_an_error() {
    let (result, out) = session("PLACE 1,1,SOUTH\nLEFT\n", SessionOptions::default());
    assert_eq!(
        result.unwrap(),
        SessionOutcome::EndOfInput {
            state: RobotState::placed(1, 1, Heading::East)
        }
    );
    assert!(out.is_empty());

    let (result, _) = session("", SessionOptions::default());
    assert_eq!(
        result.unwrap(),
        SessionOutcome::EndOfInput {
            state: RobotState::Unplaced
        }
    );
}

#[test]
fn test_session_aborts_on_invalid_command() {
    let (result, out) = session("PLACE 1,1,NORTH\nJUMP\nREPORT\n", SessionOptions::default());
    match result {
        Err(SessionError::Command { line, source }) => {
            assert_eq!(line, 2);
            assert!(matches!(source, InterpreterError::InvalidCommand(_)));
        }
        other => panic!("expected command error, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_session_skip_policy_keeps_going() {
    let options = SessionOptions {
        error_policy: ErrorPolicy::Skip,
        ..Default::default()
    };
    let (result, out) = session("MOVE\nPLACE 1,2\nPLACE 1,2,EAST\nJUMP\nMOVE\nREPORT\n", options);
    assert!(matches!(result, Ok(SessionOutcome::Reported(_))));
    assert_eq!(out, "2,2,EAST\n");
}

#[test]
fn test_session_skip_then_off_table_place_uses_origin() {
    let options = SessionOptions {
        error_policy: ErrorPolicy::Skip,
        ..Default::default()
    };
    let (result, out) = session("REPORT\nPLACE 7,7,SOUTH\nREPORT\n", options);
    assert!(matches!(result, Ok(SessionOutcome::Reported(_))));
    assert_eq!(out, "0,0,NORTH\n");
}

#[test]
fn test_session_invalid_utf8_line_is_a_rejected_command() {
    let mut input = b"PLACE 1,1,NORTH\n".to_vec();
    input.extend_from_slice(b"MO\xFFVE\nMOVE\nREPORT\n");

    let options = SessionOptions {
        error_policy: ErrorPolicy::Skip,
        ..Default::default()
    };
    let mut out = Vec::new();
    let result = run_session(TableConfig::default(), options, Cursor::new(&input), &mut out);
    assert!(matches!(result, Ok(SessionOutcome::Reported(_))));
    assert_eq!(String::from_utf8(out).unwrap(), "1,2,NORTH\n");

    let mut out = Vec::new();
    let result = run_session(
        TableConfig::default(),
        SessionOptions::default(),
        Cursor::new(&input),
        &mut out,
    );
    match result {
        Err(SessionError::Command { line, source }) => {
            assert_eq!(line, 2);
            assert!(matches!(source, InterpreterError::InvalidCommand(_)));
        }
        other => panic!("expected command error, got {other:?}"),
    }
}
