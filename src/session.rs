//! Line-by-line driver that runs a [`CommandInterpreter`] until `REPORT` or end of input.

use crate::error::SessionError;
use crate::interpreter::CommandInterpreter;
use crate::robot::{ReportLine, RobotState};
use crate::table::TableConfig;
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/// What to do when a line is rejected by the interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the session and return the error.
    #[default]
    Abort,
    /// Log the error and carry on with the next line.
    Skip,
}

/// Knobs for [`run_session`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    pub error_policy: ErrorPolicy,
    /// Write an empty line before the report, matching the classic console transcript.
    pub leading_blank_line: bool,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A `REPORT` was processed and written.
    Reported(ReportLine),
    /// Input ran out before any `REPORT`.
    EndOfInput { state: RobotState },
}

/// Feeds lines from `input` into a fresh interpreter until one of them is `REPORT`.
///
/// The report line is written to `output`. Lines after the `REPORT` are never read.
/// Running out of input is a normal end, not an error.
pub fn run_session<R: BufRead, W: Write>(
    config: TableConfig,
    options: SessionOptions,
    mut input: R,
    mut output: W,
) -> Result<SessionOutcome, SessionError> {
    let mut interpreter = CommandInterpreter::new(config);
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input after {line_no} lines");
            return Ok(SessionOutcome::EndOfInput {
                state: interpreter.state(),
            });
        }
        line_no += 1;
        // Invalid UTF-8 is replaced rather than failing the read, so the line is
        // rejected as a command like any other garbage.
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        match interpreter.execute(line) {
            Ok(Some(report)) => {
                if options.leading_blank_line {
                    writeln!(output)?;
                }
                writeln!(output, "{report}")?;
                output.flush()?;
                info!("reported {report} after {line_no} lines");
                return Ok(SessionOutcome::Reported(report));
            }
            Ok(None) => {}
            Err(source) => match options.error_policy {
                ErrorPolicy::Abort => {
                    return Err(SessionError::Command {
                        line: line_no,
                        source,
                    });
                }
                ErrorPolicy::Skip => warn!("line {line_no}: {source}, skipped"),
            },
        }
    }
}
