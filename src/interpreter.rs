//! Interpreter that applies [`Command`]s to a single robot on a [`TableConfig`] grid.
//!
//! The entry point is [`CommandInterpreter`]. Build it with a [`TableConfig`], then feed
//! it commands with [`CommandInterpreter::apply`] or raw lines with
//! [`CommandInterpreter::execute`]. A successful `REPORT` returns the [`ReportLine`]
//! and marks the end of the session.

use crate::error::{InterpreterError, InterpreterResult};
use crate::robot::{Command, Heading, PlaceArgs, ReportLine, RobotState};
use crate::table::TableConfig;
use log::{debug, warn};

/// Owns the robot's state and applies commands to it one at a time.
#[derive(Clone, Debug, Default)]
pub struct CommandInterpreter {
    config: TableConfig,
    state: RobotState,
}

impl CommandInterpreter {
    /// Creates an interpreter for `config` with the robot unplaced.
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            state: RobotState::Unplaced,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// Current position and heading, or [`InterpreterError::NotPlaced`].
    pub fn report(&self) -> InterpreterResult<ReportLine> {
        match self.state {
            RobotState::Placed { position, heading } => Ok(ReportLine { position, heading }),
            RobotState::Unplaced => Err(InterpreterError::NotPlaced),
        }
    }

    /// Parses `raw` and applies it. See [`apply`](Self::apply).
    pub fn execute(&mut self, raw: &str) -> InterpreterResult<Option<ReportLine>> {
        self.apply(Command::parse(raw))
    }

    /// Applies one command to the robot.
    ///
    /// Returns `Ok(Some(line))` for `REPORT`, which ends the session, and `Ok(None)` for
    /// every other accepted command. A rejected command leaves the state untouched.
    ///
    /// # Placement phase
    ///
    /// Until a `PLACE` has been accepted, every other command fails with
    /// [`InterpreterError::InvalidCommand`]. If that first `PLACE` names a cell off the
    /// table, the robot falls back to `0,0,NORTH`. Later off-table `PLACE`s are ignored.
    ///
    /// # Edges
    ///
    /// Moves that would cross the north or east edge are ignored. Whether south and west
    /// are guarded depends on [`TableConfig::edge_policy`].
    pub fn apply(&mut self, cmd: Command) -> InterpreterResult<Option<ReportLine>> {
        let RobotState::Placed { position, heading } = self.state else {
            return match cmd {
                Command::Place(args) => {
                    self.place(args, true)?;
                    Ok(None)
                }
                other => Err(InterpreterError::invalid(format!(
                    "first command must be PLACE, got {other:?}"
                ))),
            };
        };

        match cmd {
            Command::Place(args) => self.place(args, false)?,
            Command::Move => match self.config.step(position, heading.step()) {
                Some(next) => {
                    debug!("MOVE {heading}: {position} -> {next}");
                    self.state = RobotState::Placed {
                        position: next,
                        heading,
                    };
                }
                None => warn!("MOVE {heading} from {position} ignored at table edge"),
            },
            Command::Left => self.turn(heading.left()),
            Command::Right => self.turn(heading.right()),
            Command::Report => {
                let line = self.report()?;
                debug!("REPORT {line}");
                return Ok(Some(line));
            }
            Command::Unrecognized(verb) => {
                return Err(InterpreterError::invalid(format!("unknown verb `{verb}`")));
            }
        }

        Ok(None)
    }

    fn turn(&mut self, heading: Heading) {
        if let RobotState::Placed { position, .. } = self.state {
            debug!("turn -> {heading}");
            self.state = RobotState::Placed { position, heading };
        }
    }

    /// Validates and applies a `PLACE`. Heading is checked before arity.
    fn place(&mut self, args: PlaceArgs, first: bool) -> InterpreterResult<()> {
        let Some(heading) = args.heading else {
            return Err(InterpreterError::invalid(
                "PLACE requires a heading of NORTH, EAST, SOUTH or WEST",
            ));
        };
        if args.fields != 3 {
            return Err(InterpreterError::ArgumentError(args.fields));
        }

        let position = args.position();
        if self.config.contains(position) {
            debug!("PLACE {position} {heading}");
            self.state = RobotState::Placed { position, heading };
        } else if first {
            let origin = RobotState::origin();
            if let RobotState::Placed { position: home, .. } = origin
                && !self.config.contains(home)
            {
                return Err(InterpreterError::invalid(format!(
                    "PLACE {position} is off the table and {home} is not on it either"
                )));
            }
            warn!("PLACE {position} is off the table, falling back to origin");
            self.state = origin;
        } else {
            warn!("PLACE {position} is off the table, ignored");
        }

        Ok(())
    }
}
