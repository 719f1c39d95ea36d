//! Robot state and the command vocabulary understood by the interpreter.

use crate::table::Position;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The compass direction the robot is facing.
///
/// Headings are ordered clockwise, `NORTH -> EAST -> SOUTH -> WEST`, and rotation
/// wraps around that cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in [`Heading::ALL`].
    pub fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading at `index` in the clockwise cycle, wrapping modulo 4.
    pub fn from_index(index: isize) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Rotates 90 degrees anti-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() as isize - 1)
    }

    /// Rotates 90 degrees clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() as isize + 1)
    }

    /// Unit step taken by a `MOVE` in this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Protocol name of the heading (`"NORTH"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Heading::from_str`] for anything but the four upper-case names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHeading(pub String);

impl fmt::Display for UnknownHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heading `{}`", self.0)
    }
}

impl std::error::Error for UnknownHeading {}

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownHeading(s.to_owned()))
    }
}

/// What the interpreter knows about the robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    /// No position has been established yet.
    #[default]
    Unplaced,
    /// The robot stands on `position` facing `heading`.
    Placed { position: Position, heading: Heading },
}

impl RobotState {
    pub fn placed(x: i32, y: i32, heading: Heading) -> Self {
        RobotState::Placed {
            position: Position::new(x, y),
            heading,
        }
    }

    /// The fallback state used when the opening `PLACE` lands off the table.
    pub fn origin() -> Self {
        Self::placed(0, 0, Heading::North)
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed { .. })
    }
}

/// Output of a `REPORT` command, rendered as `x,y,HEADING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub position: Position,
    pub heading: Heading,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.heading)
    }
}

/// Arguments of a `PLACE` command as they appeared on the line.
///
/// Parsing never fails: a malformed argument still produces a `PlaceArgs`, and the
/// interpreter decides whether it is acceptable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceArgs {
    /// First field, coerced to an integer.
    pub x: i32,
    /// Second field, coerced to an integer.
    pub y: i32,
    /// Third field, if it named a valid heading.
    pub heading: Option<Heading>,
    /// Number of comma-separated fields supplied.
    pub fields: usize,
}

impl PlaceArgs {
    /// A well-formed `x,y,HEADING` argument.
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            x,
            y,
            heading: Some(heading),
            fields: 3,
        }
    }

    fn parse(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self {
                x: 0,
                y: 0,
                heading: None,
                fields: 0,
            };
        };

        let mut fields: Vec<&str> = token.split(',').collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        let field = |idx: usize| fields.get(idx).copied();
        Self {
            x: field(0).map_or(0, lenient_int),
            y: field(1).map_or(0, lenient_int),
            heading: field(2).and_then(|h| h.parse().ok()),
            fields: fields.len(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A single parsed line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PLACE x,y,HEADING`
    Place(PlaceArgs),
    /// `MOVE`
    Move,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `REPORT`
    Report,
    /// Any other verb, or an empty line. Holds the verb as typed.
    Unrecognized(String),
}

impl Command {
    /// Shorthand for a well-formed `PLACE`.
    pub fn place(x: i32, y: i32, heading: Heading) -> Self {
        Command::Place(PlaceArgs::new(x, y, heading))
    }

    /// Parses one line of input.
    ///
    /// The line is split on whitespace into a verb and an optional argument token;
    /// anything after the argument token is ignored. Verbs are matched exactly and
    /// case-sensitively. Only `PLACE` looks at its argument.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace();
        let verb = tokens.next().unwrap_or_default();
        let args = tokens.next();

        match verb {
            "PLACE" => Command::Place(PlaceArgs::parse(args)),
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            other => Command::Unrecognized(other.to_owned()),
        }
    }
}

/// Reads the leading optionally-signed decimal digits of `s`, or 0 if there are none.
///
/// A single `_` between two digits is skipped, so `"1_2"` is 12. `"12abc"` is 12,
/// `"abc"` is 0, `"-3"` is -3. Out-of-range values saturate.
fn lenient_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = digits.as_bytes();
    let mut magnitude = 0i64;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {
                magnitude = magnitude
                    .saturating_mul(10)
                    .saturating_add(i64::from(b - b'0'));
            }
            b'_' if i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {}
            _ => break,
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
