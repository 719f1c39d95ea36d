//! # table-robot
//!
//! A command interpreter for a single robot standing on a discrete table grid.
//!
//! Text commands (`PLACE 1,2,NORTH`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`) are parsed into
//! [`Command`]s and applied by a [`CommandInterpreter`], which owns the robot's
//! [`RobotState`]. The [`run_session`] driver feeds lines from any `BufRead` source and
//! stops at the first `REPORT`, so the engine can be embedded in a CLI, a test harness,
//! or anything else that produces lines of text.

pub mod error;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod table;

pub use error::*;
pub use interpreter::*;
pub use robot::*;
pub use session::*;
pub use table::*;
