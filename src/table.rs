use crate::error::TableError;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cell on the table, `(x, y)` with `y` growing northwards.
pub type Position = IVec2;

/// How a `MOVE` is treated when it would step off the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Only the north and east edges stop the robot. Moving south or west from
    /// row/column 0 drives the coordinate negative.
    #[default]
    UpperOnly,
    /// Every edge stops the robot.
    Clamped,
}

/// Dimensions and boundary rules of the table the robot moves on.
///
/// Both dimensions are at least 1, so `(0, 0)` is always on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTableConfig")]
pub struct TableConfig {
    width: i32,
    height: i32,
    edge_policy: EdgePolicy,
}

/// Unchecked form of [`TableConfig`] used for deserialization.
#[derive(Deserialize)]
struct RawTableConfig {
    width: i32,
    height: i32,
    #[serde(default)]
    edge_policy: EdgePolicy,
}

impl TryFrom<RawTableConfig> for TableConfig {
    type Error = TableError;

    fn try_from(raw: RawTableConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.width, raw.height)?.with_edge_policy(raw.edge_policy))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            edge_policy: EdgePolicy::UpperOnly,
        }
    }
}

impl TableConfig {
    /// Creates a `width` x `height` table with the default [`EdgePolicy`].
    ///
    /// Fails with [`TableError::InvalidDimensions`] if either side is below 1.
    pub fn new(width: i32, height: i32) -> Result<Self, TableError> {
        if width < 1 || height < 1 {
            return Err(TableError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            ..Default::default()
        })
    }

    /// Number of columns. Valid x coordinates are `0..width`.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows. Valid y coordinates are `0..height`.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Replaces the edge policy (builder pattern).
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Largest valid x coordinate.
    pub fn max_x(&self) -> i32 {
        self.width - 1
    }

    /// Largest valid y coordinate.
    pub fn max_y(&self) -> i32 {
        self.height - 1
    }

    /// Returns `true` if `pos` lies on the table, edges included.
    pub fn contains(&self, pos: Position) -> bool {
        (0..=self.max_x()).contains(&pos.x) && (0..=self.max_y()).contains(&pos.y)
    }

    /// Computes where a one-cell step by `step` from `from` lands.
    ///
    /// Returns `None` when the step is blocked by an edge under the current
    /// [`EdgePolicy`]. Positive steps are blocked at `max_x`/`max_y`; negative steps
    /// are only blocked at zero with [`EdgePolicy::Clamped`].
    pub fn step(&self, from: Position, step: IVec2) -> Option<Position> {
        let to = from + step;
        let blocked_upper = (step.x > 0 && from.x >= self.max_x())
            || (step.y > 0 && from.y >= self.max_y());
        let blocked_lower = self.edge_policy == EdgePolicy::Clamped
            && ((step.x < 0 && from.x <= 0) || (step.y < 0 && from.y <= 0));

        if blocked_upper || blocked_lower {
            None
        } else {
            Some(to)
        }
    }
}
