//! Input model supplied by the generation layer.
//!
//! These structures arrive already validated for domain semantics (the
//! producing layer checks date formats, cycle freedom and so on); the
//! layout engine only guards against structural problems it can detect
//! itself, such as duplicate identifiers.

use serde::{Deserialize, Serialize};

use crate::date::CivilDate;

/// A node in a rooted tree. Child insertion order is significant: it
/// determines angular ordering in the radial layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    /// Opaque caller data. The layout never inspects this; it is only
    /// carried so a tree deserialized from the generation layer can be
    /// fed straight in without stripping.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl TreeNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_children(id: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            id: id.into(),
            children,
            payload: serde_json::Value::Null,
        }
    }

    /// Total node count including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    #[default]
    Task,
    /// Zero-duration marker; start == end, rendered as a diamond.
    Milestone,
    /// Grouping header row spanning its children's dates.
    ProjectGroup,
}

/// One row of a schedule chart. `end` is inclusive and never precedes
/// `start`; the producing layer guarantees that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub id: String,
    pub start: CivilDate,
    pub end: CivilDate,
    /// Ids of tasks that must render to the left of this one. Unknown
    /// ids are skipped during arc routing, not errored: partially
    /// edited schedules are the common case in an interactive editor.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub kind: TaskKind,
}

impl ScheduleTask {
    pub fn new(id: impl Into<String>, start: CivilDate, end: CivilDate) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            dependencies: Vec::new(),
            kind: TaskKind::Task,
        }
    }

    pub fn milestone(id: impl Into<String>, at: CivilDate) -> Self {
        Self {
            id: id.into(),
            start: at,
            end: at,
            dependencies: Vec::new(),
            kind: TaskKind::Milestone,
        }
    }

    pub fn after(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }
}

/// Calendar unit used to bucket a schedule's visible span into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "day" | "d" => Some(Self::Day),
            "week" | "w" => Some(Self::Week),
            "month" | "m" => Some(Self::Month),
            "year" | "y" => Some(Self::Year),
            _ => None,
        }
    }

    /// Nominal unit length in days, used for the pixel-per-day scale.
    /// Month and year use nominal lengths; column anchors still step by
    /// true calendar arithmetic so anchors never drift.
    pub fn unit_days(self) -> f32 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Year => 365.0,
        }
    }

    /// The next column anchor after `date`.
    pub fn next(self, date: CivilDate) -> CivilDate {
        match self {
            Self::Day => date.add_days(1),
            Self::Week => date.add_days(7),
            Self::Month => date.add_months(1),
            Self::Year => date.add_years(1),
        }
    }

    /// The previous column anchor before `date`.
    pub fn prev(self, date: CivilDate) -> CivilDate {
        match self {
            Self::Day => date.add_days(-1),
            Self::Week => date.add_days(-7),
            Self::Month => date.add_months(-1),
            Self::Year => date.add_years(-1),
        }
    }

    /// Header label for a column anchored at `date`.
    pub fn label(self, date: CivilDate) -> String {
        match self {
            Self::Day | Self::Week => date.format_iso(),
            Self::Month => format!("{:04}-{:02}", date.year, date.month),
            Self::Year => format!("{:04}", date.year),
        }
    }
}
