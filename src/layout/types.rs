use serde::Serialize;

use crate::date::CivilDate;
use crate::geometry::{Point, Side};
use crate::ir::{Granularity, TaskKind};

/// Placement of one tree node in layout-local space. The root sits at
/// the origin; any viewport transform is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Ring index; always parent depth + 1, root is 0.
    pub depth: usize,
}

/// A routed connector between two node boxes: one endpoint on each
/// box's outline plus the cardinal side it emerges from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedEdge {
    pub source_point: Point,
    pub target_point: Point,
    pub source_side: Side,
    pub target_side: Side,
}

impl RoutedEdge {
    /// Cubic control points for a curved rendering: each endpoint's
    /// control point is pushed `stub` pixels along its side's outward
    /// normal, so the curve leaves both nodes perpendicular to the
    /// border it crosses.
    pub fn control_points(&self, stub: f32) -> (Point, Point) {
        let sn = self.source_side.normal();
        let tn = self.target_side.normal();
        (
            Point::new(
                self.source_point.x + sn.x * stub,
                self.source_point.y + sn.y * stub,
            ),
            Point::new(
                self.target_point.x + tn.x * stub,
                self.target_point.y + tn.y * stub,
            ),
        )
    }
}

/// One calendar bucket of the schedule header.
#[derive(Debug, Clone, Serialize)]
pub struct TimeColumn {
    pub anchor: CivilDate,
    pub label: String,
    pub x: f32,
    pub width: f32,
}

/// Geometry for one task row's bar (or milestone diamond).
#[derive(Debug, Clone, Serialize)]
pub struct TaskBar {
    pub id: String,
    pub kind: TaskKind,
    /// Input-order row index; the engine never reorders rows.
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TaskBar {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Cubic dependency connector from the right edge of one bar to the
/// left edge of another. Only emitted for pairs that draw forward.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyArc {
    pub from: String,
    pub to: String,
    pub start: Point,
    pub end: Point,
    pub control1: Point,
    pub control2: Point,
}

/// Complete output of one schedule layout pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleLayout {
    pub granularity: Granularity,
    pub columns: Vec<TimeColumn>,
    pub bars: Vec<TaskBar>,
    pub arcs: Vec<DependencyArc>,
    /// Vertical guide offset for the configured reference date, present
    /// only when that date falls inside the padded window.
    pub today_x: Option<f32>,
    pub chart_width: f32,
    pub chart_height: f32,
}

impl ScheduleLayout {
    pub(crate) fn empty(granularity: Granularity) -> Self {
        Self {
            granularity,
            columns: Vec::new(),
            bars: Vec::new(),
            arcs: Vec::new(),
            today_x: None,
            chart_width: 0.0,
            chart_height: 0.0,
        }
    }
}
