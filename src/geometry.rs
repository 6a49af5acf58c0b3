//! Scalar geometry shared by every layout: boundary intersection,
//! cardinal side classification, interpolation and date-offset math.
//! Pure functions, no state.

use serde::{Deserialize, Serialize};

use crate::date::CivilDate;

/// Direction vectors shorter than this (after normalization by the box
/// half-extents) collapse to the box center instead of producing
/// unbounded coordinates.
const DEGENERATE_NORM: f32 = 1e-6;

/// Tolerance in pixels for bucketing a boundary point onto a box edge.
const SIDE_TOLERANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Footprint outline of a diagram element. Milestones use `Diamond`,
/// circular mind-map nodes use `Ellipse`, everything else `Rect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxShape {
    #[default]
    Rect,
    Ellipse,
    Diamond,
}

/// A positioned, sized node footprint. Ephemeral: built per layout pass
/// from a presentation node, never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeBox {
    /// Center position.
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    #[serde(default)]
    pub shape: BoxShape,
}

impl NodeBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            half_width: width / 2.0,
            half_height: height / 2.0,
            shape: BoxShape::Rect,
        }
    }

    pub fn with_shape(mut self, shape: BoxShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn left(&self) -> f32 {
        self.x - self.half_width
    }

    pub fn right(&self) -> f32 {
        self.x + self.half_width
    }

    pub fn top(&self) -> f32 {
        self.y - self.half_height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.half_height
    }

    fn is_degenerate(&self) -> bool {
        self.half_width <= f32::EPSILON || self.half_height <= f32::EPSILON
    }
}

/// Cardinal side of a box a connector emerges from. Lets the
/// presentation layer pick exit tangents for curved connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Outward unit normal.
    pub fn normal(self) -> Point {
        match self {
            Side::Top => Point::new(0.0, -1.0),
            Side::Right => Point::new(1.0, 0.0),
            Side::Bottom => Point::new(0.0, 1.0),
            Side::Left => Point::new(-1.0, 0.0),
        }
    }
}

/// The point on `node`'s outline that lies on the ray from its center
/// toward `toward`.
///
/// The direction vector is normalized elementwise by the half-extents,
/// then scaled by the reciprocal of a per-shape norm: max-norm for
/// rectangles, Euclidean for ellipses, L1 for diamonds. The elementwise
/// normalization is what makes the same formula handle non-square boxes
/// without branching on which edge the ray hits.
///
/// Degenerate input (zero-size box, coincident centers, a target center
/// sitting exactly on our own center) returns the box center rather
/// than dividing by a vanishing norm.
pub fn boundary_point(node: &NodeBox, toward: Point) -> Point {
    if node.is_degenerate() {
        return node.center();
    }
    let dx = toward.x - node.x;
    let dy = toward.y - node.y;
    let nx = dx / node.half_width;
    let ny = dy / node.half_height;
    let norm = match node.shape {
        BoxShape::Rect => nx.abs().max(ny.abs()),
        BoxShape::Ellipse => (nx * nx + ny * ny).sqrt(),
        BoxShape::Diamond => nx.abs() + ny.abs(),
    };
    if norm <= DEGENERATE_NORM {
        return node.center();
    }
    let scale = 1.0 / norm;
    Point::new(node.x + dx * scale, node.y + dy * scale)
}

/// Buckets a boundary point into the cardinal side it sits on, with a
/// one-pixel tolerance against the box's edge lines.
///
/// Sides are tested in top, right, bottom, left order, so a point at a
/// top corner classifies as `Top`. Points off the rectangular frame
/// (ellipse and diamond outlines) fall through to the dominant axis of
/// the normalized center-to-point vector, vertical winning ties.
pub fn exit_side(node: &NodeBox, point: Point) -> Side {
    if !node.is_degenerate() {
        if (point.y - node.top()).abs() <= SIDE_TOLERANCE {
            return Side::Top;
        }
        if (point.x - node.right()).abs() <= SIDE_TOLERANCE {
            return Side::Right;
        }
        if (point.y - node.bottom()).abs() <= SIDE_TOLERANCE {
            return Side::Bottom;
        }
        if (point.x - node.left()).abs() <= SIDE_TOLERANCE {
            return Side::Left;
        }
    }
    let nx = if node.half_width > f32::EPSILON {
        (point.x - node.x) / node.half_width
    } else {
        0.0
    };
    let ny = if node.half_height > f32::EPSILON {
        (point.y - node.y) / node.half_height
    } else {
        0.0
    };
    if ny.abs() >= nx.abs() {
        if ny <= 0.0 { Side::Top } else { Side::Bottom }
    } else if nx >= 0.0 {
        Side::Right
    } else {
        Side::Left
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let wrapped = angle % tau;
    if wrapped < 0.0 { wrapped + tau } else { wrapped }
}

/// Linear map from a calendar date to a pixel offset, given the
/// leftmost visible date and a granularity-dependent scale.
pub fn date_to_offset(date: CivilDate, epoch: CivilDate, px_per_day: f32) -> f32 {
    (date.day_number() - epoch.day_number()) as f32 * px_per_day
}
