use crate::config::RouterConfig;
use crate::geometry::{NodeBox, Point, boundary_point, exit_side};

use super::RoutedEdge;

/// Routes a straight connector between two node boxes.
///
/// Each endpoint is the intersection of that box's own outline with the
/// ray toward the other box's center, so neither endpoint ever overlaps
/// node content. The two intersections are computed independently from
/// each box's perspective; when the shapes differ the endpoints need
/// not sit on the single line between the two centers, which is
/// accepted behavior because each box's border is locally consistent.
///
/// There are no error conditions. A zero-size box degrades to its
/// center point: a connector to a single point is a valid degraded
/// rendering.
pub fn route(source: &NodeBox, target: &NodeBox) -> RoutedEdge {
    let source_point = boundary_point(source, target.center());
    let target_point = boundary_point(target, source.center());
    RoutedEdge {
        source_point,
        target_point,
        source_side: exit_side(source, source_point),
        target_side: exit_side(target, target_point),
    }
}

/// Routes a connector and derives its cubic control points in one call,
/// using the configured stub length. Sugar for presentation layers
/// that always draw curves.
pub fn route_curved(
    source: &NodeBox,
    target: &NodeBox,
    config: &RouterConfig,
) -> (RoutedEdge, (Point, Point)) {
    let edge = route(source, target);
    let controls = edge.control_points(config.curve_stub);
    (edge, controls)
}
