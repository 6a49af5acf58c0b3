//! The layout engine proper. Every function in this module tree is a
//! pure, synchronous computation: identical input produces identical
//! output, and each pass allocates fresh output structures.

mod radial;
mod routing;
mod schedule;
pub(crate) mod types;

pub use radial::compute_radial_layout;
pub use routing::{route, route_curved};
pub use schedule::compute_schedule_layout;
pub use types::*;

use std::collections::BTreeMap;

/// Overall extents of a set of layout points, for sizing a canvas.
/// Returns `(0, 0)` for an empty map.
pub fn point_bounds(points: &BTreeMap<String, LayoutPoint>) -> (f32, f32) {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for point in points.values() {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    if min_x > max_x {
        return (0.0, 0.0);
    }
    (max_x - min_x, max_y - min_y)
}
