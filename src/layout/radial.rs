use std::collections::BTreeMap;
use std::f32::consts::TAU;

use crate::config::RadialConfig;
use crate::error::LayoutError;
use crate::ir::TreeNode;

use super::LayoutPoint;

/// Places a rooted tree on concentric rings.
///
/// The root sits at the origin. First-level children are spread evenly
/// around the full circle; deeper nodes receive an angular sector
/// centered on their parent's own angle, so each subtree grows outward
/// in the direction its parent already points and the whole tree fans
/// coherently instead of scattering.
///
/// Returns one entry per input node. Duplicate identifiers anywhere in
/// the tree fail fast with `LayoutError::DuplicateNodeId`, since they
/// would silently overwrite one node's placement with another's.
pub fn compute_radial_layout(
    root: &TreeNode,
    config: &RadialConfig,
) -> Result<BTreeMap<String, LayoutPoint>, LayoutError> {
    let mut points = BTreeMap::new();
    insert_point(&mut points, &root.id, 0.0, 0.0, 0)?;

    let count = root.children.len();
    for (index, child) in root.children.iter().enumerate() {
        let angle = index as f32 / count as f32 * TAU;
        place_subtree(child, angle, 1, config, &mut points)?;
    }
    Ok(points)
}

fn place_subtree(
    node: &TreeNode,
    angle: f32,
    depth: usize,
    config: &RadialConfig,
    points: &mut BTreeMap<String, LayoutPoint>,
) -> Result<(), LayoutError> {
    let radius = ring_radius(depth, config);
    insert_point(
        points,
        &node.id,
        radius * angle.cos(),
        radius * angle.sin(),
        depth,
    )?;

    let count = node.children.len();
    if count == 0 {
        return Ok(());
    }
    // The parent's angle is final here; children need it as their
    // sector center.
    let sector = sector_width(count, config);
    for (index, child) in node.children.iter().enumerate() {
        let child_angle = if count == 1 {
            angle
        } else {
            let t = index as f32 / (count - 1) as f32;
            angle - sector / 2.0 + sector * t
        };
        place_subtree(child, child_angle, depth + 1, config, points)?;
    }
    Ok(())
}

/// Sector reserved for a parent's `count` children. Wider for larger
/// families, capped so no subtree claims more than `max_sector`, but
/// never so narrow that adjacent siblings violate `min_separation`.
fn sector_width(count: usize, config: &RadialConfig) -> f32 {
    let grown = config.base_child_sector / 2.0 + config.spread_per_sibling * count as f32;
    let floor = if count > 1 {
        config.min_separation * (count - 1) as f32
    } else {
        0.0
    };
    grown.min(config.max_sector).max(floor)
}

/// Ring radius at `depth`. Damping compresses outer rings relative to
/// naive linear growth so very deep trees stay on a bounded canvas.
fn ring_radius(depth: usize, config: &RadialConfig) -> f32 {
    if depth == 0 {
        return 0.0;
    }
    depth as f32 * config.ring_radius * config.depth_damping.powi(depth as i32 - 1)
}

fn insert_point(
    points: &mut BTreeMap<String, LayoutPoint>,
    id: &str,
    x: f32,
    y: f32,
    depth: usize,
) -> Result<(), LayoutError> {
    let previous = points.insert(
        id.to_string(),
        LayoutPoint {
            id: id.to_string(),
            x,
            y,
            depth,
        },
    );
    if previous.is_some() {
        return Err(LayoutError::DuplicateNodeId(id.to_string()));
    }
    Ok(())
}
