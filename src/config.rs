use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date::CivilDate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Distance control points are pushed out along the exit side's
    /// normal when the presentation layer draws curved connectors.
    pub curve_stub: f32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { curve_stub: 24.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialConfig {
    /// Ring distance added per depth level, before damping.
    pub ring_radius: f32,
    /// Per-depth compression factor (< 1). Keeps deep trees from
    /// demanding unbounded canvas size.
    pub depth_damping: f32,
    /// Smallest allowed angular gap between adjacent siblings, radians.
    pub min_separation: f32,
    /// Ceiling on the angular sector a subtree inherits, radians.
    pub max_sector: f32,
    /// Baseline sector contribution independent of sibling count.
    pub base_child_sector: f32,
    /// Extra sector width granted per sibling.
    pub spread_per_sibling: f32,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            ring_radius: 140.0,
            depth_damping: 0.92,
            min_separation: 0.06,
            max_sector: std::f32::consts::PI,
            base_child_sector: 1.0,
            spread_per_sibling: 0.18,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum on-screen width of one column at zoom 1.0.
    pub base_column_width: f32,
    /// Hard floor below which columns never shrink, regardless of how
    /// many columns the span needs. Charts wider than the viewport
    /// overflow into presentation-layer scrolling.
    pub min_column_width: f32,
    /// Width the chart tries to fill when the span is short.
    pub available_width: f32,
    pub zoom: f32,
    pub row_height: f32,
    pub row_gap: f32,
    /// Floor for bar width so milestones and very short tasks stay
    /// clickable.
    pub min_bar_width: f32,
    /// Fraction of the horizontal gap used as control-point offset.
    pub curve_tension: f32,
    /// Cap on the control-point offset so long gaps stay visually flat.
    pub max_control_offset: f32,
    /// Reference date for the today-marker. An input rather than a
    /// clock read, so layout stays a pure function.
    pub today: Option<CivilDate>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_column_width: 48.0,
            min_column_width: 24.0,
            available_width: 960.0,
            zoom: 1.0,
            row_height: 28.0,
            row_gap: 8.0,
            min_bar_width: 12.0,
            curve_tension: 0.5,
            max_control_offset: 60.0,
            today: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub router: RouterConfig,
    pub radial: RadialConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouterConfigFile {
    curve_stub: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RadialConfigFile {
    ring_radius: Option<f32>,
    depth_damping: Option<f32>,
    min_separation: Option<f32>,
    max_sector: Option<f32>,
    base_child_sector: Option<f32>,
    spread_per_sibling: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleConfigFile {
    base_column_width: Option<f32>,
    min_column_width: Option<f32>,
    available_width: Option<f32>,
    zoom: Option<f32>,
    row_height: Option<f32>,
    row_gap: Option<f32>,
    min_bar_width: Option<f32>,
    curve_tension: Option<f32>,
    max_control_offset: Option<f32>,
    today: Option<CivilDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    router: Option<RouterConfigFile>,
    radial: Option<RadialConfigFile>,
    schedule: Option<ScheduleConfigFile>,
}

/// Loads a partial JSON config and merges it over the defaults. A
/// `None` path is not an error; it just yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let mut config = LayoutConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(router) = parsed.router {
        if let Some(v) = router.curve_stub {
            config.router.curve_stub = v;
        }
    }
    if let Some(radial) = parsed.radial {
        if let Some(v) = radial.ring_radius {
            config.radial.ring_radius = v;
        }
        if let Some(v) = radial.depth_damping {
            config.radial.depth_damping = v;
        }
        if let Some(v) = radial.min_separation {
            config.radial.min_separation = v;
        }
        if let Some(v) = radial.max_sector {
            config.radial.max_sector = v;
        }
        if let Some(v) = radial.base_child_sector {
            config.radial.base_child_sector = v;
        }
        if let Some(v) = radial.spread_per_sibling {
            config.radial.spread_per_sibling = v;
        }
    }
    if let Some(schedule) = parsed.schedule {
        if let Some(v) = schedule.base_column_width {
            config.schedule.base_column_width = v;
        }
        if let Some(v) = schedule.min_column_width {
            config.schedule.min_column_width = v;
        }
        if let Some(v) = schedule.available_width {
            config.schedule.available_width = v;
        }
        if let Some(v) = schedule.zoom {
            config.schedule.zoom = v;
        }
        if let Some(v) = schedule.row_height {
            config.schedule.row_height = v;
        }
        if let Some(v) = schedule.row_gap {
            config.schedule.row_gap = v;
        }
        if let Some(v) = schedule.min_bar_width {
            config.schedule.min_bar_width = v;
        }
        if let Some(v) = schedule.curve_tension {
            config.schedule.curve_tension = v;
        }
        if let Some(v) = schedule.max_control_offset {
            config.schedule.max_control_offset = v;
        }
        if let Some(v) = schedule.today {
            config.schedule.today = Some(v);
        }
    }

    Ok(config)
}
