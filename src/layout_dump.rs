//! Pretty-JSON dumps of layout output, for debugging layout passes and
//! diffing against golden files.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::layout::{LayoutPoint, ScheduleLayout, point_bounds};

#[derive(Debug, Serialize)]
pub struct RadialDump {
    pub width: f32,
    pub height: f32,
    pub points: Vec<LayoutPoint>,
}

impl RadialDump {
    pub fn from_points(points: &BTreeMap<String, LayoutPoint>) -> Self {
        let (width, height) = point_bounds(points);
        Self {
            width,
            height,
            points: points.values().cloned().collect(),
        }
    }
}

pub fn write_radial_dump(
    path: &Path,
    points: &BTreeMap<String, LayoutPoint>,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &RadialDump::from_points(points))?;
    Ok(())
}

pub fn write_schedule_dump(path: &Path, layout: &ScheduleLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, layout)?;
    Ok(())
}
