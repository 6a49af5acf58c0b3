use std::collections::HashMap;

use crate::config::ScheduleConfig;
use crate::date::CivilDate;
use crate::error::LayoutError;
use crate::geometry::{Point, date_to_offset};
use crate::ir::{Granularity, ScheduleTask};

use super::{DependencyArc, ScheduleLayout, TaskBar, TimeColumn};

/// Lays out a schedule chart: calendar columns, one bar per task row,
/// cubic dependency arcs and an optional today guide.
///
/// Rows follow input order; sorting tasks is the caller's concern. An
/// empty task list yields an empty layout, not an error. The only
/// failure mode is a duplicate task id, which would make dependency
/// resolution ambiguous.
pub fn compute_schedule_layout(
    tasks: &[ScheduleTask],
    granularity: Granularity,
    config: &ScheduleConfig,
) -> Result<ScheduleLayout, LayoutError> {
    let mut row_by_id: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
    for (row, task) in tasks.iter().enumerate() {
        if row_by_id.insert(task.id.as_str(), row).is_some() {
            return Err(LayoutError::DuplicateTaskId(task.id.clone()));
        }
    }
    if tasks.is_empty() {
        return Ok(ScheduleLayout::empty(granularity));
    }

    // Visible window: the task span padded by one unit on each side so
    // no bar touches the chart edge. The fallbacks are unreachable for
    // non-empty input; they just keep the span math total.
    let fallback = CivilDate::new(1970, 1, 1);
    let min_start = tasks.iter().map(|t| t.start).min().unwrap_or(fallback);
    let max_end = tasks.iter().map(|t| t.end.max(t.start)).max().unwrap_or(fallback);
    let window_start = granularity.prev(min_start);
    let window_end = granularity.next(max_end);

    let mut anchors = Vec::new();
    let mut cursor = window_start;
    while cursor <= window_end {
        anchors.push(cursor);
        cursor = granularity.next(cursor);
    }

    // Zooming out on a short schedule still fills the viewport, zooming
    // in honors the per-column base width, and the hard floor keeps
    // very long spans from shrinking columns into illegibility.
    let column_width = (config.base_column_width * config.zoom)
        .max(config.available_width / anchors.len() as f32)
        .max(config.min_column_width);
    let px_per_day = column_width / granularity.unit_days();

    let columns: Vec<TimeColumn> = anchors
        .iter()
        .map(|&anchor| {
            let x = date_to_offset(anchor, window_start, px_per_day);
            let width = date_to_offset(granularity.next(anchor), window_start, px_per_day) - x;
            TimeColumn {
                anchor,
                label: granularity.label(anchor),
                x,
                width,
            }
        })
        .collect();
    let chart_width = columns
        .last()
        .map(|column| column.x + column.width)
        .unwrap_or(0.0);

    let row_step = config.row_height + config.row_gap;
    let bars: Vec<TaskBar> = tasks
        .iter()
        .enumerate()
        .map(|(row, task)| {
            let x = date_to_offset(task.start, window_start, px_per_day);
            let span = date_to_offset(task.end, window_start, px_per_day) - x;
            TaskBar {
                id: task.id.clone(),
                kind: task.kind,
                row,
                x,
                y: row as f32 * row_step,
                width: span.max(config.min_bar_width),
                height: config.row_height,
            }
        })
        .collect();

    let mut arcs = Vec::new();
    for (row, task) in tasks.iter().enumerate() {
        let target = &bars[row];
        for dependency in &task.dependencies {
            let Some(&source_row) = row_by_id.get(dependency.as_str()) else {
                continue;
            };
            let source = &bars[source_row];
            // Backward or zero-gap pairs would draw an arc through the
            // bars themselves; drop them instead of drawing wrong.
            if target.x <= source.right() {
                continue;
            }
            let gap = target.x - source.right();
            let bend = (gap * config.curve_tension).min(config.max_control_offset);
            let start = Point::new(source.right(), source.center_y());
            let end = Point::new(target.x, target.center_y());
            arcs.push(DependencyArc {
                from: dependency.clone(),
                to: task.id.clone(),
                start,
                end,
                control1: Point::new(start.x + bend, start.y),
                control2: Point::new(end.x - bend, end.y),
            });
        }
    }

    let today_x = config.today.and_then(|today| {
        if today >= window_start && today <= window_end {
            Some(date_to_offset(today, window_start, px_per_day))
        } else {
            None
        }
    });

    Ok(ScheduleLayout {
        granularity,
        columns,
        bars,
        arcs,
        today_x,
        chart_width,
        chart_height: tasks.len() as f32 * row_step,
    })
}
