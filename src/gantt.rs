//! ASCII Gantt chart rendering.
//!
//! Renders a timeline as one row of labelled boxes over a time axis. Idle
//! gaps get their own `idle` box so the axis stays continuous.
//!
//! ```text
//! ┌─────┬─────┬─────┐
//! │ P1  │ P3  │ P2  │
//! └─────┴─────┴─────┘
//! 0     8    10    14
//! ```

use std::fmt::Write as _;

use crate::models::Timeline;

/// Narrowest cell. Wider labels or end times grow their own cell.
const MIN_CELL_WIDTH: usize = 5;

/// Renders `timeline` as an ASCII Gantt chart.
pub fn render(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "(empty timeline)".to_string();
    }

    // idle boxes inserted for gaps
    let mut boxes: Vec<Cell> = Vec::with_capacity(timeline.len());
    let mut cursor = 0;
    for slice in timeline.slices() {
        if slice.start > cursor {
            boxes.push(Cell::new("idle".to_string(), slice.start));
        }
        boxes.push(Cell::new(format!("P{}", slice.process_id), slice.end));
        cursor = slice.end;
    }

    let border = |left: &str, mid: &str, right: &str| {
        let cells: Vec<String> = boxes.iter().map(|c| "─".repeat(c.width)).collect();
        format!("{left}{}{right}\n", cells.join(mid))
    };

    let mut out = border("┌", "┬", "┐");
    out.push('│');
    for cell in &boxes {
        let _ = write!(out, " {:<width$}│", cell.label, width = cell.width - 1);
    }
    out.push('\n');
    out.push_str(&border("└", "┴", "┘"));

    // each end time sits under its box's right edge
    out.push('0');
    for cell in &boxes {
        let _ = write!(out, "{:>width$}", cell.end, width = cell.width + 1);
    }
    out.push('\n');
    out
}

struct Cell {
    label: String,
    end: i64,
    width: usize,
}

impl Cell {
    fn new(label: String, end: i64) -> Self {
        let width = (label.len().max(end.to_string().len()) + 1).max(MIN_CELL_WIDTH);
        Self { label, end, width }
    }
}
