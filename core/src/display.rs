//! Listing table for records.
//!
//! Columns are derived read-only from a record's [`Summary`]: name, binding
//! phase, class name, version selector and age.

use std::fmt::Write;

use chrono::TimeDelta;

use tether_types::{Summarize, Summary, Time};

const COLUMN_GAP: usize = 3;
const NONE: &str = "<none>";

pub const HEADERS: [&str; 5] = ["NAME", "STATUS", "CLASS", "VERSION", "AGE"];

/// One rendered line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: [String; 5],
}

impl Row {
    #[must_use]
    pub fn from_summary(summary: &Summary, now: Time) -> Self {
        Self {
            cells: [
                summary.name.clone().unwrap_or_else(|| NONE.to_owned()),
                summary.binding_phase.to_string(),
                summary.class_name.clone().unwrap_or_else(|| NONE.to_owned()),
                summary.version.clone().unwrap_or_else(|| NONE.to_owned()),
                format_age(summary.created, now),
            ],
        }
    }

    #[must_use]
    pub fn of<T: Summarize>(record: &T, now: Time) -> Self {
        Self::from_summary(&record.summary(), now)
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Short human age in the style of `kubectl get`: `45s`, `12m`, `3h`,
/// `4d`, `2y`. A missing timestamp renders as `<unknown>`; a timestamp in
/// the future renders as `0s`.
#[must_use]
pub fn format_age(created: Option<Time>, now: Time) -> String {
    let Some(created) = created else {
        return "<unknown>".to_owned();
    };
    let age = now.signed_duration_since(created);
    if age < TimeDelta::zero() {
        return "0s".to_owned();
    }

    let seconds = age.num_seconds();
    let minutes = age.num_minutes();
    let hours = age.num_hours();
    if seconds < 60 {
        format!("{seconds}s")
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if hours < 24 {
        format!("{hours}h")
    } else if hours < 24 * 365 {
        format!("{}d", age.num_days())
    } else {
        format!("{}y", age.num_days() / 365)
    }
}

/// Render `rows` under [`HEADERS`], columns left-aligned and separated by
/// at least three spaces. Each line ends with a newline.
#[must_use]
pub fn render_table(rows: &[Row]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &widths, HEADERS.iter().copied());
    for row in rows {
        write_line(&mut out, &widths, row.cells.iter().map(String::as_str));
    }
    out
}

fn write_line<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.zip(widths).enumerate() {
        if index + 1 == widths.len() {
            line.push_str(cell);
        } else {
            let _ = write!(line, "{cell:<pad$}", pad = width + COLUMN_GAP);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
