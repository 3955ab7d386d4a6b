use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, DataTable, Session};
use crate::utils::time::clean_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

pub const JOIN_TIME: &str = "Join Time";
pub const LEAVE_TIME: &str = "Leave Time";
pub const DISPLAY_NAME: &str = "Display Name";
pub const ATTENDEE_EMAIL: &str = "Attendee Email";
pub const MEETING_START: &str = "Meeting Start Time";
pub const MEETING_END: &str = "Meeting End Time";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    JOIN_TIME,
    LEAVE_TIME,
    DISPLAY_NAME,
    ATTENDEE_EMAIL,
    MEETING_START,
    MEETING_END,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresenceSegment {
    pub join: NaiveDateTime,
    pub leave: NaiveDateTime,
}

impl PresenceSegment {
    pub fn duration_minutes(&self) -> i64 {
        (self.leave - self.join).num_minutes()
    }
}

/// Everything drawn for one attendee: a horizontal line at `y` per segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeeSeries {
    pub display_name: String,
    pub email: String,
    /// Vertical position inside the 0..1 band, top = 1
    pub y: f64,
    pub segments: Vec<PresenceSegment>,
}

impl AttendeeSeries {
    /// Legend and hover label, `Name (email)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.email)
    }

    /// Flat point list: join, leave, gap (`None`) for every segment
    pub fn points(&self) -> Vec<Option<NaiveDateTime>> {
        self.segments
            .iter()
            .flat_map(|s| [Some(s.join), Some(s.leave), None])
            .collect()
    }

    pub fn total_minutes(&self) -> i64 {
        self.segments.iter().map(|s| s.duration_minutes()).sum()
    }
}

/// Axis and title settings handed to the renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Attendees are identified by position and label only
    pub show_y_ticks: bool,
    pub hover_mode: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: "Attendance Over Time".to_string(),
            x_title: "Time".to_string(),
            y_title: "Presence".to_string(),
            show_y_ticks: false,
            hover_mode: "closest".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub series: Vec<AttendeeSeries>,
    pub session: Session,
    pub y_spacing: f64,
    pub layout: ChartLayout,
}

impl Timeline {
    /// Horizontal extent: the session window widened to every segment
    pub fn time_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let mut start = self.session.start;
        let mut end = self.session.end;

        for seg in self.series.iter().flat_map(|s| s.segments.iter()) {
            start = start.min(seg.join).min(seg.leave);
            end = end.max(seg.join).max(seg.leave);
        }

        (start, end)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.layout.title = title.to_string();
        self
    }
}

fn required_index(table: &DataTable, name: &str) -> AppResult<usize> {
    table
        .column_index(name)
        .ok_or_else(|| AppError::MissingColumn(name.to_string()))
}

fn parse_cell(raw: &str, column: &str, row: usize) -> AppResult<NaiveDateTime> {
    clean_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

/// Turn the loaded rows into records; fails on the first bad timestamp.
pub fn parse_records(table: &DataTable) -> AppResult<Vec<AttendanceRecord>> {
    let mut idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = required_index(table, column)?;
    }
    let [join, leave, name, email, start, end] = idx;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| -> AppResult<AttendanceRecord> {
            let n = i + 1;
            Ok(AttendanceRecord {
                row: n,
                display_name: row[name].clone(),
                email: row[email].clone(),
                join: parse_cell(&row[join], JOIN_TIME, n)?,
                leave: parse_cell(&row[leave], LEAVE_TIME, n)?,
                meeting_start: row[start].clone(),
                meeting_end: row[end].clone(),
            })
        })
        .collect()
}

/// Build the per-attendee series and the session window.
///
/// Rows are ordered by lower-cased display name (stable), attendees are the
/// distinct display names in that order, and each series is labelled with
/// the email of its first row. Vertical spacing is derived from the number of
/// distinct emails, so attendees sharing a display name are merged into one
/// series while still reserving a slot each.
pub fn build_timeline(table: &DataTable) -> AppResult<Timeline> {
    let mut records = parse_records(table)?;
    records.sort_by_cached_key(|r| r.sort_key());

    let first = records
        .first()
        .ok_or_else(|| AppError::Other("no attendance rows to build a timeline from".into()))?;

    let session = Session {
        start: parse_cell(&first.meeting_start, MEETING_START, first.row)?,
        end: parse_cell(&first.meeting_end, MEETING_END, first.row)?,
    };

    // -----------------------------
    // Vertical slots
    // -----------------------------
    let email_groups: HashSet<&str> = records
        .iter()
        .map(|r| r.email.as_str())
        .filter(|e| !e.is_empty())
        .collect();

    let y_spacing = 1.0 / (email_groups.len() + 1) as f64;
    let mut y = 1.0 - y_spacing;

    // -----------------------------
    // One series per display name
    // -----------------------------
    let mut seen: HashSet<&str> = HashSet::new();
    let mut series = Vec::new();

    for rec in &records {
        if !seen.insert(rec.display_name.as_str()) {
            continue;
        }

        let segments = records
            .iter()
            .filter(|r| r.display_name == rec.display_name)
            .map(|r| PresenceSegment {
                join: r.join,
                leave: r.leave,
            })
            .collect();

        series.push(AttendeeSeries {
            display_name: rec.display_name.clone(),
            email: rec.email.clone(),
            y,
            segments,
        });

        y -= y_spacing;
    }

    tracing::debug!(
        rows = records.len(),
        attendees = series.len(),
        emails = email_groups.len(),
        "timeline built"
    );

    Ok(Timeline {
        series,
        session,
        y_spacing,
        layout: ChartLayout::default(),
    })
}
