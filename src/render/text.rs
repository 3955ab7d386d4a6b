//! Terminal chart: one row per attendee, one cell per slice of the time axis.

use crate::core::{AttendeeSeries, Timeline};
use crate::render::RenderOptions;
use crate::render::scale::TimeScale;
use crate::utils::colors::{GREY, paint, terminal_color};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 24;
const MIN_AXIS_WIDTH: u32 = 10;

const PRESENT: char = '█';
const IN_SESSION: char = '·';
const OUTSIDE: char = ' ';

/// Cut `s` to at most `max` terminal columns, marking the cut with `…`
fn fit_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn series_cells(series: &AttendeeSeries, scale: &TimeScale, cells: u32, session: (i64, i64)) -> Vec<char> {
    (0..cells)
        .map(|i| {
            let from = scale.cell_start(i, cells);
            let to = scale.cell_start(i + 1, cells);

            let present = series.segments.iter().any(|s| {
                let (a, b) = if s.join <= s.leave {
                    (s.join, s.leave)
                } else {
                    (s.leave, s.join)
                };
                a < to && (b > from || (a == b && a >= from))
            });

            let mid = from.and_utc().timestamp() / 2 + to.and_utc().timestamp() / 2;
            if present {
                PRESENT
            } else if mid >= session.0 && mid <= session.1 {
                IN_SESSION
            } else {
                OUTSIDE
            }
        })
        .collect()
}

pub(super) fn render_text(timeline: &Timeline, opts: &RenderOptions) -> String {
    let cells = opts.width.max(MIN_AXIS_WIDTH);
    let (start, end) = timeline.time_range();
    let scale = TimeScale::new(start, end, 0.0, cells as f64);
    let session = (
        timeline.session.start.and_utc().timestamp(),
        timeline.session.end.and_utc().timestamp(),
    );

    let name_width = timeline
        .series
        .iter()
        .map(|s| UnicodeWidthStr::width(s.display_name.as_str()).min(MAX_NAME_WIDTH))
        .max()
        .unwrap_or(0)
        .max("Attendee".len());

    let mut out = String::new();

    let _ = writeln!(out, "{}", timeline.layout.title);
    let _ = writeln!(
        out,
        "Session {} → {} ({} min)",
        timeline.session.start.format("%Y-%m-%d %H:%M"),
        timeline.session.end.format("%Y-%m-%d %H:%M"),
        timeline.session.duration_minutes()
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} {}",
        pad_right("Attendee", name_width),
        "─".repeat(cells as usize + 2)
    );

    for (idx, series) in timeline.series.iter().enumerate() {
        let name = pad_right(&fit_width(&series.display_name, MAX_NAME_WIDTH), name_width);
        let row: String = series_cells(series, &scale, cells, session)
            .into_iter()
            .map(|c| match c {
                PRESENT => paint(&c.to_string(), terminal_color(idx), opts.color),
                IN_SESSION => paint(&c.to_string(), GREY, opts.color),
                _ => c.to_string(),
            })
            .collect();

        let _ = writeln!(
            out,
            "{name} │{row}│ {} min  {}",
            series.total_minutes(),
            series.email
        );
    }

    // time axis footer: start label left, end label right
    let left = scale.label(scale.start());
    let right = scale.label(scale.end());
    let gap = (cells as usize + 2).saturating_sub(left.len() + right.len());
    let _ = writeln!(
        out,
        "{} {left}{}{right}",
        " ".repeat(name_width),
        " ".repeat(gap)
    );
    let _ = writeln!(
        out,
        "{} {} = present, {} = session window",
        " ".repeat(name_width),
        PRESENT,
        IN_SESSION
    );

    out
}
