//! Mapping of timestamps onto a horizontal axis, and tick placement.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Tick steps tried in order, in minutes
const TICK_STEPS: [i64; 12] = [1, 2, 5, 10, 15, 30, 60, 120, 180, 360, 720, 1440];

#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    start: NaiveDateTime,
    end: NaiveDateTime,
    x0: f64,
    width: f64,
}

impl TimeScale {
    /// Scale `start..end` onto `x0..x0 + width`. An empty range is widened to one minute.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, x0: f64, width: f64) -> Self {
        let end = if end <= start {
            start + Duration::minutes(1)
        } else {
            end
        };
        Self {
            start,
            end,
            x0,
            width,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    fn span_secs(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1000.0
    }

    pub fn x(&self, t: NaiveDateTime) -> f64 {
        let offset = (t - self.start).num_milliseconds() as f64 / 1000.0;
        self.x0 + offset / self.span_secs() * self.width
    }

    /// Timestamp at the left edge of `cell` when the axis is split in `cells` equal parts
    pub fn cell_start(&self, cell: u32, cells: u32) -> NaiveDateTime {
        let ms = (self.end - self.start).num_milliseconds() * cell as i64 / cells.max(1) as i64;
        self.start + Duration::milliseconds(ms)
    }

    /// Round-valued ticks inside the range, at most `max_ticks` of them
    pub fn ticks(&self, max_ticks: usize) -> Vec<NaiveDateTime> {
        let span_min = self.span_secs() / 60.0;
        let max_ticks = max_ticks.max(2) as f64;

        let step = TICK_STEPS
            .iter()
            .copied()
            .find(|s| span_min / *s as f64 <= max_ticks)
            .unwrap_or(1440 * ((span_min / max_ticks / 1440.0).ceil() as i64).max(1));

        // first multiple of `step` minutes (counted from midnight) at or after start
        let day = self.start.date().and_hms_opt(0, 0, 0).unwrap_or(self.start);
        let minute_of_day = (self.start - day).num_minutes();
        let mut first = (minute_of_day + step - 1) / step * step;
        if self.start.second() > 0 && first == minute_of_day {
            first += step;
        }

        let mut ticks = Vec::new();
        let mut t = day + Duration::minutes(first);
        while t <= self.end {
            ticks.push(t);
            t += Duration::minutes(step);
        }
        ticks
    }

    /// Tick label: time only, or date and time when the range crosses midnight
    pub fn label(&self, t: NaiveDateTime) -> String {
        if self.start.date() == self.end.date() {
            t.format("%H:%M").to_string()
        } else {
            t.format("%m-%d %H:%M").to_string()
        }
    }
}
