use chrono::NaiveDateTime;
use serde::Serialize;

/// Scheduled window of the meeting, shared by every row of a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Session {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
