use chrono::NaiveDateTime;

/// One row of an attendance export, timestamps already cleaned and parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    /// 1-based data row in the source file, header excluded
    pub row: usize,
    pub display_name: String,
    pub email: String,
    pub join: NaiveDateTime,
    pub leave: NaiveDateTime,
    /// Raw `Meeting Start Time` / `Meeting End Time` text; only the first row's is used
    pub meeting_start: String,
    pub meeting_end: String,
}

impl AttendanceRecord {
    /// Key used to order attendees: the display name, lower-cased
    pub fn sort_key(&self) -> String {
        self.display_name.to_lowercase()
    }
}
