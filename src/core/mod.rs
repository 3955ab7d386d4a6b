pub mod page;
pub mod timeline;

pub use page::{AttendancePage, PageOutcome};
pub use timeline::{AttendeeSeries, ChartLayout, PresenceSegment, Timeline, build_timeline};
