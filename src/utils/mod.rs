pub mod colors;
pub mod logger;
pub mod path;
pub mod time;

pub use time::{clean_timestamp, strip_export_quoting};
