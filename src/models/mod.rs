pub mod record;
pub mod session;
pub mod table;

pub use record::AttendanceRecord;
pub use session::Session;
pub use table::DataTable;
