pub mod chart;
pub mod config;
pub mod init;
pub mod list;
