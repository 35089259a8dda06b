pub mod adjust;
pub mod config;
pub mod console;
pub mod init;
pub mod views;
