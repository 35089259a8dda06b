pub mod config;
pub mod directory;
pub mod form;
pub mod ledger;
pub mod log;
pub mod notify;
pub mod session;
pub mod summary;
