pub mod actor;
pub mod direction;
pub mod transaction;
pub mod worker;
