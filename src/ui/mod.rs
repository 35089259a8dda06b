pub mod messages;
pub mod panels;
