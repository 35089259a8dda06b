pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::group_thousands;
pub use formatting::signed_points;
