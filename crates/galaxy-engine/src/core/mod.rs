pub mod galaxy;
pub mod time;
pub mod vector;
