pub mod black_hole;
pub mod body;
pub mod ship;
pub mod star;
