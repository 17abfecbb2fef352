pub mod gravity;
pub mod spawn;
