pub mod log;
pub mod roster;
pub mod standings;
