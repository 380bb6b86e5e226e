pub mod alarm;
pub mod config;
pub mod due;
pub mod gate;
pub mod ring;
pub mod stimulus;
