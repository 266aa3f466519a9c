pub mod cli;
pub mod configuration;
pub mod levels;
pub mod vacuum;
