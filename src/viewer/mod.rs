pub mod cli;
pub mod export;
pub mod geometry;
pub mod main;
#[cfg(feature = "gui")]
pub mod ui;
