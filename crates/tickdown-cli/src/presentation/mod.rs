pub mod meter;
pub mod tui;
pub mod views;
