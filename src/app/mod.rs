// Presentation layer: text rendering and the interactive menu.

pub mod display;
pub mod menu;
