// Module exports for models

pub mod item;
pub mod placed_block;
pub mod segment;
pub mod settings;
pub mod view_window;
