// Timeline Layout Library
// Week timeline layout: segmentation, lane packing and block geometry

pub mod models;
pub mod services;
pub mod utils;

pub use models::item::Item;
pub use models::placed_block::{PlacedBlock, TimelineLayout};
pub use models::segment::Segment;
pub use models::settings::LayoutSettings;
pub use models::view_window::ViewWindow;
pub use services::layout::{layout_week, LayoutEngine};
