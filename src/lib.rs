pub mod config;
pub mod date;
pub mod error;
pub mod geometry;
pub mod ir;
pub mod layout;
pub mod layout_dump;

pub use config::{LayoutConfig, load_config};
pub use error::LayoutError;
pub use layout::{compute_radial_layout, compute_schedule_layout, route};
