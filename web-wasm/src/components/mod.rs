//! UIコンポーネント

pub mod error_panel;
pub mod header;
pub mod image_preview;
pub mod loading_indicator;
pub mod results_panel;
pub mod upload_area;
