//! Barcode Detect Common Library
//!
//! Web(WASM)フロントエンドと共有される型・状態機械・デコード処理

pub mod client;
pub mod controller;
pub mod error;
pub mod format;
pub mod types;

pub use client::{decode_health, decode_response, detect_url, health_url};
pub use controller::{DetectionOutcome, DetectorController, ImageSelection};
pub use error::{DetectionError, Result};
pub use types::{AppliedThresholds, BarcodeData, Detection, DetectionResponse, HealthResponse};
