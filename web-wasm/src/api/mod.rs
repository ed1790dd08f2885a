//! 検出サービスAPI連携

pub mod detect;

pub use detect::{check_health, detect};
