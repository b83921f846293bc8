//! Crop geometry and subject-aware positioning — pure Rust.
//!
//! | Concern | Crate / function |
//! |---|---|
//! | **Window math** | [`crop_window`] / [`focal_position`] (pure, no I/O) |
//! | **Cropping** | `image::DynamicImage::crop_imm` |
//! | **Subject detection** | `rustface` behind [`SubjectDetector`] |
//! | **Position estimation** | [`estimate_position`] |
//!
//! The module is split into:
//! - **Params**: [`Ratio`] and [`Position`] value types
//! - **Calculations**: pure functions for window geometry (unit testable)
//! - **Crop**: the ratio cropper over decoded rasters
//! - **Detect**: [`SubjectDetector`] trait + [`FaceDetector`]
//! - **Position**: detection-to-offset pipeline glue

mod calculations;
pub mod crop;
pub mod detect;
mod params;
pub mod position;

pub use calculations::{CropWindow, crop_window, focal_position};
pub use crop::crop_to_ratio;
pub use detect::{
    DetectorError, FaceDetector, FaceDetectorConfig, SubjectDetector, SubjectRegion,
};
pub use params::{Position, Ratio};
pub use position::estimate_position;
