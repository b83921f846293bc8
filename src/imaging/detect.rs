//! Subject detection behind a capability trait.
//!
//! The [`SubjectDetector`] trait is the seam between the crop pipeline and
//! whatever locates salient regions in a raster. The pipeline treats the
//! detector as a black box: it only consumes [`SubjectRegion`] boxes and
//! never distinguishes "no detector ran" from "nothing was found" — both
//! silently fall back to the caller's default position.
//!
//! The production implementation is [`FaceDetector`], a thin adapter over
//! the `rustface` SeetaFace port. The model file is supplied by the caller;
//! nothing is bundled.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("failed to load detection model from {path}: {message}")]
    ModelLoad { path: String, message: String },
}

/// A detected salient region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Detector confidence; higher wins when several regions are found.
    pub score: f64,
}

impl SubjectRegion {
    /// Center point of the region.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Trait for subject detection backends.
///
/// Implementations locate salient regions (faces, in the shipped backend)
/// in a decoded raster. An empty result is not an error; the pipeline falls
/// back to a fixed position.
pub trait SubjectDetector {
    fn detect(&self, img: &DynamicImage) -> Vec<SubjectRegion>;
}

/// Tuning knobs for [`FaceDetector`], passed through to rustface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDetectorConfig {
    /// Smallest face to report, in pixels.
    pub min_face_size: u32,
    /// Detection score threshold; higher is stricter.
    pub score_thresh: f64,
    pub pyramid_scale_factor: f32,
    /// Sliding window step in x and y.
    pub slide_window_step: (u32, u32),
}

impl Default for FaceDetectorConfig {
    fn default() -> Self {
        Self {
            min_face_size: 20,
            score_thresh: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: (4, 4),
        }
    }
}

/// Face detection backed by rustface (SeetaFace).
///
/// rustface's detector requires `&mut self`, so access is serialized through
/// a mutex; detection is already the slowest pipeline stage, so the lock is
/// never contended in practice. A poisoned lock degrades to "no detection".
pub struct FaceDetector {
    inner: Mutex<Box<dyn rustface::Detector>>,
}

impl FaceDetector {
    /// Load a SeetaFace model from disk with default tuning.
    pub fn from_model_path(path: &Path) -> Result<Self, DetectorError> {
        Self::with_config(path, FaceDetectorConfig::default())
    }

    /// Load a SeetaFace model from disk with explicit tuning.
    pub fn with_config(path: &Path, config: FaceDetectorConfig) -> Result<Self, DetectorError> {
        let display = path.display().to_string();
        let mut detector =
            rustface::create_detector(&display).map_err(|e| DetectorError::ModelLoad {
                path: display.clone(),
                message: e.to_string(),
            })?;

        detector.set_min_face_size(config.min_face_size);
        detector.set_score_thresh(config.score_thresh);
        detector.set_pyramid_scale_factor(config.pyramid_scale_factor);
        let (step_x, step_y) = config.slide_window_step;
        detector.set_slide_window_step(step_x, step_y);

        Ok(Self {
            inner: Mutex::new(detector),
        })
    }
}

/// Longest edge used for detection; larger sources are downscaled first
/// and the regions mapped back into source coordinates.
const MAX_DETECTION_EDGE: u32 = 400;

impl SubjectDetector for FaceDetector {
    fn detect(&self, img: &DynamicImage) -> Vec<SubjectRegion> {
        let (src_w, src_h) = img.dimensions();
        let gray = if src_w.max(src_h) > MAX_DETECTION_EDGE {
            img.resize(MAX_DETECTION_EDGE, MAX_DETECTION_EDGE, FilterType::Triangle)
                .to_luma8()
        } else {
            img.to_luma8()
        };
        let (width, height) = gray.dimensions();
        let scale = f64::from(width.max(height)) / f64::from(src_w.max(src_h).max(1));
        let data = rustface::ImageData::new(gray.as_raw(), width, height);

        let Ok(mut detector) = self.inner.lock() else {
            log::warn!("face detector lock poisoned, skipping detection");
            return Vec::new();
        };

        detector
            .detect(&data)
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                SubjectRegion {
                    x: f64::from(bbox.x()) / scale,
                    y: f64::from(bbox.y()) / scale,
                    width: f64::from(bbox.width()) / scale,
                    height: f64::from(bbox.height()) / scale,
                    score: f64::from(face.score()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock detector that returns queued regions and records every call.
    #[derive(Default)]
    pub struct MockDetector {
        pub regions: Mutex<Vec<Vec<SubjectRegion>>>,
        pub calls: Mutex<Vec<(u32, u32)>>,
    }

    impl MockDetector {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_regions(regions: Vec<Vec<SubjectRegion>>) -> Self {
            Self {
                regions: Mutex::new(regions),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl SubjectDetector for MockDetector {
        fn detect(&self, img: &DynamicImage) -> Vec<SubjectRegion> {
            self.calls.lock().unwrap().push(img.dimensions());
            self.regions.lock().unwrap().pop().unwrap_or_default()
        }
    }

    #[test]
    fn region_center() {
        let region = SubjectRegion {
            x: 10.0,
            y: 20.0,
            width: 40.0,
            height: 60.0,
            score: 1.0,
        };
        assert_eq!(region.center(), (30.0, 50.0));
    }

    #[test]
    fn mock_records_calls_and_drains_regions() {
        let detector = MockDetector::with_regions(vec![vec![SubjectRegion {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            score: 0.5,
        }]]);
        let img = DynamicImage::new_rgb8(32, 16);

        assert_eq!(detector.detect(&img).len(), 1);
        assert_eq!(detector.detect(&img).len(), 0);
        assert_eq!(detector.call_count(), 2);
        assert_eq!(detector.calls.lock().unwrap()[0], (32, 16));
    }

    #[test]
    fn missing_model_file_errors() {
        let result = FaceDetector::from_model_path(Path::new("/nonexistent/model.bin"));
        assert!(matches!(result, Err(DetectorError::ModelLoad { .. })));
    }
}
