//! Focal position estimation.
//!
//! Glue between subject detection and the crop-window math: run the
//! detector, pick the most confident region, and convert its center into a
//! normalized position along the slack axis. Every "nothing to do" case —
//! no detection, no slack, sentinel ratio — silently resolves to the
//! caller-supplied fallback. Detection never produces an error.

use super::calculations::focal_position;
use super::detect::SubjectDetector;
use super::params::{Position, Ratio};
use image::{DynamicImage, GenericImageView};

/// Estimate the crop position that best retains the detected subject.
///
/// Returns `fallback` when detection finds no region or when the source
/// aspect already matches `ratio` (no slack to slide along).
pub fn estimate_position(
    detector: &impl SubjectDetector,
    img: &DynamicImage,
    ratio: Ratio,
    fallback: Position,
) -> Position {
    let regions = detector.detect(img);
    let Some(best) = regions
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
    else {
        log::debug!("no subject detected, keeping position {}", fallback.value());
        return fallback;
    };

    match focal_position(img.dimensions(), ratio, best.center()) {
        Some(position) => {
            log::debug!(
                "subject at ({:.0}, {:.0}) score {:.2} → position {:.3}",
                best.center().0,
                best.center().1,
                best.score,
                position.value()
            );
            position
        }
        None => fallback,
    }
}
