//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{Position, Ratio};

/// Integer crop window in source image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Top-left x coordinate.
    pub x: u32,
    /// Top-left y coordinate.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropWindow {
    /// Window covering the whole source.
    fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// True when the window spans the entire source.
    pub fn covers(&self, source: (u32, u32)) -> bool {
        self.x == 0 && self.y == 0 && (self.width, self.height) == source
    }
}

/// Calculate the crop window for a target ratio and focal position.
///
/// The window is the largest rectangle with the target aspect ratio that
/// fits inside the source, slid along the single axis with slack by
/// `position` of the available slack. The sentinel [`Ratio::NONE`] and a
/// ratio matching the source aspect both yield the full source window.
///
/// # Examples
/// ```
/// # use artcrop::imaging::{crop_window, CropWindow, Position, Ratio};
/// // 300x100 source cropped square, centered → 100x100 window at x=100
/// let win = crop_window((300, 100), Ratio::of(1, 1), Position::CENTER);
/// assert_eq!(win, CropWindow { x: 100, y: 0, width: 100, height: 100 });
/// ```
pub fn crop_window(source: (u32, u32), ratio: Ratio, position: Position) -> CropWindow {
    let (src_w, src_h) = source;
    if ratio.is_none() || src_w == 0 || src_h == 0 {
        return CropWindow::full(src_w, src_h);
    }

    let target = ratio.value();
    let fraction = position.value().clamp(0.0, 1.0);
    let src_aspect = f64::from(src_w) / f64::from(src_h);

    if src_aspect > target {
        // Source is wider than the target: full height, trim width.
        let width = ((f64::from(src_h) * target).round() as u32).clamp(1, src_w);
        let slack = src_w - width;
        CropWindow {
            x: (f64::from(slack) * fraction).round() as u32,
            y: 0,
            width,
            height: src_h,
        }
    } else {
        // Source is taller (or matches): full width, trim height.
        let height = ((f64::from(src_w) / target).round() as u32).clamp(1, src_h);
        let slack = src_h - height;
        CropWindow {
            x: 0,
            y: (f64::from(slack) * fraction).round() as u32,
            width: src_w,
            height,
        }
    }
}

/// Position that keeps `focus` (a point in source pixel coordinates) as
/// close to the crop window's center as the slack allows.
///
/// Returns `None` when there is nothing to decide: the ratio is the no-crop
/// sentinel, or the source aspect already matches the target (no slack).
/// Callers fall back to their default position in that case.
pub fn focal_position(source: (u32, u32), ratio: Ratio, focus: (f64, f64)) -> Option<Position> {
    let (src_w, src_h) = source;
    if ratio.is_none() || src_w == 0 || src_h == 0 {
        return None;
    }

    let target = ratio.value();
    let src_aspect = f64::from(src_w) / f64::from(src_h);

    let (extent, window, center) = if src_aspect > target {
        let width = ((f64::from(src_h) * target).round() as u32).clamp(1, src_w);
        (src_w, width, focus.0)
    } else {
        let height = ((f64::from(src_w) / target).round() as u32).clamp(1, src_h);
        (src_h, height, focus.1)
    };

    let slack = extent - window;
    if slack == 0 {
        return None;
    }

    let start = (center - f64::from(window) / 2.0).clamp(0.0, f64::from(slack));
    Some(Position::new(start / f64::from(slack)))
}
