//! Parameter types for cropping operations.
//!
//! These types describe *where* and *how much* to crop, not *how* to do it.
//! They are the interface between the orchestration layer (which picks the
//! presentation ratio and focal position for each kind of artwork) and the
//! window math and pixel work in [`crop_window`](super::crop_window) and
//! [`crop_to_ratio`](super::crop_to_ratio).
//!
//! ## Types
//!
//! - [`Ratio`] — Target width/height proportion. The zero sentinel
//!   [`Ratio::NONE`] means "no cropping, pass the source through".
//! - [`Position`] — Normalized focal offset in `[0, 1]` along the axis with
//!   cropping slack. Clamped on construction.

/// Target aspect ratio (width / height) for cropped output.
///
/// A non-positive value is the "no cropping" sentinel; use [`Ratio::NONE`]
/// rather than constructing it by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(pub f64);

impl Ratio {
    /// Passthrough sentinel: the cropper returns the source unchanged.
    pub const NONE: Ratio = Ratio(0.0);

    /// Ratio from an integer width/height pair, e.g. `Ratio::of(16, 9)`.
    ///
    /// A zero side yields [`Ratio::NONE`].
    pub fn of(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            Ratio::NONE
        } else {
            Ratio(f64::from(width) / f64::from(height))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True for the no-crop sentinel.
    pub fn is_none(self) -> bool {
        self.0 <= 0.0
    }
}

/// Normalized focal offset along the slack axis (0.0–1.0).
///
/// 0.0 anchors the crop window to the leading edge (top/left), 1.0 to the
/// trailing edge (bottom/right), 0.5 centers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub f64);

impl Position {
    pub const LEADING: Position = Position(0.0);
    pub const CENTER: Position = Position(0.5);
    pub const TRAILING: Position = Position(1.0);

    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::CENTER
    }
}
