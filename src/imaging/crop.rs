//! Ratio cropping over decoded rasters.
//!
//! Thin wrapper combining [`crop_window`](super::crop_window) with the
//! `image` crate's sub-region extraction. All geometry decisions live in
//! the pure calculation functions; this module only touches pixels.

use super::calculations::crop_window;
use super::params::{Position, Ratio};
use image::{DynamicImage, GenericImageView};

/// Crop `img` to the target `ratio`, sliding the crop window along the
/// slack axis by `position` of the available slack.
///
/// The sentinel [`Ratio::NONE`] returns the source unchanged, as does a
/// ratio that already matches the source aspect.
pub fn crop_to_ratio(img: DynamicImage, ratio: Ratio, position: Position) -> DynamicImage {
    if ratio.is_none() {
        return img;
    }

    let (width, height) = img.dimensions();
    let win = crop_window((width, height), ratio, position);
    if win.covers((width, height)) {
        return img;
    }

    log::debug!(
        "cropping {width}x{height} to {}x{} at ({}, {})",
        win.width,
        win.height,
        win.x,
        win.y
    );
    img.crop_imm(win.x, win.y, win.width, win.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Image whose red channel encodes the x coordinate and green channel
    /// the y coordinate, so crops reveal their window origin.
    fn coordinate_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn sentinel_ratio_is_identity() {
        let img = coordinate_image(200, 150);
        for position in [Position::LEADING, Position::CENTER, Position::TRAILING] {
            let out = crop_to_ratio(img.clone(), Ratio::NONE, position);
            assert_eq!(out.dimensions(), (200, 150));
            assert_eq!(out.to_rgb8(), img.to_rgb8());
        }
    }

    #[test]
    fn matching_aspect_returns_full_source() {
        let img = coordinate_image(160, 120);
        let out = crop_to_ratio(img, Ratio::of(4, 3), Position::TRAILING);
        assert_eq!(out.dimensions(), (160, 120));
        assert_eq!(out.to_rgb8().get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn output_matches_ratio_within_one_pixel() {
        let cases = [
            ((400, 300), Ratio::of(2, 3)),
            ((300, 400), Ratio::of(16, 9)),
            ((1000, 333), Ratio::of(3, 1)),
            ((123, 457), Ratio::of(1, 1)),
        ];
        for (source, ratio) in cases {
            let out = crop_to_ratio(coordinate_image(source.0, source.1), ratio, Position::CENTER);
            let (w, h) = out.dimensions();
            let expected_w = (f64::from(h) * ratio.value()).round() as i64;
            assert!(
                (i64::from(w) - expected_w).abs() <= 1,
                "source {source:?} ratio {} gave {w}x{h}",
                ratio.value()
            );
        }
    }

    #[test]
    fn positions_produce_opposite_window_origins() {
        // 300x100 cropped square: leading window starts at x=0, trailing at x=200
        let leading = crop_to_ratio(coordinate_image(300, 100), Ratio::of(1, 1), Position::LEADING);
        let trailing =
            crop_to_ratio(coordinate_image(300, 100), Ratio::of(1, 1), Position::TRAILING);

        assert_eq!(leading.dimensions(), (100, 100));
        assert_eq!(trailing.dimensions(), (100, 100));
        assert_eq!(leading.to_rgb8().get_pixel(0, 0)[0], 0);
        assert_eq!(trailing.to_rgb8().get_pixel(0, 0)[0], 200);
    }

    #[test]
    fn tall_source_slides_vertically() {
        // 100x300 cropped square at the trailing edge starts at y=200
        let out = crop_to_ratio(coordinate_image(100, 300), Ratio::of(1, 1), Position::TRAILING);
        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(out.to_rgb8().get_pixel(0, 0)[1], 200);
    }
}
