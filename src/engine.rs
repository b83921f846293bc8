//! Artwork orchestration.
//!
//! Each entry point wires a fixed presentation ratio, a default focal
//! position, and a detection policy, then runs the same pipeline:
//!
//! ```text
//! catalog lookup → URL selection → fetch + decode → position → crop
//! ```
//!
//! The engine owns no I/O of its own — catalog, provider registry and
//! transport are collaborators passed in at construction, and subject
//! detection sits behind [`SubjectDetector`]. Every stage is blocking and
//! per-request; the engine holds no mutable state, so it can be shared
//! across threads whenever its collaborators can.

use crate::catalog::{Catalog, CatalogError};
use crate::imaging::{Position, Ratio, SubjectDetector, crop_to_ratio, estimate_position};
use crate::transport::{ProviderHandle, ProviderRegistry, Transport, TransportError};
use image::{DynamicImage, GenericImageView};
use std::io::Read;
use thiserror::Error;

/// Presentation ratios for catalog artwork.
const PRIMARY_IMAGE_RATIO: Ratio = Ratio(2.0 / 3.0);
const THUMB_IMAGE_RATIO: Ratio = Ratio(16.0 / 9.0);
const BACKDROP_IMAGE_RATIO: Ratio = Ratio::NONE;

/// Default focal positions per artwork kind.
///
/// Work covers keep their subject toward the right edge of the jacket, so
/// the primary crop defaults high; everything else centers or anchors to
/// the leading edge.
const ACTOR_PRIMARY_POSITION: Position = Position(0.5);
const WORK_PRIMARY_POSITION: Position = Position(0.8);
const WORK_THUMB_POSITION: Position = Position(0.5);
const WORK_BACKDROP_POSITION: Position = Position(0.0);

#[derive(Error, Debug)]
pub enum ArtworkError {
    /// The entity exists but has no usable image URL.
    #[error("image not found")]
    NotFound,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Fetch(#[from] TransportError),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Fetch and decode a single image URL.
///
/// The transport's byte stream is read to completion and released before
/// decoding; fetch and decode failures are both terminal, with no retry at
/// this layer. Decoding auto-detects the format from the payload bytes.
pub fn fetch_image(
    transport: &impl Transport,
    url: &str,
    provider: &ProviderHandle,
) -> Result<DynamicImage, ArtworkError> {
    let bytes = {
        let mut stream = transport.fetch(url, provider)?;
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(TransportError::from)?;
        bytes
    };

    let img = image::load_from_memory(&bytes)?;
    log::debug!(
        "decoded {url}: {}x{} ({} bytes)",
        img.width(),
        img.height(),
        bytes.len()
    );
    Ok(img)
}

/// Resolves and crops canonical artwork for catalog entities.
pub struct Engine<C, P, T, D> {
    catalog: C,
    providers: P,
    transport: T,
    detector: D,
}

impl<C, P, T, D> Engine<C, P, T, D>
where
    C: Catalog,
    P: ProviderRegistry,
    T: Transport,
    D: SubjectDetector,
{
    pub fn new(catalog: C, providers: P, transport: T, detector: D) -> Self {
        Self {
            catalog,
            providers,
            transport,
            detector,
        }
    }

    /// Actor portrait, cropped 2:3 around the detected subject.
    pub fn actor_primary_image(&self, id: &str, scope: &str) -> Result<DynamicImage, ArtworkError> {
        let actor = self.catalog.actor_by_id(id, scope, true)?;
        let url = actor.primary_image_url().ok_or(ArtworkError::NotFound)?;
        self.image_by_url(url, scope, PRIMARY_IMAGE_RATIO, ACTOR_PRIMARY_POSITION, true)
    }

    /// Work poster, cropped 2:3.
    ///
    /// The portrait crop works best from the high-resolution front-cover
    /// scan, so selection runs with the thumbnail flag set. Detection is
    /// attempted only for cover classes with a detectable subject.
    pub fn work_primary_image(&self, id: &str, scope: &str) -> Result<DynamicImage, ArtworkError> {
        let work = self.catalog.work_by_id(id, scope, true)?;
        let url = work.preferred_image_url(true).ok_or(ArtworkError::NotFound)?;
        let auto = work.cover_class.has_detectable_subject();
        self.image_by_url(url, scope, PRIMARY_IMAGE_RATIO, WORK_PRIMARY_POSITION, auto)
    }

    /// Work thumbnail, cropped 16:9 from the full jacket, centered.
    pub fn work_thumb_image(&self, id: &str, scope: &str) -> Result<DynamicImage, ArtworkError> {
        let work = self.catalog.work_by_id(id, scope, true)?;
        let url = work
            .preferred_image_url(false)
            .ok_or(ArtworkError::NotFound)?;
        self.image_by_url(url, scope, THUMB_IMAGE_RATIO, WORK_THUMB_POSITION, false)
    }

    /// Work backdrop: the full jacket, uncropped.
    pub fn work_backdrop_image(&self, id: &str, scope: &str) -> Result<DynamicImage, ArtworkError> {
        let work = self.catalog.work_by_id(id, scope, true)?;
        let url = work
            .preferred_image_url(false)
            .ok_or(ArtworkError::NotFound)?;
        self.image_by_url(url, scope, BACKDROP_IMAGE_RATIO, WORK_BACKDROP_POSITION, false)
    }

    fn image_by_url(
        &self,
        url: &str,
        scope: &str,
        ratio: Ratio,
        position: Position,
        auto_position: bool,
    ) -> Result<DynamicImage, ArtworkError> {
        let provider = self.providers.provider(scope);
        let img = fetch_image(&self.transport, url, &provider)?;

        let position = if auto_position {
            estimate_position(&self.detector, &img, ratio, position)
        } else {
            position
        };

        Ok(crop_to_ratio(img, ratio, position))
    }
}
