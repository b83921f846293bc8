//! Catalog records and the lookup collaborator boundary.
//!
//! The catalog itself (provider scraping, merging, refresh policy) lives in
//! the surrounding service; this crate only consumes its records through the
//! [`Catalog`] trait. Records carry everything the artwork pipeline needs to
//! decide *which* URL to fetch and *whether* subject detection is worth
//! running — nothing is re-derived downstream.
//!
//! ## URL precedence
//!
//! A work record carries a base cover URL plus two optional high-resolution
//! overrides. [`WorkRecord::preferred_image_url`] applies the precedence
//! policy; upstream APIs routinely send empty strings for absent fields, so
//! emptiness is normalized here rather than during deserialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error("catalog lookup failed: {0}")]
    Lookup(String),
}

/// Visual classification of a work's cover art, decided once at
/// catalog-lookup time.
///
/// Some catalog sources are known to ship collage or text-heavy covers
/// where subject detection can only waste time; tagging the record up front
/// lets the pipeline skip detection without re-deriving the distinction
/// from identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverClass {
    /// Photographic cover with a prominent subject; detection is worthwhile.
    Subject,
    /// Collage, montage or typographic layout with no single subject.
    Composite,
}

impl CoverClass {
    pub fn has_detectable_subject(self) -> bool {
        matches!(self, CoverClass::Subject)
    }
}

/// Catalog record for an actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: String,
    pub name: String,
    /// Ordered image URLs; the first non-empty entry is the canonical
    /// primary image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl ActorRecord {
    /// The canonical primary image URL, if the record has one.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// Catalog record for a titled work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    /// Base cover URL; always a valid fallback when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// High-resolution full-jacket override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_cover_url: Option<String>,
    /// High-resolution front-cover override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_thumb_url: Option<String>,
    pub cover_class: CoverClass,
}

impl WorkRecord {
    /// Apply the URL precedence policy.
    ///
    /// With `want_thumbnail` the big front-cover override wins, otherwise
    /// the big full-jacket override; the base cover URL is the fallback in
    /// both cases. Returns `None` when no non-empty candidate exists.
    pub fn preferred_image_url(&self, want_thumbnail: bool) -> Option<&str> {
        let override_url = if want_thumbnail {
            &self.big_thumb_url
        } else {
            &self.big_cover_url
        };
        non_empty(override_url).or_else(|| non_empty(&self.cover_url))
    }
}

fn non_empty(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|u| !u.is_empty())
}

/// Trait for catalog lookup collaborators.
///
/// `scope` names the upstream source the entity was catalogued from;
/// `refresh` asks the catalog to revalidate its copy before answering.
pub trait Catalog {
    fn actor_by_id(
        &self,
        id: &str,
        scope: &str,
        refresh: bool,
    ) -> Result<ActorRecord, CatalogError>;

    fn work_by_id(&self, id: &str, scope: &str, refresh: bool) -> Result<WorkRecord, CatalogError>;
}
