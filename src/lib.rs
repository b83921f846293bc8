//! # artcrop
//!
//! Artwork resolution and aspect-aware cropping for media catalog entities.
//! Given a catalogued actor or titled work, the crate picks the best source
//! image URL, fetches and decodes it, and crops it to the presentation
//! aspect ratio — sliding the crop window toward the detected subject when
//! that is worth doing.
//!
//! # Architecture: One Pipeline, Four Entry Points
//!
//! Every operation runs the same five-stage pipeline; the entry point only
//! fixes the ratio, the default focal position, and the detection policy:
//!
//! ```text
//! 1. Lookup     catalog record        (actor image set / work cover URLs)
//! 2. Select     source URL            (precedence over hi-res overrides)
//! 3. Resolve    fetch + decode        (provider-scoped transport → raster)
//! 4. Position   focal offset          (subject detection, or fixed default)
//! 5. Crop       ratio window          (slide along the slack axis)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Entity records, cover classification, URL precedence, the `Catalog` lookup trait |
//! | [`transport`] | Provider-scoped fetching: `Transport` / `ProviderRegistry` traits, `ureq`-backed [`transport::HttpTransport`] |
//! | [`imaging`] | Crop geometry, the ratio cropper, subject detection and position estimation |
//! | [`engine`] | Orchestration — error taxonomy, the image resolver, and the four artwork operations |
//!
//! # Design Decisions
//!
//! ## Collaborators as Capability Traits
//!
//! Catalog lookup, provider handles and byte transport are traits, not
//! concrete dependencies. Each upstream source plugs in its own auth,
//! headers and rate limiting behind [`transport::Transport`] without this
//! crate learning source identities, and tests drive the whole pipeline
//! with recording mocks and in-memory images.
//!
//! ## Detection Is Optional, Never an Error
//!
//! Subject detection ([`imaging::FaceDetector`], a rustface adapter) only
//! ever improves the crop position. Records carry an explicit
//! [`catalog::CoverClass`] so classes known to lack a detectable subject
//! (collages, text-only jackets) skip detection entirely, and a detection
//! miss silently falls back to the operation's default position.
//!
//! ## Blocking and Per-Request
//!
//! The pipeline is synchronous: fetch, decode, detect and crop run
//! sequentially and every request owns its intermediate values. There are
//! no retries, timers or background work here — timeouts and retry policy
//! belong to the transport.

pub mod catalog;
pub mod engine;
pub mod imaging;
pub mod transport;
