// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test code may unwrap and panic on failed expectations.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Scroll-driven 3D background scene for the Krishi Mitra site.
//!
//! A wireframe "cyber plant" sits at the origin inside a ring of glowing
//! particle nodes. As the visitor scrolls, the camera travels through four
//! authored stages (diagnosis, sourcing, market, strategy) and the plant
//! makes one full turn.
//!
//! # Key entry points
//!
//! - [`timeline::ScrollTimeline`] - pure mapping from scroll progress to
//!   camera pose and object rotation
//! - [`composer::SceneComposer`] - owns the camera, applies samples to a
//!   [`surface::RenderSurface`] each frame, tears down cleanly
//! - [`options::Options`] - TOML-backed configuration (stage timing, idle
//!   motion, pointer orbit, particles, lighting)
//! - `web` (feature `web`) - browser listener and frame-loop adapter
//!
//! # Architecture
//!
//! Sampling the timeline has no side effects and no hidden state: every
//! frame the composer takes the latest [`scroll::ScrollProgress`],
//! computes a fresh [`timeline::CameraPose`] and assigns it to the camera
//! in one step. Host listeners register their release callbacks with the
//! composer, so teardown detaches all of them synchronously and any stray
//! callback afterwards is a no-op.

pub mod camera;
pub mod composer;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod timeline;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use composer::{FrameOutcome, SceneComposer};
pub use error::SceneError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use scroll::{ScrollMetrics, ScrollProgress};
pub use surface::{RenderSurface, UniformSurface};
pub use timeline::{CameraPose, ScrollTimeline, TimelineSample};
