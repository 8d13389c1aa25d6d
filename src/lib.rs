//! Resize planning and resolution catalogs for fitting images into model-friendly canvases.
//!
//! Pure geometry. Pixels are handled by caller-supplied collaborators.
//!
//! # Modules
//!
//! - [`fit`] — Keep-proportion policies (stretch, resize, pad, pad-edge, crop) and plan computation
//! - [`catalog`] — Lattice resolutions for an aspect ratio, modulus, and megapixel ceiling
//! - [`color`] — Pad fill and its lenient `"r, g, b"` text form
//! - [`pipeline`] — Lowering a plan to crop/resample/pad steps for external collaborators

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod logging;

pub mod catalog;
pub mod color;
pub mod error;
pub mod fit;
pub mod pipeline;

pub use catalog::{AspectRatio, CatalogConfig, Orientation, Resolution, Selection, select};
#[cfg(feature = "alloc")]
pub use catalog::{enumerate_all, enumerate_oriented};
pub use color::PadColor;
pub use error::{ParseError, PlanError};
pub use fit::{CropAnchor, FitRequest, Insets, KeepProportion, Rect, ResizePlan, Size, plan};
pub use pipeline::{Cropper, Padder, ResampleMethod, Resampler, Step, execute};
