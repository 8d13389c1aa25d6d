//! Resolution catalog: every lattice resolution for an aspect ratio,
//! divisibility modulus, and megapixel ceiling.
//!
//! A lattice resolution is `(ratio_w * k, ratio_h * k)` where `k` is a
//! positive multiple of the modulus, so both aspect ratio and divisibility
//! hold by construction.
//!
//! # Example
//!
//! ```
//! use pixelforge::catalog::{self, AspectRatio, Orientation, Resolution};
//!
//! let all = catalog::enumerate_all(AspectRatio::SQUARE, 16, 1.0);
//! assert!(all.contains(&Resolution::new(1024, 1024)));
//! assert!(!all.contains(&Resolution::new(1040, 1040)));
//!
//! let portrait = catalog::select(Resolution::new(1536, 1024), Orientation::Portrait);
//! assert_eq!(portrait, Resolution::new(1024, 1536));
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::ParseError;
#[cfg(feature = "alloc")]
use crate::logging::debug;

/// Pixels per megapixel (binary: 1024 × 1024).
pub const MEGAPIXEL: u64 = 1024 * 1024;

/// Divisibility moduli offered for model-friendly sizes.
pub const DIVISOR_PRESETS: [u32; 3] = [16, 32, 64];

/// Megapixel ceilings offered for selection.
pub const MEGAPIXEL_PRESETS: [u32; 7] = [1, 2, 4, 6, 8, 12, 16];

/// Integer aspect ratio `width:height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// 1:1.
    pub const SQUARE: Self = Self::new(1, 1);
    /// 3:2, the classic 35mm frame.
    pub const PHOTO_3_2: Self = Self::new(3, 2);
    /// 4:3.
    pub const STANDARD_4_3: Self = Self::new(4, 3);
    /// 16:9 widescreen.
    pub const WIDE_16_9: Self = Self::new(16, 9);
    /// 16:10.
    pub const WIDE_16_10: Self = Self::new(16, 10);

    /// The preset ratios, in menu order.
    pub const PRESETS: [Self; 5] = [
        Self::SQUARE,
        Self::PHOTO_3_2,
        Self::STANDARD_4_3,
        Self::WIDE_16_9,
        Self::WIDE_16_10,
    ];

    /// Create a ratio. Components need not be reduced.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::PHOTO_3_2
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.trim().split_once(':').ok_or(ParseError::InvalidAspectRatio)?;
        let w: u32 = w.trim().parse().map_err(|_| ParseError::InvalidAspectRatio)?;
        let h: u32 = h.trim().parse().map_err(|_| ParseError::InvalidAspectRatio)?;
        if w == 0 || h == 0 {
            return Err(ParseError::InvalidAspectRatio);
        }
        Ok(Self::new(w, h))
    }
}

/// Which way round a resolution is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Width ≥ height.
    #[default]
    Landscape,
    /// Height ≥ width.
    Portrait,
    /// Width == height.
    Square,
}

impl Orientation {
    /// Every orientation.
    pub const ALL: [Self; 3] = [Self::Landscape, Self::Portrait, Self::Square];

    /// Canonical text name (`landscape`, `portrait`, `square`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }

    /// Whether `resolution` already has this orientation.
    /// Square resolutions count as both landscape and portrait.
    pub const fn accepts(self, resolution: Resolution) -> bool {
        let (w, h) = (resolution.width, resolution.height);
        match self {
            Self::Landscape => w >= h,
            Self::Portrait => w <= h,
            Self::Square => w == h,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownOrientation)
    }
}

/// A catalog entry, written `W×H` (U+00D7 separator).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Sentinel returned when no lattice point fits. Written `INVALID`.
    pub const INVALID: Self = Self::new(0, 0);

    /// Create a resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether this is a real resolution rather than the sentinel.
    pub const fn is_valid(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// Width and height exchanged.
    pub const fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Area in megapixels, rounded to 4 decimal places.
    pub fn megapixels(&self) -> f64 {
        let mp = self.area() as f64 / MEGAPIXEL as f64;
        (mp * 10_000.0).round() / 10_000.0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            f.write_str("INVALID")
        } else {
            write!(f, "{}×{}", self.width, self.height)
        }
    }
}

impl FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "INVALID" {
            return Ok(Self::INVALID);
        }
        let (w, h) = s.split_once('×').ok_or(ParseError::InvalidResolution)?;
        let w = w.trim().parse().map_err(|_| ParseError::InvalidResolution)?;
        let h = h.trim().parse().map_err(|_| ParseError::InvalidResolution)?;
        Ok(Self::new(w, h))
    }
}

/// Every lattice resolution under the ceiling, in both orientations.
///
/// Sorted by area, then width; no duplicates. A modulus of 0 is treated
/// as 1. When nothing fits (zero ratio component, non-positive ceiling,
/// or a first lattice point already over the ceiling) the result is the
/// single [`Resolution::INVALID`] sentinel.
///
/// The output holds about `2 * sqrt(ceiling / (ratio_w * ratio_h)) / modulus`
/// entries, so it grows with the ceiling. Ceilings beyond the largest `u32`
/// square are clamped to it.
#[cfg(feature = "alloc")]
pub fn enumerate_all(
    ratio: AspectRatio,
    divisible_by: u32,
    max_megapixels: f64,
) -> alloc::vec::Vec<Resolution> {
    let mut out = alloc::vec::Vec::new();
    for r in lattice(ratio, divisible_by, max_megapixels) {
        out.push(r);
        out.push(r.swapped());
    }
    out.sort_unstable_by_key(|r| (r.area(), r.width));
    out.dedup();
    if out.is_empty() {
        debug!(%ratio, divisible_by, max_megapixels, "no lattice resolution fits");
        out.push(Resolution::INVALID);
    }
    out
}

/// Like [`enumerate_all`], keeping only resolutions `orientation` accepts.
///
/// Falls back to the [`Resolution::INVALID`] sentinel when the filter
/// leaves nothing (e.g. `Square` on a 16:9 lattice).
#[cfg(feature = "alloc")]
pub fn enumerate_oriented(
    ratio: AspectRatio,
    divisible_by: u32,
    max_megapixels: f64,
    orientation: Orientation,
) -> alloc::vec::Vec<Resolution> {
    let mut out = enumerate_all(ratio, divisible_by, max_megapixels);
    out.retain(|r| r.is_valid() && orientation.accepts(*r));
    if out.is_empty() {
        out.push(Resolution::INVALID);
    }
    out
}

/// Swap the axes of an already-chosen resolution to match `orientation`.
///
/// Never consults the lattice. `Square` and the sentinel pass through.
pub fn select(resolution: Resolution, orientation: Orientation) -> Resolution {
    match orientation {
        Orientation::Landscape if resolution.height > resolution.width => resolution.swapped(),
        Orientation::Portrait if resolution.width > resolution.height => resolution.swapped(),
        _ => resolution,
    }
}

/// Iterate `(ratio_w * k, ratio_h * k)` for `k = d, 2d, ...` while the area
/// stays within the ceiling.
#[cfg(feature = "alloc")]
fn lattice(
    ratio: AspectRatio,
    divisible_by: u32,
    max_megapixels: f64,
) -> impl Iterator<Item = Resolution> {
    let step = u64::from(divisible_by.max(1));
    let (rw, rh) = (u64::from(ratio.width), u64::from(ratio.height));
    // A zero component makes every area 0 and the walk endless.
    let usable = rw > 0 && rh > 0 && max_megapixels.is_finite() && max_megapixels > 0.0;
    let max_dim = u64::from(u32::MAX);
    let max_pixels = (max_megapixels * MEGAPIXEL as f64).min((max_dim * max_dim) as f64);

    (1u64..)
        .map(move |i| i * step)
        .map(move |k| (rw * k, rh * k))
        .take_while(move |&(w, h)| {
            usable && w <= max_dim && h <= max_dim && (w * h) as f64 <= max_pixels
        })
        .map(|(w, h)| Resolution::new(w as u32, h as u32))
}

/// Caller-owned catalog selection state.
///
/// Holds what a UI would remember between calls (aspect ratio, modulus,
/// ceiling, orientation); the catalog functions themselves stay stateless.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogConfig {
    pub aspect: AspectRatio,
    pub orientation: Orientation,
    pub divisible_by: u32,
    pub max_megapixels: f64,
}

impl Default for CatalogConfig {
    /// 3:2, landscape, divisible by 16, 4 MP.
    fn default() -> Self {
        Self {
            aspect: AspectRatio::PHOTO_3_2,
            orientation: Orientation::Landscape,
            divisible_by: 16,
            max_megapixels: 4.0,
        }
    }
}

impl CatalogConfig {
    /// Resolutions in this config's orientation.
    #[cfg(feature = "alloc")]
    pub fn resolutions(&self) -> alloc::vec::Vec<Resolution> {
        enumerate_oriented(
            self.aspect,
            self.divisible_by,
            self.max_megapixels,
            self.orientation,
        )
    }

    /// Orient a chosen resolution and report it with its ratio and size.
    pub fn forge(&self, resolution: Resolution) -> Selection {
        let r = select(resolution, self.orientation);
        Selection {
            width: r.width,
            height: r.height,
            ratio_w: self.aspect.width,
            ratio_h: self.aspect.height,
            orientation: self.orientation,
            megapixels: r.megapixels(),
        }
    }
}

/// A resolution picked from the catalog, oriented and annotated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub width: u32,
    pub height: u32,
    pub ratio_w: u32,
    pub ratio_h: u32,
    pub orientation: Orientation,
    /// Rounded to 4 decimal places.
    pub megapixels: f64,
}

impl Selection {
    pub const fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}
