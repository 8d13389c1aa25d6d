//! Executing a [`ResizePlan`] through external pixel collaborators.
//!
//! The crate never touches pixels. A plan lowers to at most three
//! [`Step`]s (crop, resample, pad) which [`execute`] hands, in order,
//! to caller-supplied [`Cropper`], [`Resampler`], and [`Padder`]
//! implementations.

use core::fmt;
use core::str::FromStr;

use crate::color::PadColor;
use crate::error::ParseError;
use crate::fit::{Insets, Rect, ResizePlan};

/// Resampling filter requested of the resampler. Passed through untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResampleMethod {
    NearestExact,
    Bilinear,
    Area,
    Bicubic,
    #[default]
    Lanczos,
}

impl ResampleMethod {
    pub const ALL: [Self; 5] = [
        Self::NearestExact,
        Self::Bilinear,
        Self::Area,
        Self::Bicubic,
        Self::Lanczos,
    ];

    /// Name as the resampler expects it (`nearest-exact`, `lanczos`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NearestExact => "nearest-exact",
            Self::Bilinear => "bilinear",
            Self::Area => "area",
            Self::Bicubic => "bicubic",
            Self::Lanczos => "lanczos",
        }
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownMethod)
    }
}

/// Extracts a sub-rectangle of a buffer.
pub trait Cropper<B> {
    fn crop(&mut self, buffer: B, rect: Rect) -> B;
}

/// Scales a buffer to exact dimensions.
pub trait Resampler<B> {
    fn resample(&mut self, buffer: B, width: u32, height: u32, method: ResampleMethod) -> B;
}

/// Grows a buffer by `insets`, filling new pixels per `fill`.
pub trait Padder<B> {
    fn pad(&mut self, buffer: B, insets: Insets, fill: PadColor) -> B;
}

/// One pixel operation of a lowered plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Keep only this region of the source.
    Crop(Rect),
    /// Scale to exact dimensions.
    Resample { width: u32, height: u32 },
    /// Add padding around the image.
    Pad { insets: Insets, fill: PadColor },
}

impl ResizePlan {
    /// Lower the plan to its pixel steps, skipping no-ops.
    ///
    /// Order is always crop, resample, pad.
    pub fn steps(&self) -> impl Iterator<Item = Step> {
        let crop = self.pre_crop.map(Step::Crop);
        let resample = self.needs_resample().then_some(Step::Resample {
            width: self.resample_to.width,
            height: self.resample_to.height,
        });
        let pad = self.post_pad.map(|insets| Step::Pad {
            insets,
            fill: self.pad_fill,
        });
        [crop, resample, pad].into_iter().flatten()
    }
}

/// Run `plan` on `buffer` through the given collaborators.
pub fn execute<B, O>(plan: &ResizePlan, buffer: B, method: ResampleMethod, ops: &mut O) -> B
where
    O: Cropper<B> + Resampler<B> + Padder<B>,
{
    plan.steps().fold(buffer, |buf, step| match step {
        Step::Crop(rect) => ops.crop(buf, rect),
        Step::Resample { width, height } => ops.resample(buf, width, height, method),
        Step::Pad { insets, fill } => ops.pad(buf, insets, fill),
    })
}
