//! Resize planning: fit a source raster into a requested output box.
//!
//! Computes the crop window, resample target, padding insets, and final
//! canvas size for one of five keep-proportion policies. Pure geometry, no
//! pixel operations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use pixelforge::{CropAnchor, FitRequest, Insets, KeepProportion, Size};
//!
//! let plan = FitRequest::new(KeepProportion::Pad, 512, 512)
//!     .anchor(CropAnchor::Center)
//!     .divisible_by(8)
//!     .plan(1000, 500)
//!     .unwrap();
//!
//! assert_eq!(plan.resample_to, Size::new(512, 256));
//! assert_eq!(plan.post_pad, Some(Insets::new(0, 0, 128, 128)));
//! assert_eq!(plan.final_size, Size::new(512, 512));
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::catalog::Selection;
use crate::color::PadColor;
use crate::error::{ParseError, PlanError};
use crate::logging::{debug, trace};

/// How to reconcile the source aspect ratio with the requested box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeepProportion {
    /// Scale to the exact requested box, distorting aspect ratio.
    Stretch,
    /// Scale to fit within the box, preserving aspect ratio.
    /// Output may be smaller than the box on one axis.
    #[default]
    Resize,
    /// Like [`Resize`](Self::Resize), then pad with a constant color
    /// out to the requested box.
    Pad,
    /// Like [`Pad`](Self::Pad), but the padding replicates border pixels.
    PadEdge,
    /// Crop the source to the requested aspect ratio, then scale to the
    /// exact requested box.
    Crop,
}

impl KeepProportion {
    /// Every policy, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Stretch,
        Self::Resize,
        Self::Pad,
        Self::PadEdge,
        Self::Crop,
    ];

    /// Canonical text name (`stretch`, `resize`, `pad`, `pad_edge`, `crop`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Resize => "resize",
            Self::Pad => "pad",
            Self::PadEdge => "pad_edge",
            Self::Crop => "crop",
        }
    }

    /// Whether this policy adds padding after the resample.
    pub const fn pads(self) -> bool {
        matches!(self, Self::Pad | Self::PadEdge)
    }
}

impl fmt::Display for KeepProportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeepProportion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownPolicy)
    }
}

/// Where slack goes when cropping or padding.
///
/// `Top` keeps the top edge: a crop window starts at row 0, padding goes
/// below the image. The orthogonal axis stays centered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CropAnchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl CropAnchor {
    /// Every anchor, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Canonical text name (`center`, `top`, `bottom`, `left`, `right`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Split `slack` pixels into `(leading, trailing)` along one axis.
    ///
    /// Leading is left (horizontal) or top (vertical). Centering puts
    /// `slack / 2` on the leading side and the odd pixel on the trailing side.
    pub const fn split(self, slack: u32, horizontal: bool) -> (u32, u32) {
        let leading = match (self, horizontal) {
            (Self::Left, true) | (Self::Top, false) => 0,
            (Self::Right, true) | (Self::Bottom, false) => slack,
            _ => slack / 2,
        };
        (leading, slack - leading)
    }
}

impl fmt::Display for CropAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropAnchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseError::UnknownAnchor)
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Axis-aligned rectangle in source pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Dimensions of the rect.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

/// Padding added around the resampled image, in pixels per edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets (left, right, top, bottom).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Left + right.
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Top + bottom.
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Whether no edge is padded.
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }
}

/// A resize request: target box, policy, and placement options.
///
/// A target dimension of 0 means "derive from the source aspect ratio"
/// (or "use the source dimension" for [`Stretch`](KeepProportion::Stretch)
/// and [`Crop`](KeepProportion::Crop)).
///
/// # Example
///
/// ```
/// use pixelforge::{FitRequest, KeepProportion, Size};
///
/// let plan = FitRequest::new(KeepProportion::Resize, 400, 0)
///     .plan(800, 600)
///     .unwrap();
/// assert_eq!(plan.resample_to, Size::new(400, 300));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitRequest {
    pub policy: KeepProportion,
    pub width: u32,
    pub height: u32,
    pub anchor: CropAnchor,
    /// Output dimensions are made multiples of this. 0 and 1 mean no constraint.
    pub divisible_by: u32,
    pub pad_color: PadColor,
}

impl Default for FitRequest {
    /// 512×512, `resize`, centered, divisible by 8, black padding.
    fn default() -> Self {
        Self {
            policy: KeepProportion::Resize,
            width: 512,
            height: 512,
            anchor: CropAnchor::Center,
            divisible_by: 8,
            pad_color: PadColor::BLACK,
        }
    }
}

impl FitRequest {
    /// Create a request with no divisibility constraint and black padding.
    pub fn new(policy: KeepProportion, width: u32, height: u32) -> Self {
        Self {
            policy,
            width,
            height,
            anchor: CropAnchor::Center,
            divisible_by: 0,
            pad_color: PadColor::BLACK,
        }
    }

    /// Seed the target box from a resolution picked out of the catalog.
    pub fn from_selection(policy: KeepProportion, selection: &Selection) -> Self {
        Self::new(policy, selection.width, selection.height)
    }

    /// Set the anchor for crop/pad slack.
    pub fn anchor(mut self, anchor: CropAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the divisibility modulus.
    pub fn divisible_by(mut self, divisible_by: u32) -> Self {
        self.divisible_by = divisible_by;
        self
    }

    /// Set the padding color (ignored by `pad_edge`).
    pub fn pad_color(mut self, color: PadColor) -> Self {
        self.pad_color = color;
        self
    }

    /// The requested box as a [`Size`] (zeros preserved).
    pub fn requested(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Compute the plan for a source of the given dimensions.
    pub fn plan(&self, source_w: u32, source_h: u32) -> Result<ResizePlan, PlanError> {
        if source_w == 0 || source_h == 0 {
            return Err(PlanError::InvalidSource {
                width: source_w,
                height: source_h,
            });
        }
        let source = Size::new(source_w, source_h);
        let divisor = self.divisor();
        let pad_fill = match self.policy {
            KeepProportion::PadEdge => PadColor::Edge,
            _ => self.pad_color,
        };

        use KeepProportion::*;
        let plan = match self.policy {
            Stretch => {
                let target = self.or_source(source);
                ResizePlan::unpadded(source, None, truncate_size(target, divisor), pad_fill)
            }

            Resize => {
                let fitted = fit_inside(source, self.requested());
                ResizePlan::unpadded(source, None, truncate_size(fitted, divisor), pad_fill)
            }

            Pad | PadEdge => {
                let fitted = fit_inside(source, self.requested());
                // A zero request axis saturates to zero slack: that axis is
                // derived from the source and needs no padding.
                let (left, right) = self
                    .anchor
                    .split(self.width.saturating_sub(fitted.width), true);
                let (top, bottom) = self
                    .anchor
                    .split(self.height.saturating_sub(fitted.height), false);
                let insets = reconcile_padding(
                    fitted,
                    Insets::new(left, right, top, bottom),
                    divisor,
                );
                ResizePlan::padded(source, fitted, insets, pad_fill)
            }

            Crop => {
                let target = truncate_size(self.or_source(source), divisor);
                let crop = crop_to_aspect(source, target, self.anchor);
                ResizePlan::unpadded(source, crop, target, pad_fill)
            }
        };

        debug!(
            policy = self.policy.as_str(),
            source_w,
            source_h,
            final_w = plan.final_size.width,
            final_h = plan.final_size.height,
            "planned resize"
        );
        Ok(plan)
    }

    /// Plan each source independently.
    ///
    /// One failing source yields an `Err` in its slot and leaves the
    /// others untouched.
    #[cfg(feature = "alloc")]
    pub fn plan_batch(&self, sources: &[Size]) -> alloc::vec::Vec<Result<ResizePlan, PlanError>> {
        sources
            .iter()
            .map(|s| self.plan(s.width, s.height))
            .collect()
    }

    fn divisor(&self) -> u32 {
        if self.divisible_by == 0 {
            trace!("divisible_by 0 treated as 1");
            1
        } else {
            self.divisible_by
        }
    }

    /// Requested box with zero axes replaced by the source dimension.
    fn or_source(&self, source: Size) -> Size {
        let w = if self.width == 0 { source.width } else { self.width };
        let h = if self.height == 0 { source.height } else { self.height };
        Size::new(w, h)
    }
}

/// Plan a resize, argument by argument.
///
/// Equivalent to building a [`FitRequest`] and calling
/// [`FitRequest::plan`] with `source`.
pub fn plan(
    source: Size,
    requested: Size,
    policy: KeepProportion,
    anchor: CropAnchor,
    divisible_by: u32,
    pad_color: PadColor,
) -> Result<ResizePlan, PlanError> {
    FitRequest::new(policy, requested.width, requested.height)
        .anchor(anchor)
        .divisible_by(divisible_by)
        .pad_color(pad_color)
        .plan(source.width, source.height)
}

/// Computed plan from applying a [`FitRequest`] to source dimensions.
///
/// Operations run in order: crop `pre_crop` out of the source, resample
/// to `resample_to`, then pad by `post_pad`.
/// `final_size` is always `resample_to` plus `post_pad`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizePlan {
    /// Original source dimensions.
    pub source: Size,
    /// Region of the source to keep. `None` = full source.
    pub pre_crop: Option<Rect>,
    /// Dimensions to resample the (cropped) source to.
    pub resample_to: Size,
    /// Padding around the resampled image. `None` = no padding.
    pub post_pad: Option<Insets>,
    /// How padding pixels are filled.
    pub pad_fill: PadColor,
    /// Output dimensions.
    pub final_size: Size,
}

impl ResizePlan {
    fn unpadded(source: Size, pre_crop: Option<Rect>, resample_to: Size, pad_fill: PadColor) -> Self {
        Self {
            source,
            pre_crop,
            resample_to,
            post_pad: None,
            pad_fill,
            final_size: resample_to,
        }
    }

    fn padded(source: Size, resample_to: Size, insets: Insets, pad_fill: PadColor) -> Self {
        let post_pad = (!insets.is_zero()).then_some(insets);
        Self {
            source,
            pre_crop: None,
            resample_to,
            post_pad,
            pad_fill,
            final_size: Size::new(
                resample_to.width + insets.horizontal(),
                resample_to.height + insets.vertical(),
            ),
        }
    }

    /// Whether resampling changes dimensions.
    pub fn needs_resample(&self) -> bool {
        self.resample_to != self.effective_source()
    }

    /// Whether padding is added.
    pub fn needs_padding(&self) -> bool {
        self.post_pad.is_some()
    }

    /// Whether a crop is applied.
    pub fn needs_crop(&self) -> bool {
        self.pre_crop.is_some()
    }

    /// Source dimensions after the crop.
    pub fn effective_source(&self) -> Size {
        match &self.pre_crop {
            Some(r) => r.size(),
            None => self.source,
        }
    }

    /// Top-left offset of the resampled image within the final canvas.
    pub fn placement(&self) -> (u32, u32) {
        self.post_pad.map_or((0, 0), |p| (p.left, p.top))
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Scale `source` uniformly to fit the requested box.
///
/// A zero request axis is derived from the other; both zero is a no-op.
fn fit_inside(source: Size, requested: Size) -> Size {
    let sw = source.width as f64;
    let sh = source.height as f64;
    match (requested.width, requested.height) {
        (0, 0) => source,
        (0, th) => Size::new(scale(sw, th as f64 / sh), th),
        (tw, 0) => Size::new(tw, scale(sh, tw as f64 / sw)),
        (tw, th) => {
            let ratio = (tw as f64 / sw).min(th as f64 / sh);
            Size::new(scale(sw, ratio), scale(sh, ratio))
        }
    }
}

/// Crop `source` to the aspect ratio of `target`, placing the window by anchor.
///
/// Returns `None` when the aspect ratios already match.
fn crop_to_aspect(source: Size, target: Size, anchor: CropAnchor) -> Option<Rect> {
    let (sw, sh) = (source.width, source.height);
    // Cross-multiplication avoids floating-point comparison for exact matches.
    let cross_s = sw as u64 * target.height as u64;
    let cross_t = sh as u64 * target.width as u64;
    if cross_s == cross_t {
        return None;
    }

    let target_ratio = target.width as f64 / target.height as f64;
    let rect = if cross_s > cross_t {
        // Source is wider: crop width, keep full height.
        let w = scale(sh as f64, target_ratio).min(sw);
        let (x, _) = anchor.split(sw - w, true);
        Rect::new(x, 0, w, sh)
    } else {
        // Source is taller: crop height, keep full width.
        let h = clamp_dim((sw as f64 / target_ratio).round()).min(sh);
        let (y, _) = anchor.split(sh - h, false);
        Rect::new(0, y, sw, h)
    };
    (!rect.is_full(sw, sh)).then_some(rect)
}

/// Grow the trailing insets until the padded canvas is divisible by `divisor`.
/// The resample target is never shrunk.
///
/// An axis whose next multiple would exceed `u32::MAX` keeps its insets.
fn reconcile_padding(fitted: Size, mut insets: Insets, divisor: u32) -> Insets {
    if divisor <= 1 {
        return insets;
    }
    insets.right += padding_to_multiple(fitted.width + insets.horizontal(), divisor);
    insets.bottom += padding_to_multiple(fitted.height + insets.vertical(), divisor);
    insets
}

/// Pixels to add to `total` to reach the next multiple of `divisor`.
fn padding_to_multiple(total: u32, divisor: u32) -> u32 {
    let rem = total % divisor;
    if rem == 0 {
        return 0;
    }
    let grow = divisor - rem;
    match total.checked_add(grow) {
        Some(_) => grow,
        None => {
            trace!(total, divisor, "padded total left unreconciled at u32 limit");
            0
        }
    }
}

fn truncate_size(size: Size, divisor: u32) -> Size {
    Size::new(
        truncate_to_multiple(size.width, divisor),
        truncate_to_multiple(size.height, divisor),
    )
}

/// Floor `value` to a multiple of `divisor`.
///
/// When the floor would be 0 the value is kept as-is.
fn truncate_to_multiple(value: u32, divisor: u32) -> u32 {
    if divisor <= 1 {
        return value;
    }
    let floored = value - value % divisor;
    if floored == 0 {
        trace!(value, divisor, "dimension below divisor kept untruncated");
        value
    } else {
        floored
    }
}

/// `round(dim * ratio)`, clamped to at least one pixel.
fn scale(dim: f64, ratio: f64) -> u32 {
    clamp_dim((dim * ratio).round())
}

fn clamp_dim(rounded: f64) -> u32 {
    if rounded < 1.0 {
        trace!(rounded, "dimension clamped to 1");
        1
    } else {
        // Saturating cast.
        rounded as u32
    }
}
