//! Pad fill: constant RGB or edge replication, and the `"r, g, b"` text form.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::logging::trace;

/// How padding pixels are filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PadColor {
    /// Constant 8-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
    /// Replicate the nearest border pixel.
    Edge,
}

impl Default for PadColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PadColor {
    /// Opaque black, the fallback for unparseable colors.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse a comma-separated `"r, g, b"` triple of integers in `0..=255`.
    ///
    /// Never fails: any malformed input (non-integers, out-of-range values,
    /// wrong element count) yields [`BLACK`](Self::BLACK).
    ///
    /// ```
    /// use pixelforge::PadColor;
    ///
    /// assert_eq!(PadColor::parse("255, 128, 0"), PadColor::rgb(255, 128, 0));
    /// assert_eq!(PadColor::parse("abc"), PadColor::BLACK);
    /// ```
    pub fn parse(s: &str) -> Self {
        parse_triple(s).unwrap_or_else(|| {
            trace!(input = s, "pad color fell back to black");
            Self::BLACK
        })
    }

    /// Color channels scaled to `0.0..=1.0`. `None` for [`Edge`](Self::Edge).
    pub fn unit_rgb(&self) -> Option<[f32; 3]> {
        match *self {
            Self::Rgb { r, g, b } => Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]),
            Self::Edge => None,
        }
    }

    pub const fn is_edge(&self) -> bool {
        matches!(self, Self::Edge)
    }
}

impl FromStr for PadColor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// `"r, g, b"` for constant colors, `edge` for replication.
impl fmt::Display for PadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "{r}, {g}, {b}"),
            Self::Edge => f.write_str("edge"),
        }
    }
}

fn parse_triple(s: &str) -> Option<PadColor> {
    let mut parts = s.split(',');
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(PadColor::rgb(r, g, b))
}

fn parse_channel(s: &str) -> Option<u8> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text() {
        assert_eq!(PadColor::parse("0, 0, 0"), PadColor::BLACK);
    }

    #[test]
    fn whitespace_is_optional() {
        assert_eq!(PadColor::parse("10,20,30"), PadColor::rgb(10, 20, 30));
        assert_eq!(PadColor::parse("  10 ,\t20 , 30  "), PadColor::rgb(10, 20, 30));
    }

    #[test]
    fn garbage_is_black() {
        assert_eq!(PadColor::parse("abc"), PadColor::BLACK);
        assert_eq!(PadColor::parse(""), PadColor::BLACK);
        assert_eq!(PadColor::parse("1.5, 2, 3"), PadColor::BLACK);
    }

    #[test]
    fn wrong_count_is_black() {
        assert_eq!(PadColor::parse("10, 20"), PadColor::BLACK);
        assert_eq!(PadColor::parse("10, 20, 30, 40"), PadColor::BLACK);
        assert_eq!(PadColor::parse("10, 20, 30,"), PadColor::BLACK);
    }

    #[test]
    fn out_of_range_is_black() {
        assert_eq!(PadColor::parse("256, 0, 0"), PadColor::BLACK);
        assert_eq!(PadColor::parse("-1, 0, 0"), PadColor::BLACK);
    }

    #[test]
    fn from_str_never_fails() {
        let c: PadColor = "what".parse().unwrap();
        assert_eq!(c, PadColor::BLACK);
    }

    #[test]
    fn unit_rgb_scales_channels() {
        assert_eq!(PadColor::rgb(255, 0, 51).unit_rgb(), Some([1.0, 0.0, 0.2]));
        assert_eq!(PadColor::Edge.unit_rgb(), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn display_round_trips_through_parse() {
        let c = PadColor::rgb(12, 34, 56);
        let text = alloc::format!("{c}");
        assert_eq!(text, "12, 34, 56");
        assert_eq!(PadColor::parse(&text), c);
    }
}
