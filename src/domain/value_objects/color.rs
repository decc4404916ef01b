//! Color rendering for map and biome colors

use std::fmt;

/// Number of indexed color variants a block exposes
pub const MAP_COLOR_VARIANTS: usize = 16;

/// A 24-bit RGB color, rendered as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    /// Bits above the low 24 (alpha or sign bits) are dropped
    pub fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub fn rgb(&self) -> u32 {
        self.0
    }
}

impl From<i32> for HexColor {
    fn from(value: i32) -> Self {
        Self::new(value as u32)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Summary of a block's indexed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSummary {
    /// Every variant carries the same color
    Uniform(HexColor),
    /// At least two variants differ
    PerIndex(Vec<HexColor>),
}

impl ColorSummary {
    /// Collapse a full set of variants, or `None` if the set is empty
    pub fn from_variants(colors: Vec<HexColor>) -> Option<Self> {
        let first = *colors.first()?;
        if colors.iter().all(|c| *c == first) {
            Some(ColorSummary::Uniform(first))
        } else {
            Some(ColorSummary::PerIndex(colors))
        }
    }
}
