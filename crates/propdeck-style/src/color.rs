#![forbid(unsafe_code)]

//! RGB color type and the wire payload grammar.
//!
//! A color payload is tried against a strict priority chain:
//!
//! 1. one of twelve case-insensitive named colors,
//! 2. `#RRGGBB` or `#RRGGBBAA` hexadecimal (alpha accepted and ignored),
//! 3. a bare decimal `0..=65535` interpreted as packed RGB565 and expanded
//!    to 8-bit channels by bit-replication scaling.
//!
//! A numeric-looking payload is never treated as RGB565 when an earlier rule
//! already matched. Anything else is a [`ParseColorError`]; callers decide
//! the fallback (the router logs and substitutes black).

use std::fmt;
use std::str::FromStr;

/// RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

/// Named colors accepted by the payload grammar.
const NAMED: &[(&str, Rgb)] = &[
    ("red", Rgb::new(255, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("green", Rgb::new(0, 255, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("silver", Rgb::new(192, 192, 192)),
    ("magenta", Rgb::new(255, 0, 255)),
];

impl Rgb {
    /// Black, the universal fallback color.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand a packed RGB565 value to 8-bit channels.
    ///
    /// Bit-replication scaling: `(c5 * 527 + 23) >> 6` for the 5-bit
    /// channels and `(c6 * 259 + 33) >> 6` for green.
    #[must_use]
    pub const fn from_rgb565(packed: u16) -> Self {
        let r5 = ((packed >> 11) & 0b1_1111) as u32;
        let g6 = ((packed >> 5) & 0b11_1111) as u32;
        let b5 = (packed & 0b1_1111) as u32;
        Self::new(
            ((r5 * 527 + 23) >> 6) as u8,
            ((g6 * 259 + 33) >> 6) as u8,
            ((b5 * 527 + 23) >> 6) as u8,
        )
    }

    /// Pack into a `u32` key (0xRRGGBB) for reporting and map lookups.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    fn named(payload: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(name, _)| payload.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    fn hex(payload: &str) -> Option<Self> {
        let digits = payload.strip_prefix('#')?;
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        // Trailing AA pair, if present, is ignored.
        Some(Self::new(r, g, b))
    }

    fn rgb565(payload: &str) -> Option<Self> {
        if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        payload.parse::<u16>().ok().map(Self::from_rgb565)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        Self::named(payload)
            .or_else(|| Self::hex(payload))
            .or_else(|| Self::rgb565(payload))
            .ok_or(ParseColorError)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The payload matched none of the accepted color forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("payload is not a named color, #hex, or RGB565 decimal")
    }
}

impl std::error::Error for ParseColorError {}
