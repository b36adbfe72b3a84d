#![forbid(unsafe_code)]

//! String payload decoding.
//!
//! Payloads arrive as raw text from remote actors and the decoders are
//! deliberately permissive: an integer is the leading digit run (everything
//! after it is ignored), a boolean is a small truthy-token set, and the
//! color grammar lives in [`propdeck_style::Rgb`]. Only colors and fonts can
//! actually fail; the other decoders are total.

use propdeck_style::{
    BorderSide, FontId, FontTable, PropKind, Rgb, StyleProp, StyleValue, TextDecor,
};

use crate::error::AttrError;

/// Truthy-token predicate for boolean payloads.
///
/// `1`, `true`, `on`, and `yes` (case-insensitive) are true; every other
/// payload, including the empty string, is false.
#[must_use]
pub fn is_true(payload: &str) -> bool {
    payload == "1"
        || payload.eq_ignore_ascii_case("true")
        || payload.eq_ignore_ascii_case("on")
        || payload.eq_ignore_ascii_case("yes")
}

/// Decode a signed integer from the leading digit run of the payload.
///
/// Leading ASCII whitespace is skipped, one optional sign is consumed, then
/// digits accumulate until the first non-digit. No digits means zero; there
/// is no error path. Accumulation saturates at the `i32` bounds.
#[must_use]
pub fn parse_int(payload: &str) -> i32 {
    let mut bytes = payload.bytes().skip_while(u8::is_ascii_whitespace).peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };
    let mut acc: i64 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        acc = acc * 10 + i64::from(byte - b'0');
        if acc > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    if negative {
        acc = -acc;
    }
    acc.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Decode a color payload, or the error the router turns into warn + black.
pub fn parse_color(payload: &str) -> Result<Rgb, AttrError> {
    payload.parse().map_err(|_| AttrError::InvalidColorFormat)
}

/// Decode a font payload against the session's font table.
pub fn parse_font(payload: &str, fonts: &FontTable) -> Result<FontId, AttrError> {
    let id = parse_int(payload);
    u8::try_from(id)
        .ok()
        .and_then(|id| fonts.lookup(id))
        .ok_or(AttrError::InvalidFontId)
}

/// Decode a payload according to a style property's value kind.
///
/// Total for every kind except colors and fonts. Bitmask kinds keep only
/// the defined bits of the decoded integer.
pub fn decode_style_value(
    prop: StyleProp,
    payload: &str,
    fonts: &FontTable,
) -> Result<StyleValue, AttrError> {
    let value = match prop.kind() {
        PropKind::Int => StyleValue::Int(parse_int(payload)),
        PropKind::Opacity => StyleValue::Opacity(parse_int(payload) as u8),
        PropKind::Bool => StyleValue::Bool(is_true(payload)),
        PropKind::Color => StyleValue::Color(parse_color(payload)?),
        PropKind::Font => StyleValue::Font(parse_font(payload, fonts)?),
        PropKind::Text => StyleValue::Text(payload.to_owned()),
        PropKind::BorderSide => StyleValue::BorderSide(BorderSide::from_bits_truncate(
            parse_int(payload).clamp(0, 255) as u8,
        )),
        PropKind::TextDecor => StyleValue::TextDecor(TextDecor::from_bits_truncate(
            parse_int(payload).clamp(0, 255) as u8,
        )),
    };
    Ok(value)
}
