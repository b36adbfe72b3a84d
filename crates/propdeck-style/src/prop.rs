#![forbid(unsafe_code)]

//! The generic style property enumeration.
//!
//! Every property here applies uniformly across widget types, parameterized
//! by `(Part, WidgetState)`. Each property carries a value kind that tells
//! the payload codec how to decode a string payload and the router how to
//! re-emit a stored value on a read.

use bitflags::bitflags;

use crate::color::Rgb;
use crate::font::FontId;

bitflags! {
    /// Which sides of a border are drawn. OR-able.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BorderSide: u8 {
        /// Bottom edge.
        const BOTTOM = 0x01;
        /// Top edge.
        const TOP = 0x02;
        /// Left edge.
        const LEFT = 0x04;
        /// Right edge.
        const RIGHT = 0x08;
        /// All four edges.
        const FULL = 0x0F;
        /// Only edges shared with neighbouring cells.
        const INTERNAL = 0x10;
    }
}

bitflags! {
    /// Text decoration flags. OR-able.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextDecor: u8 {
        /// Underline.
        const UNDERLINE = 0x01;
        /// Strike-through.
        const STRIKETHROUGH = 0x02;
    }
}

/// How a property's payload is decoded and its value re-emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// Plain signed integer (widths, offsets, stops, enums, blend modes).
    Int,
    /// Opacity byte, payload truncated to `u8`.
    Opacity,
    /// Boolean via the truthy-token predicate.
    Bool,
    /// Color via the color payload grammar.
    Color,
    /// Font id via the font table.
    Font,
    /// Owned free-text value.
    Text,
    /// Border side bitmask.
    BorderSide,
    /// Text decoration bitmask.
    TextDecor,
}

/// A decoded style value as stored in the toolkit's per-part style storage.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Integer-valued property.
    Int(i32),
    /// Opacity byte.
    Opacity(u8),
    /// Boolean property.
    Bool(bool),
    /// Color property.
    Color(Rgb),
    /// Font reference.
    Font(FontId),
    /// Owned text (the widget frees it when replaced or destroyed).
    Text(String),
    /// Border side mask.
    BorderSide(BorderSide),
    /// Text decoration mask.
    TextDecor(TextDecor),
}

impl StyleValue {
    /// Integer rendering used when a read is reported numerically.
    #[must_use]
    pub fn as_int(&self) -> i32 {
        match self {
            Self::Int(v) => *v,
            Self::Opacity(v) => i32::from(*v),
            Self::Bool(v) => i32::from(*v),
            Self::Color(c) => c.as_u32() as i32,
            Self::Font(f) => i32::from(f.id()),
            Self::Text(_) => 0,
            Self::BorderSide(s) => i32::from(s.bits()),
            Self::TextDecor(d) => i32::from(d.bits()),
        }
    }
}

macro_rules! style_props {
    ($( $variant:ident => $kind:ident ),+ $(,)?) => {
        /// A generic visual-style property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StyleProp {
            $( $variant, )+
        }

        impl StyleProp {
            /// The value kind this property decodes to.
            #[must_use]
            pub const fn kind(self) -> PropKind {
                match self {
                    $( Self::$variant => PropKind::$kind, )+
                }
            }
        }
    };
}

style_props! {
    // Object part
    Size => Int,
    Radius => Int,
    ClipCorner => Bool,
    OpaScale => Opacity,
    TransformWidth => Int,
    TransformHeight => Int,
    // Background
    BgOpa => Opacity,
    BgColor => Color,
    BgGradColor => Color,
    BgGradDir => Int,
    BgGradStop => Int,
    BgMainStop => Int,
    BgBlendMode => Int,
    // Padding
    PadTop => Int,
    PadBottom => Int,
    PadLeft => Int,
    PadRight => Int,
    // Text
    TextOpa => Opacity,
    TextFont => Font,
    TextColor => Color,
    TextSelColor => Color,
    TextDecor => TextDecor,
    TextLetterSpace => Int,
    TextLineSpace => Int,
    TextBlendMode => Int,
    // Border
    BorderOpa => Opacity,
    BorderSide => BorderSide,
    BorderPost => Bool,
    BorderWidth => Int,
    BorderColor => Color,
    BorderBlendMode => Int,
    // Outline
    OutlineOpa => Opacity,
    OutlinePad => Int,
    OutlineWidth => Int,
    OutlineColor => Color,
    OutlineBlendMode => Int,
    // Shadow
    ShadowOpa => Opacity,
    ShadowWidth => Int,
    ShadowOfsX => Int,
    ShadowOfsY => Int,
    ShadowSpread => Int,
    ShadowColor => Color,
    ShadowBlendMode => Int,
    // Line
    LineOpa => Opacity,
    LineWidth => Int,
    LineDashWidth => Int,
    LineDashGap => Int,
    LineRounded => Bool,
    LineColor => Color,
    LineBlendMode => Int,
    // Value text
    ValueOpa => Opacity,
    ValueStr => Text,
    ValueFont => Font,
    ValueAlign => Int,
    ValueColor => Color,
    ValueOfsX => Int,
    ValueOfsY => Int,
    ValueLineSpace => Int,
    ValueLetterSpace => Int,
    ValueBlendMode => Int,
    // Pattern
    PatternRepeat => Bool,
    PatternOpa => Opacity,
    PatternRecolor => Color,
    PatternRecolorOpa => Opacity,
    PatternBlendMode => Int,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_props_have_color_kind() {
        for prop in [
            StyleProp::BgColor,
            StyleProp::TextColor,
            StyleProp::BorderColor,
            StyleProp::ShadowColor,
            StyleProp::PatternRecolor,
        ] {
            assert_eq!(prop.kind(), PropKind::Color);
        }
    }

    #[test]
    fn opacity_props_have_opacity_kind() {
        for prop in [
            StyleProp::OpaScale,
            StyleProp::BgOpa,
            StyleProp::TextOpa,
            StyleProp::ValueOpa,
        ] {
            assert_eq!(prop.kind(), PropKind::Opacity);
        }
    }

    #[test]
    fn bitmask_kinds() {
        assert_eq!(StyleProp::BorderSide.kind(), PropKind::BorderSide);
        assert_eq!(StyleProp::TextDecor.kind(), PropKind::TextDecor);
    }

    #[test]
    fn border_side_full_is_all_edges() {
        let full = BorderSide::FULL;
        assert!(full.contains(BorderSide::TOP | BorderSide::BOTTOM));
        assert!(full.contains(BorderSide::LEFT | BorderSide::RIGHT));
        assert!(!full.contains(BorderSide::INTERNAL));
    }

    #[test]
    fn style_value_int_rendering() {
        assert_eq!(StyleValue::Int(-3).as_int(), -3);
        assert_eq!(StyleValue::Opacity(255).as_int(), 255);
        assert_eq!(StyleValue::Bool(true).as_int(), 1);
        assert_eq!(StyleValue::Font(FontId::Size22).as_int(), 22);
        assert_eq!(
            StyleValue::BorderSide(BorderSide::FULL).as_int(),
            i32::from(BorderSide::FULL.bits())
        );
    }
}
