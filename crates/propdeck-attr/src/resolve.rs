#![forbid(unsafe_code)]

//! Part/state suffix resolution.
//!
//! An attribute name may carry a single trailing digit that addresses a
//! widget sub-part or visual state: `bg_color1` on a button targets the
//! pressed state, on a bar the indicator part. The digit is stripped from
//! the canonical name regardless of widget type; what it *means* depends on
//! the type tag, and types with no suffix semantics fall back to the main
//! part in the default state.

use propdeck_style::{Part, WidgetState};
use propdeck_tree::WidgetTypeTag;

/// Maximum attribute name length; longer names resolve to the empty name.
const MAX_NAME_LEN: usize = 32;

/// A resolved attribute address: the canonical name (suffix digit removed)
/// plus the `(part, state)` pair the digit selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The name to hash and dispatch on. Borrowed from the input.
    pub canonical: &'a str,
    /// Target sub-part.
    pub part: Part,
    /// Target visual state.
    pub state: WidgetState,
}

impl<'a> Resolved<'a> {
    const fn plain(canonical: &'a str) -> Self {
        Self {
            canonical,
            part: Part::Main,
            state: WidgetState::Default,
        }
    }
}

/// Resolve an attribute name against a widget's type tag.
///
/// A leading `.` is accepted and ignored. Empty and over-long names resolve
/// to the empty canonical name, which no dispatch table matches.
#[must_use]
pub fn resolve(tag: WidgetTypeTag, attr: &str) -> Resolved<'_> {
    let attr = attr.strip_prefix('.').unwrap_or(attr);
    if attr.is_empty() || attr.len() >= MAX_NAME_LEN {
        return Resolved::plain("");
    }

    let Some(index) = attr.as_bytes().last().map(|b| b.wrapping_sub(b'0')).filter(|d| *d <= 9)
    else {
        return Resolved::plain(attr);
    };
    let canonical = &attr[..attr.len() - 1];

    match tag {
        WidgetTypeTag::Button => {
            let state = match index {
                1 => WidgetState::Pressed,
                2 => WidgetState::Disabled,
                3 => WidgetState::Checked,
                4 => WidgetState::CheckedPressed,
                5 => WidgetState::CheckedDisabled,
                _ => WidgetState::Default,
            };
            Resolved {
                canonical,
                part: Part::Main,
                state,
            }
        }
        WidgetTypeTag::Bar => Resolved {
            canonical,
            part: if index == 1 { Part::Indicator } else { Part::Main },
            state: WidgetState::Default,
        },
        WidgetTypeTag::Checkbox => Resolved {
            canonical,
            part: if index == 1 { Part::Bullet } else { Part::Main },
            state: WidgetState::Default,
        },
        WidgetTypeTag::ColorPicker => Resolved {
            canonical,
            part: if index == 1 { Part::Knob } else { Part::Main },
            state: WidgetState::Default,
        },
        _ => Resolved::plain(canonical),
    }
}
