#![forbid(unsafe_code)]

//! Dispatch failure taxonomy.
//!
//! Dispatch never surfaces these to the caller as `Result`s. They exist so
//! every degradation path names what went wrong in one place, and so the
//! log lines stay uniform: the router logs the error and proceeds with the
//! documented fallback (no-op, black, skip).

use std::fmt;

/// Everything that can go wrong while dispatching one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    /// The canonical name hashed to a value no dispatch table recognizes.
    UnknownAttribute {
        /// Hash of the canonical name.
        hash: u16,
    },
    /// The address did not resolve to a live widget.
    UnknownWidget,
    /// A color payload matched none of the accepted forms.
    InvalidColorFormat,
    /// A font payload named an id with no registered or built-in font.
    InvalidFontId,
    /// A range update would leave `min >= max`.
    InvalidRangeOrdering,
    /// A label-map payload failed to parse as a JSON string array.
    MapParse(String),
    /// A label-map buffer reservation failed.
    Alloc,
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute { hash } => {
                write!(f, "unknown attribute (hash {hash})")
            }
            Self::UnknownWidget => f.write_str("address does not resolve to a widget"),
            Self::InvalidColorFormat => {
                f.write_str("payload is not a named color, #hex, or RGB565 decimal")
            }
            Self::InvalidFontId => f.write_str("payload is not a registered font id"),
            Self::InvalidRangeOrdering => f.write_str("range update requires min < max"),
            Self::MapParse(detail) => write!(f, "map payload is not a JSON string array: {detail}"),
            Self::Alloc => f.write_str("map buffer allocation failed"),
        }
    }
}

impl std::error::Error for AttrError {}
