#![forbid(unsafe_code)]

//! Style model for Propdeck: the color payload grammar, the font table,
//! and the generic style property enumeration shared by every widget type.

pub mod color;
pub mod font;
pub mod part;
pub mod prop;

pub use color::{ParseColorError, Rgb};
pub use font::{FontId, FontTable};
pub use part::{Part, WidgetState};
pub use prop::{BorderSide, PropKind, StyleProp, StyleValue, TextDecor};
