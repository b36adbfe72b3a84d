#![forbid(unsafe_code)]

//! Widget tree capability surface for Propdeck.
//!
//! The UI tree itself is owned by the display toolkit; this crate defines
//! the tags and traits through which the attribute engine addresses it,
//! plus the button-matrix label map payload.

pub mod map;
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
pub mod widget;

pub use map::{LabelMap, MapError};
#[cfg(any(test, feature = "test-helpers"))]
pub use mock::MockWidget;
pub use widget::{
    ButtonState, GaugeScale, LongMode, PickerShape, WidgetNode, WidgetTypeTag,
};
