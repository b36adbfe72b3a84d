#![forbid(unsafe_code)]

//! Propdeck public facade crate.
//!
//! Re-exports the attribute engine surface from the internal crates and
//! offers a small prelude for hosts embedding the engine.

// --- Style re-exports ------------------------------------------------------

pub use propdeck_style::{
    BorderSide, FontId, FontTable, ParseColorError, Part, PropKind, Rgb, StyleProp, StyleValue,
    TextDecor, WidgetState,
};

// --- Tree re-exports -------------------------------------------------------

pub use propdeck_tree::{
    ButtonState, GaugeScale, LabelMap, LongMode, MapError, PickerShape, WidgetNode, WidgetTypeTag,
};
#[cfg(feature = "test-helpers")]
pub use propdeck_tree::MockWidget;

// --- Attribute engine re-exports -------------------------------------------

pub use propdeck_attr::{Access, AttrError, AttributeReport, Resolved, resolve, route, sdbm16};
#[cfg(feature = "test-helpers")]
pub use propdeck_attr::{RecordingReport, ReportEvent};

// --- Runtime re-exports ----------------------------------------------------

pub use propdeck_runtime::{
    DisplaySession, PAGE_COUNT, PAGE_SYS, PAGE_TOP, SleepState, SleepStateMachine,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Access, AttributeReport, DisplaySession, FontTable, Part, Rgb, SleepState, StyleProp,
        StyleValue, WidgetNode, WidgetState, WidgetTypeTag, route,
    };

    pub use crate::{attr, runtime, style, tree};
}

pub use propdeck_attr as attr;
pub use propdeck_runtime as runtime;
pub use propdeck_style as style;
pub use propdeck_tree as tree;
