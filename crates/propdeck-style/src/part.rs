#![forbid(unsafe_code)]

//! Widget parts and visual states.
//!
//! A style property always targets one `(Part, WidgetState)` pair. Both are
//! derived per call by the attribute resolver and never stored.

/// A visually distinct sub-region of a widget's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Part {
    /// The main body / background part. This is also what a trailing `0`
    /// sub-part index selects.
    #[default]
    Main,
    /// The filled indicator of a bar-like widget.
    Indicator,
    /// The bullet marker of a checkbox-like widget.
    Bullet,
    /// The knob of a color picker.
    Knob,
}

/// An interaction/visual state of a widget part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetState {
    /// Released / default.
    #[default]
    Default,
    /// Pressed.
    Pressed,
    /// Disabled.
    Disabled,
    /// Checked and released.
    Checked,
    /// Checked and pressed.
    CheckedPressed,
    /// Checked and disabled.
    CheckedDisabled,
}
