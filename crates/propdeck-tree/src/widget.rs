#![forbid(unsafe_code)]

//! Widget type tags and the toolkit capability trait.

use propdeck_style::{Part, Rgb, StyleProp, StyleValue, WidgetState};

use crate::map::LabelMap;

/// Discriminates the capability set of a widget.
///
/// The tag is assigned when the widget is created and carried with the
/// handle; the attribute engine never inspects toolkit-internal metadata.
/// Discriminant values are the wire ids used by page definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WidgetTypeTag {
    /// Matrix of buttons sharing one label map.
    ButtonMatrix = 1,
    /// Table.
    Table = 2,
    /// Push button (optionally checkable).
    Button = 10,
    /// Checkbox.
    Checkbox = 11,
    /// Text label.
    Label = 12,
    /// Color picker (disc or rectangle).
    ColorPicker = 20,
    /// Busy spinner.
    Spinner = 21,
    /// Arc.
    Arc = 22,
    /// Slider.
    Slider = 30,
    /// Gauge with a needle and scale.
    Gauge = 31,
    /// Progress bar.
    Bar = 32,
    /// Line meter.
    LineMeter = 33,
    /// On/off switch.
    Switch = 40,
    /// LED indicator (value is brightness).
    Led = 41,
    /// Drop-down list.
    Dropdown = 50,
    /// Roller.
    Roller = 51,
    /// Image.
    Image = 60,
    /// Image button.
    ImageButton = 61,
    /// Canvas.
    Canvas = 62,
    /// Tile view.
    TileView = 70,
    /// Tab view.
    TabView = 71,
    /// A single tab.
    Tab = 72,
    /// Chart.
    Chart = 80,
    /// Calendar.
    Calendar = 81,
    /// Plain container.
    Container = 90,
    /// Base object.
    Object = 91,
    /// Page root.
    Page = 92,
    /// Message box.
    MessageBox = 93,
    /// Window.
    Window = 94,
}

impl WidgetTypeTag {
    /// The wire id of this tag.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Whether generic `value` means a signed number for this type.
    #[must_use]
    pub const fn has_numeric_value(self) -> bool {
        matches!(
            self,
            Self::Slider | Self::Gauge | Self::Bar | Self::Arc | Self::LineMeter | Self::Led
        )
    }

    /// Whether this type carries a `(min, max)` range.
    #[must_use]
    pub const fn has_range(self) -> bool {
        matches!(
            self,
            Self::Slider | Self::Gauge | Self::Arc | Self::Bar | Self::LineMeter | Self::Chart
        )
    }
}

/// Button interaction state, addressable through the `val` attribute of a
/// checkable button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Released, unchecked.
    #[default]
    Released,
    /// Currently pressed.
    Pressed,
    /// Disabled.
    Disabled,
    /// Checked, released.
    CheckedReleased,
    /// Checked, pressed.
    CheckedPressed,
    /// Checked, disabled.
    CheckedDisabled,
}

/// Long-text handling mode of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongMode {
    /// Grow the label to fit the text.
    #[default]
    Expand,
    /// Wrap at the label width.
    Break,
    /// Truncate with an ellipsis.
    Dots,
    /// Scroll the text back and forth.
    Scroll,
    /// Scroll the text circularly.
    Loop,
}

impl LongMode {
    /// Parse a payload token. Unknown tokens resolve to nothing and the
    /// current mode stays in place.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mode = if token.eq_ignore_ascii_case("expand") {
            Self::Expand
        } else if token.eq_ignore_ascii_case("break") {
            Self::Break
        } else if token.eq_ignore_ascii_case("dots") {
            Self::Dots
        } else if token.eq_ignore_ascii_case("scroll") {
            Self::Scroll
        } else if token.eq_ignore_ascii_case("loop") {
            Self::Loop
        } else {
            return None;
        };
        Some(mode)
    }

    /// The payload token for this mode.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::Break => "break",
            Self::Dots => "dots",
            Self::Scroll => "scroll",
            Self::Loop => "loop",
        }
    }
}

/// Rendering shape of a color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerShape {
    /// Circular disc (the widget is square).
    #[default]
    Disc,
    /// Rectangle strip.
    Rectangle,
}

/// Scale configuration of a gauge. The three fields update jointly: setting
/// any one re-applies the whole scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeScale {
    /// Sweep angle in degrees.
    pub angle: u16,
    /// Number of scale lines.
    pub line_count: u16,
    /// Number of scale labels.
    pub label_count: u8,
}

impl Default for GaugeScale {
    fn default() -> Self {
        Self {
            angle: 270,
            line_count: 31,
            label_count: 6,
        }
    }
}

/// The capability surface the attribute engine requires from the toolkit.
///
/// The engine never owns widget lifetime; it addresses a node through this
/// trait, checks the type tag before every type-conditional operation, and
/// hands ownership of installed values (label maps, value strings) to the
/// widget. Semantic accessors are only invoked for type tags they are legal
/// on, so an adapter may back them with type-specific toolkit calls.
pub trait WidgetNode {
    /// The widget's type tag, assigned at creation.
    fn type_tag(&self) -> WidgetTypeTag;

    /// Horizontal position.
    fn x(&self) -> i32;
    /// Set horizontal position.
    fn set_x(&mut self, x: i32);
    /// Vertical position.
    fn y(&self) -> i32;
    /// Set vertical position.
    fn set_y(&mut self, y: i32);
    /// Width.
    fn width(&self) -> i32;
    /// Set width.
    fn set_width(&mut self, w: i32);
    /// Height.
    fn height(&self) -> i32;
    /// Set height.
    fn set_height(&mut self, h: i32);

    /// The user-assigned object id byte.
    fn user_id(&self) -> u8;
    /// Set the user-assigned object id byte.
    fn set_user_id(&mut self, id: u8);
    /// Whether the widget is hidden.
    fn hidden(&self) -> bool;
    /// Hide or show the widget.
    fn set_hidden(&mut self, hidden: bool);
    /// Whether the widget reacts to clicks/touches.
    fn click_enabled(&self) -> bool;
    /// Enable or disable click handling.
    fn set_click_enabled(&mut self, enabled: bool);

    /// Primary text (label text; for a button, its child label's text).
    fn text(&self) -> String;
    /// Set primary text.
    fn set_text(&mut self, text: &str);
    /// The currently selected entry of a dropdown or roller.
    fn selected_text(&self) -> String {
        String::new()
    }

    /// Numeric value (slider/gauge/bar/arc/line-meter position, LED
    /// brightness).
    fn value(&self) -> i32;
    /// Set numeric value.
    fn set_value(&mut self, value: i32);
    /// Checked/on state (checkbox, switch).
    fn checked(&self) -> bool;
    /// Set checked/on state.
    fn set_checked(&mut self, checked: bool);
    /// Button interaction state.
    fn button_state(&self) -> ButtonState;
    /// Set button interaction state.
    fn set_button_state(&mut self, state: ButtonState);
    /// Whether a button is checkable (toggle mode).
    fn checkable(&self) -> bool;
    /// Set toggle mode. The adapter also rebinds the press/toggle event
    /// behavior when this changes.
    fn set_checkable(&mut self, checkable: bool);

    /// Selected index of a dropdown or roller.
    fn selected(&self) -> u16;
    /// Set selected index.
    fn set_selected(&mut self, index: u16);
    /// Newline-separated option list.
    fn options(&self) -> String;
    /// Replace the option list.
    fn set_options(&mut self, options: &str);

    /// `(min, max)` range of a ranged widget.
    fn range(&self) -> (i32, i32);
    /// Replace the range. Callers guarantee `min < max`.
    fn set_range(&mut self, min: i32, max: i32);

    /// Current color of a color picker.
    fn color_value(&self) -> Rgb;
    /// Set the color of a color picker.
    fn set_color_value(&mut self, color: Rgb);
    /// Rendering shape of a color picker.
    fn picker_shape(&self) -> PickerShape {
        PickerShape::default()
    }
    /// Set the rendering shape of a color picker.
    fn set_picker_shape(&mut self, _shape: PickerShape) {}

    /// Visible row count (roller) or row count (table).
    fn rows(&self) -> u8;
    /// Set row count.
    fn set_rows(&mut self, rows: u8);
    /// Column count (table).
    fn cols(&self) -> u8;
    /// Set column count.
    fn set_cols(&mut self, cols: u8);

    /// Image source path or symbol.
    fn image_src(&self) -> Option<String> {
        None
    }
    /// Set image source.
    fn set_image_src(&mut self, _src: &str) {}

    /// Long-text mode of a label. For a button the mode lives on its child
    /// label, and setting it also stretches the label to the button width.
    fn long_mode(&self) -> LongMode;
    /// Set long-text mode.
    fn set_long_mode(&mut self, mode: LongMode);

    /// Gauge scale configuration.
    fn gauge_scale(&self) -> GaugeScale {
        GaugeScale::default()
    }
    /// Re-apply the gauge scale.
    fn set_gauge_scale(&mut self, _scale: GaugeScale) {}
    /// Gauge critical value (start of the critical zone).
    fn critical_value(&self) -> i32 {
        0
    }
    /// Set gauge critical value.
    fn set_critical_value(&mut self, _value: i32) {}

    /// The installed button-matrix label map, if any.
    fn label_map(&self) -> Option<&LabelMap> {
        None
    }
    /// Install a new label map, fully replacing (and freeing) the previous
    /// one.
    fn set_label_map(&mut self, _map: LabelMap) {}

    /// Schedule the widget for deferred destruction. Safe to call from
    /// within dispatch; actual teardown happens on the toolkit's next tick.
    fn schedule_delete(&mut self);

    /// Read a style property from the widget's resolved per-part storage.
    fn style(&self, part: Part, prop: StyleProp) -> Option<StyleValue>;
    /// Write a style property into per-(part, state) storage.
    fn set_style(&mut self, part: Part, state: WidgetState, prop: StyleProp, value: StyleValue);
}
