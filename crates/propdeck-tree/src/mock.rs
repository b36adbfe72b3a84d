#![forbid(unsafe_code)]

//! In-memory widget for tests.
//!
//! Implements the full capability surface with plain fields so router and
//! session tests can observe every mutation without a real toolkit.

use std::collections::HashMap;

use propdeck_style::{Part, Rgb, StyleProp, StyleValue, WidgetState};

use crate::map::LabelMap;
use crate::widget::{
    ButtonState, GaugeScale, LongMode, PickerShape, WidgetNode, WidgetTypeTag,
};

/// A widget backed by in-memory storage.
#[derive(Debug, Clone)]
pub struct MockWidget {
    tag: WidgetTypeTag,
    /// Position and size.
    pub x: i32,
    /// See [`MockWidget::x`].
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
    /// User-assigned object id.
    pub user_id: u8,
    /// Hidden flag.
    pub hidden: bool,
    /// Click handling flag.
    pub click_enabled: bool,
    /// Primary text.
    pub text: String,
    /// Newline-separated options; also the source for `selected_text`.
    pub options: String,
    /// Numeric value.
    pub value: i32,
    /// Checked/on flag.
    pub checked: bool,
    /// Button state.
    pub button_state: ButtonState,
    /// Toggle mode flag.
    pub checkable: bool,
    /// Selected option index.
    pub selected: u16,
    /// Range.
    pub range: (i32, i32),
    /// Picker color.
    pub color: Rgb,
    /// Picker shape.
    pub shape: PickerShape,
    /// Row count.
    pub rows: u8,
    /// Column count.
    pub cols: u8,
    /// Image source.
    pub image_src: Option<String>,
    /// Long-text mode.
    pub long_mode: LongMode,
    /// Gauge scale.
    pub gauge_scale: GaugeScale,
    /// Gauge critical value.
    pub critical_value: i32,
    /// Installed label map.
    pub label_map: LabelMap,
    /// Set once `schedule_delete` ran.
    pub delete_scheduled: bool,
    styles: HashMap<(Part, StyleProp), (WidgetState, StyleValue)>,
}

impl MockWidget {
    /// Create a widget with the given type tag and neutral state.
    #[must_use]
    pub fn new(tag: WidgetTypeTag) -> Self {
        Self {
            tag,
            x: 0,
            y: 0,
            w: 100,
            h: 50,
            user_id: 0,
            hidden: false,
            click_enabled: true,
            text: String::new(),
            options: String::new(),
            value: 0,
            checked: false,
            button_state: ButtonState::Released,
            checkable: false,
            selected: 0,
            range: (0, 100),
            color: Rgb::BLACK,
            shape: PickerShape::Disc,
            rows: 3,
            cols: 1,
            image_src: None,
            long_mode: LongMode::Expand,
            gauge_scale: GaugeScale::default(),
            critical_value: 80,
            label_map: LabelMap::default(),
            delete_scheduled: false,
            styles: HashMap::new(),
        }
    }

    /// The full `(state, value)` entry recorded for a style write, for
    /// asserting which visual state a suffixed attribute targeted.
    #[must_use]
    pub fn style_entry(&self, part: Part, prop: StyleProp) -> Option<&(WidgetState, StyleValue)> {
        self.styles.get(&(part, prop))
    }

    /// Number of style entries written so far.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }
}

impl WidgetNode for MockWidget {
    fn type_tag(&self) -> WidgetTypeTag {
        self.tag
    }

    fn x(&self) -> i32 {
        self.x
    }
    fn set_x(&mut self, x: i32) {
        self.x = x;
    }
    fn y(&self) -> i32 {
        self.y
    }
    fn set_y(&mut self, y: i32) {
        self.y = y;
    }
    fn width(&self) -> i32 {
        self.w
    }
    fn set_width(&mut self, w: i32) {
        self.w = w;
    }
    fn height(&self) -> i32 {
        self.h
    }
    fn set_height(&mut self, h: i32) {
        self.h = h;
    }

    fn user_id(&self) -> u8 {
        self.user_id
    }
    fn set_user_id(&mut self, id: u8) {
        self.user_id = id;
    }
    fn hidden(&self) -> bool {
        self.hidden
    }
    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
    fn click_enabled(&self) -> bool {
        self.click_enabled
    }
    fn set_click_enabled(&mut self, enabled: bool) {
        self.click_enabled = enabled;
    }

    fn text(&self) -> String {
        self.text.clone()
    }
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }
    fn selected_text(&self) -> String {
        self.options
            .lines()
            .nth(usize::from(self.selected))
            .unwrap_or_default()
            .to_owned()
    }

    fn value(&self) -> i32 {
        self.value
    }
    fn set_value(&mut self, value: i32) {
        self.value = value;
    }
    fn checked(&self) -> bool {
        self.checked
    }
    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
    fn button_state(&self) -> ButtonState {
        self.button_state
    }
    fn set_button_state(&mut self, state: ButtonState) {
        self.button_state = state;
    }
    fn checkable(&self) -> bool {
        self.checkable
    }
    fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
    }

    fn selected(&self) -> u16 {
        self.selected
    }
    fn set_selected(&mut self, index: u16) {
        self.selected = index;
    }
    fn options(&self) -> String {
        self.options.clone()
    }
    fn set_options(&mut self, options: &str) {
        self.options = options.to_owned();
    }

    fn range(&self) -> (i32, i32) {
        self.range
    }
    fn set_range(&mut self, min: i32, max: i32) {
        self.range = (min, max);
    }

    fn color_value(&self) -> Rgb {
        self.color
    }
    fn set_color_value(&mut self, color: Rgb) {
        self.color = color;
    }
    fn picker_shape(&self) -> PickerShape {
        self.shape
    }
    fn set_picker_shape(&mut self, shape: PickerShape) {
        self.shape = shape;
    }

    fn rows(&self) -> u8 {
        self.rows
    }
    fn set_rows(&mut self, rows: u8) {
        self.rows = rows;
    }
    fn cols(&self) -> u8 {
        self.cols
    }
    fn set_cols(&mut self, cols: u8) {
        self.cols = cols;
    }

    fn image_src(&self) -> Option<String> {
        self.image_src.clone()
    }
    fn set_image_src(&mut self, src: &str) {
        self.image_src = Some(src.to_owned());
    }

    fn long_mode(&self) -> LongMode {
        self.long_mode
    }
    fn set_long_mode(&mut self, mode: LongMode) {
        self.long_mode = mode;
    }

    fn gauge_scale(&self) -> GaugeScale {
        self.gauge_scale
    }
    fn set_gauge_scale(&mut self, scale: GaugeScale) {
        self.gauge_scale = scale;
    }
    fn critical_value(&self) -> i32 {
        self.critical_value
    }
    fn set_critical_value(&mut self, value: i32) {
        self.critical_value = value;
    }

    fn label_map(&self) -> Option<&LabelMap> {
        Some(&self.label_map)
    }
    fn set_label_map(&mut self, map: LabelMap) {
        self.label_map = map;
    }

    fn schedule_delete(&mut self) {
        self.delete_scheduled = true;
    }

    fn style(&self, part: Part, prop: StyleProp) -> Option<StyleValue> {
        self.styles.get(&(part, prop)).map(|(_, v)| v.clone())
    }
    fn set_style(&mut self, part: Part, state: WidgetState, prop: StyleProp, value: StyleValue) {
        self.styles.insert((part, prop), (state, value));
    }
}
