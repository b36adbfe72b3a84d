#![forbid(unsafe_code)]

//! Attribute dispatch.
//!
//! [`route`] is the single entry point: one `(attribute, payload)` pair in,
//! at most one outbound report back. Dispatch is two-stage. The raw name's
//! hash is first matched against the object-level table (geometry, semantic
//! value, type-conditional operations); anything that stage leaves unhandled
//! is suffix-resolved and retried against the generic style table. A name
//! neither table recognizes is logged and dropped, never an error to the
//! caller.

use propdeck_style::{FontTable, Part, Rgb, StyleProp, StyleValue, WidgetState};
use propdeck_tree::{
    ButtonState, LabelMap, LongMode, MapError, PickerShape, WidgetNode, WidgetTypeTag,
};
use tracing::{debug, warn};

use crate::codec::{decode_style_value, is_true, parse_color, parse_int};
use crate::error::AttrError;
use crate::names::{self, style_prop_for};
use crate::report::AttributeReport;
use crate::resolve::resolve;

/// Direction of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    /// Write the payload into the widget.
    Set(&'a str),
    /// Read the current value back out through the reporter.
    Get,
}

/// What the object-level stage decided.
enum Outcome {
    /// Handled (including "handled by warning"); stop here.
    Done,
    /// Not an object-level attribute; try the style table.
    Unhandled,
}

/// Dispatch one attribute against a widget.
///
/// `widget` is `None` when the address did not resolve; the call degrades
/// to a logged no-op. Reads emit through `out` under the attribute name the
/// client sent (leading `.` stripped, sub-part suffix kept).
pub fn route(
    widget: Option<&mut dyn WidgetNode>,
    attr: &str,
    access: Access<'_>,
    fonts: &FontTable,
    out: &mut dyn AttributeReport,
) {
    let Some(widget) = widget else {
        warn!(attr, error = %AttrError::UnknownWidget, "dispatch dropped");
        return;
    };

    // Object-level names never carry a sub-part suffix, so they match on the
    // raw (dot-stripped) name; only the style stage resolves part and state.
    let name = attr.strip_prefix('.').unwrap_or(attr);
    let raw_hash = crate::hash::sdbm16(name);
    debug!(attr = name, hash = raw_hash, "dispatch");

    match route_object(widget, name, raw_hash, access, out) {
        Outcome::Done => {}
        Outcome::Unhandled => {
            // Dispatch on the canonical hash, but keep reporting under the
            // name the client sent so a suffixed read answers as itself.
            let resolved = resolve(widget.type_tag(), name);
            route_style(
                widget,
                name,
                crate::hash::sdbm16(resolved.canonical),
                resolved.part,
                resolved.state,
                access,
                fonts,
                out,
            );
        }
    }
}

/// Object-level stage: geometry, semantic values, and the type-conditional
/// operations. Returns [`Outcome::Unhandled`] only for names that may still
/// be style properties.
fn route_object(
    widget: &mut dyn WidgetNode,
    attr: &str,
    hash: u16,
    access: Access<'_>,
    out: &mut dyn AttributeReport,
) -> Outcome {
    let tag = widget.type_tag();

    match hash {
        names::ATTR_X => match access {
            Access::Set(p) => widget.set_x(parse_int(p)),
            Access::Get => out.report_int(attr, widget.x()),
        },
        names::ATTR_Y => match access {
            Access::Set(p) => widget.set_y(parse_int(p)),
            Access::Get => out.report_int(attr, widget.y()),
        },
        names::ATTR_W => match access {
            Access::Set(p) => {
                widget.set_width(parse_int(p));
                sync_picker_shape(widget);
            }
            Access::Get => out.report_int(attr, widget.width()),
        },
        names::ATTR_H => match access {
            Access::Set(p) => {
                widget.set_height(parse_int(p));
                sync_picker_shape(widget);
            }
            Access::Get => out.report_int(attr, widget.height()),
        },
        names::ATTR_ID => match access {
            Access::Set(p) => widget.set_user_id(parse_int(p) as u8),
            Access::Get => out.report_int(attr, i32::from(widget.user_id())),
        },
        names::ATTR_VIS => match access {
            Access::Set(p) => widget.set_hidden(!is_true(p)),
            Access::Get => out.report_int(attr, i32::from(!widget.hidden())),
        },
        names::ATTR_HIDDEN => match access {
            Access::Set(p) => widget.set_hidden(is_true(p)),
            Access::Get => out.report_int(attr, i32::from(widget.hidden())),
        },
        names::ATTR_TXT => route_txt(widget, attr, access, out),
        names::ATTR_VAL => route_val(widget, attr, access, out),
        names::ATTR_MIN => route_range(widget, attr, access, out, RangeEnd::Min),
        names::ATTR_MAX => route_range(widget, attr, access, out, RangeEnd::Max),
        names::ATTR_ENABLED => match access {
            Access::Set(p) => widget.set_click_enabled(is_true(p)),
            Access::Get => out.report_int(attr, i32::from(widget.click_enabled())),
        },
        names::ATTR_OPACITY => match access {
            Access::Set(p) => {
                let opa = parse_int(p) as u8;
                widget.set_style(
                    Part::Main,
                    WidgetState::Default,
                    StyleProp::OpaScale,
                    StyleValue::Opacity(opa),
                );
            }
            Access::Get => {
                // Fully opaque unless the scale was explicitly lowered.
                let opa = widget
                    .style(Part::Main, StyleProp::OpaScale)
                    .map_or(255, |v| v.as_int());
                out.report_int(attr, opa);
            }
        },
        names::ATTR_DELETE => widget.schedule_delete(),
        names::ATTR_SRC => {
            if tag != WidgetTypeTag::Image && tag != WidgetTypeTag::ImageButton {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => widget.set_image_src(p),
                Access::Get => {
                    if let Some(src) = widget.image_src() {
                        out.report_str(attr, &src);
                    }
                }
            }
        }
        names::ATTR_ROWS => {
            if tag != WidgetTypeTag::Roller && tag != WidgetTypeTag::Table {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => widget.set_rows(parse_int(p) as u8),
                Access::Get => out.report_int(attr, i32::from(widget.rows())),
            }
        }
        names::ATTR_COLS => {
            if tag != WidgetTypeTag::Table {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => widget.set_cols(parse_int(p) as u8),
                Access::Get => out.report_int(attr, i32::from(widget.cols())),
            }
        }
        names::ATTR_MODE => {
            if tag != WidgetTypeTag::Button && tag != WidgetTypeTag::Label {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => match LongMode::from_token(p) {
                    Some(mode) => widget.set_long_mode(mode),
                    None => debug!(attr, payload = p, "unknown long-text mode"),
                },
                Access::Get => out.report_str(attr, widget.long_mode().token()),
            }
        }
        names::ATTR_TOGGLE => {
            if tag != WidgetTypeTag::Button {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => widget.set_checkable(is_true(p)),
                Access::Get => out.report_int(attr, i32::from(widget.checkable())),
            }
        }
        names::ATTR_OPTIONS => {
            if tag != WidgetTypeTag::Dropdown && tag != WidgetTypeTag::Roller {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => widget.set_options(p),
                Access::Get => out.report_str(attr, &widget.options()),
            }
        }
        names::ATTR_CRITICAL_VALUE
        | names::ATTR_ANGLE
        | names::ATTR_LINE_COUNT
        | names::ATTR_LABEL_COUNT
        | names::ATTR_FORMAT => {
            if tag != WidgetTypeTag::Gauge {
                return Outcome::Unhandled;
            }
            route_gauge(widget, attr, hash, access, out);
        }
        names::ATTR_MAP => {
            if tag != WidgetTypeTag::ButtonMatrix {
                return Outcome::Unhandled;
            }
            match access {
                Access::Set(p) => match LabelMap::from_json(p) {
                    Ok(map) => widget.set_label_map(map),
                    Err(MapError::Parse(detail)) => {
                        debug!(attr, error = %AttrError::MapParse(detail), "map kept unchanged");
                    }
                    Err(MapError::Alloc) => {
                        debug!(attr, error = %AttrError::Alloc, "map kept unchanged");
                    }
                },
                Access::Get => {
                    let first = widget.label_map().map_or("", LabelMap::first);
                    out.report_str(attr, first);
                }
            }
        }
        _ => return Outcome::Unhandled,
    }
    Outcome::Done
}

/// A square color picker renders as a disc, anything else as a rectangle
/// strip. Re-derived after every geometry change.
fn sync_picker_shape(widget: &mut dyn WidgetNode) {
    if widget.type_tag() == WidgetTypeTag::ColorPicker {
        let shape = if widget.width() == widget.height() {
            PickerShape::Disc
        } else {
            PickerShape::Rectangle
        };
        widget.set_picker_shape(shape);
    }
}

fn route_txt(
    widget: &mut dyn WidgetNode,
    attr: &str,
    access: Access<'_>,
    out: &mut dyn AttributeReport,
) {
    match widget.type_tag() {
        WidgetTypeTag::Button | WidgetTypeTag::Label | WidgetTypeTag::Checkbox => match access {
            Access::Set(p) => widget.set_text(p),
            Access::Get => out.report_str(attr, &widget.text()),
        },
        // The text of a selection widget is its selected entry; it is
        // read-only through this attribute in either direction.
        WidgetTypeTag::Dropdown | WidgetTypeTag::Roller => {
            out.report_str(attr, &widget.selected_text());
        }
        _ => warn!(attr, "attribute not valid for this widget type"),
    }
}

fn route_val(
    widget: &mut dyn WidgetNode,
    attr: &str,
    access: Access<'_>,
    out: &mut dyn AttributeReport,
) {
    let tag = widget.type_tag();

    if tag == WidgetTypeTag::Button && widget.checkable() {
        match access {
            Access::Set(p) => {
                let state = match parse_int(p) {
                    0 => ButtonState::Released,
                    1 => ButtonState::CheckedReleased,
                    3 => ButtonState::CheckedDisabled,
                    _ => ButtonState::Disabled,
                };
                widget.set_button_state(state);
            }
            Access::Get => {
                let value = match widget.button_state() {
                    ButtonState::Released | ButtonState::Pressed => 0,
                    ButtonState::CheckedReleased | ButtonState::CheckedPressed => 1,
                    ButtonState::Disabled => 2,
                    ButtonState::CheckedDisabled => 3,
                };
                out.report_int(attr, value);
            }
        }
        return;
    }

    match tag {
        WidgetTypeTag::Checkbox | WidgetTypeTag::Switch => match access {
            Access::Set(p) => widget.set_checked(is_true(p)),
            Access::Get => out.report_int(attr, i32::from(widget.checked())),
        },
        WidgetTypeTag::Dropdown | WidgetTypeTag::Roller => match access {
            Access::Set(p) => widget.set_selected(parse_int(p).clamp(0, i32::from(u16::MAX)) as u16),
            Access::Get => out.report_int(attr, i32::from(widget.selected())),
        },
        WidgetTypeTag::Led => match access {
            // LED brightness is a byte.
            Access::Set(p) => widget.set_value(i32::from(parse_int(p) as u8)),
            Access::Get => out.report_int(attr, widget.value()),
        },
        WidgetTypeTag::ColorPicker => match access {
            Access::Set(p) => widget.set_color_value(color_or_black(attr, p)),
            Access::Get => out.report_color(attr, widget.color_value()),
        },
        _ if tag.has_numeric_value() => match access {
            Access::Set(p) => widget.set_value(parse_int(p)),
            Access::Get => out.report_int(attr, widget.value()),
        },
        _ => warn!(attr, "attribute not valid for this widget type"),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RangeEnd {
    Min,
    Max,
}

fn route_range(
    widget: &mut dyn WidgetNode,
    attr: &str,
    access: Access<'_>,
    out: &mut dyn AttributeReport,
    end: RangeEnd,
) {
    if !widget.type_tag().has_range() {
        warn!(attr, "attribute not valid for this widget type");
        return;
    }
    let (min, max) = widget.range();
    match access {
        Access::Set(p) => {
            let value = parse_int(p);
            let (new_min, new_max) = match end {
                RangeEnd::Min => (value, max),
                RangeEnd::Max => (min, value),
            };
            if new_min >= new_max {
                debug!(attr, new_min, new_max, error = %AttrError::InvalidRangeOrdering, "range kept unchanged");
                return;
            }
            widget.set_range(new_min, new_max);
        }
        Access::Get => out.report_int(
            attr,
            match end {
                RangeEnd::Min => min,
                RangeEnd::Max => max,
            },
        ),
    }
}

/// Gauge scale attributes. The three scale fields re-apply jointly, so a
/// write to any one re-installs the whole scale with the other two current
/// values.
fn route_gauge(
    widget: &mut dyn WidgetNode,
    attr: &str,
    hash: u16,
    access: Access<'_>,
    out: &mut dyn AttributeReport,
) {
    let mut scale = widget.gauge_scale();
    match hash {
        names::ATTR_CRITICAL_VALUE => match access {
            Access::Set(p) => widget.set_critical_value(parse_int(p)),
            Access::Get => out.report_int(attr, widget.critical_value()),
        },
        names::ATTR_ANGLE => match access {
            Access::Set(p) => {
                scale.angle = parse_int(p).clamp(0, i32::from(u16::MAX)) as u16;
                widget.set_gauge_scale(scale);
            }
            Access::Get => out.report_int(attr, i32::from(scale.angle)),
        },
        names::ATTR_LINE_COUNT => match access {
            Access::Set(p) => {
                scale.line_count = parse_int(p).clamp(0, i32::from(u16::MAX)) as u16;
                widget.set_gauge_scale(scale);
            }
            Access::Get => out.report_int(attr, i32::from(scale.line_count)),
        },
        names::ATTR_LABEL_COUNT => match access {
            Access::Set(p) => {
                scale.label_count = parse_int(p).clamp(0, 255) as u8;
                widget.set_gauge_scale(scale);
            }
            Access::Get => out.report_int(attr, i32::from(scale.label_count)),
        },
        _ => warn!(attr, error = %AttrError::UnknownAttribute { hash }, "dispatch dropped"),
    }
}

fn color_or_black(attr: &str, payload: &str) -> Rgb {
    match parse_color(payload) {
        Ok(color) => color,
        Err(err) => {
            warn!(attr, payload, error = %err, "substituting black");
            Rgb::BLACK
        }
    }
}

/// Style stage: generic `(part, state)` properties.
#[allow(clippy::too_many_arguments)]
fn route_style(
    widget: &mut dyn WidgetNode,
    attr: &str,
    hash: u16,
    part: Part,
    state: WidgetState,
    access: Access<'_>,
    fonts: &FontTable,
    out: &mut dyn AttributeReport,
) {
    let Some(prop) = style_prop_for(hash) else {
        warn!(attr, error = %AttrError::UnknownAttribute { hash }, "dispatch dropped");
        return;
    };

    match access {
        Access::Set(payload) => {
            // An empty value string would free the current one; writes of
            // nothing are skipped instead.
            if prop == StyleProp::ValueStr && payload.is_empty() {
                return;
            }
            match decode_style_value(prop, payload, fonts) {
                Ok(value) => widget.set_style(part, state, prop, value),
                Err(AttrError::InvalidColorFormat) => {
                    warn!(attr, payload, error = %AttrError::InvalidColorFormat, "substituting black");
                    widget.set_style(part, state, prop, StyleValue::Color(Rgb::BLACK));
                }
                Err(err) => {
                    // Unknown font ids leave the current font in place.
                    debug!(attr, payload, error = %err, "style kept unchanged");
                }
            }
        }
        Access::Get => match widget.style(part, prop) {
            Some(StyleValue::Color(color)) => out.report_color(attr, color),
            Some(StyleValue::Text(text)) => out.report_str(attr, &text),
            Some(value) => out.report_int(attr, value.as_int()),
            None => debug!(attr, "style not set"),
        },
    }
}
