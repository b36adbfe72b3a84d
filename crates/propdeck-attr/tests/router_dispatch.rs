//! End-to-end dispatch against the in-memory widget.

use propdeck_attr::{Access, RecordingReport, ReportEvent, route};
use propdeck_style::{FontTable, Part, Rgb, StyleProp, StyleValue, WidgetState};
use propdeck_tree::{ButtonState, MockWidget, PickerShape, WidgetNode, WidgetTypeTag};

fn set(widget: &mut MockWidget, attr: &str, payload: &str) {
    let fonts = FontTable::new();
    let mut out = RecordingReport::new();
    route(Some(widget), attr, Access::Set(payload), &fonts, &mut out);
    assert!(out.events.is_empty(), "a write must not report: {:?}", out.events);
}

fn get(widget: &mut MockWidget, attr: &str) -> Vec<ReportEvent> {
    let fonts = FontTable::new();
    let mut out = RecordingReport::new();
    route(Some(widget), attr, Access::Get, &fonts, &mut out);
    out.events
}

fn get_one(widget: &mut MockWidget, attr: &str) -> ReportEvent {
    let mut events = get(widget, attr);
    assert_eq!(events.len(), 1, "expected one report: {events:?}");
    events.pop().unwrap()
}

#[test]
fn position_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "x", "25");
    set(&mut w, "y", "-8");
    assert_eq!((w.x, w.y), (25, -8));
    assert_eq!(get_one(&mut w, "x"), ReportEvent::Int("x".into(), 25));
    assert_eq!(get_one(&mut w, "y"), ReportEvent::Int("y".into(), -8));
}

#[test]
fn leading_dot_addresses_the_same_attribute() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, ".x", "40");
    assert_eq!(get_one(&mut w, "x"), ReportEvent::Int("x".into(), 40));
}

#[test]
fn unknown_attribute_is_a_silent_no_op() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    let before = w.clone();
    set(&mut w, "frobnicate", "1");
    assert!(get(&mut w, "frobnicate").is_empty());
    assert_eq!(w.x, before.x);
    assert_eq!(w.style_count(), 0);
}

#[test]
fn missing_widget_does_not_panic() {
    let fonts = FontTable::new();
    let mut out = RecordingReport::new();
    route(None, "x", Access::Set("10"), &fonts, &mut out);
    route(None, "x", Access::Get, &fonts, &mut out);
    assert!(out.events.is_empty());
}

#[test]
fn picker_resize_recouples_shape() {
    let mut w = MockWidget::new(WidgetTypeTag::ColorPicker);
    // Default 100x50 widget becomes square, then non-square again.
    set(&mut w, "w", "50");
    assert_eq!(w.shape, PickerShape::Disc);
    set(&mut w, "h", "120");
    assert_eq!(w.shape, PickerShape::Rectangle);
    set(&mut w, "w", "120");
    assert_eq!(w.shape, PickerShape::Disc);
}

#[test]
fn resize_leaves_other_shapes_alone() {
    let mut w = MockWidget::new(WidgetTypeTag::Slider);
    set(&mut w, "w", "50");
    assert_eq!(w.shape, PickerShape::Disc);
    assert_eq!(w.w, 50);
}

#[test]
fn vis_is_the_inverse_of_hidden() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "vis", "0");
    assert!(w.hidden);
    assert_eq!(get_one(&mut w, "vis"), ReportEvent::Int("vis".into(), 0));
    assert_eq!(get_one(&mut w, "hidden"), ReportEvent::Int("hidden".into(), 1));
    set(&mut w, "hidden", "false");
    assert!(!w.hidden);
    assert_eq!(get_one(&mut w, "vis"), ReportEvent::Int("vis".into(), 1));
}

#[test]
fn user_id_truncates_to_a_byte() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "id", "300");
    assert_eq!(w.user_id, 44);
}

#[test]
fn label_text_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "txt", "Hello");
    assert_eq!(get_one(&mut w, "txt"), ReportEvent::Str("txt".into(), "Hello".into()));
}

#[test]
fn dropdown_txt_reads_the_selected_entry() {
    let mut w = MockWidget::new(WidgetTypeTag::Dropdown);
    set(&mut w, "options", "red\ngreen\nblue");
    set(&mut w, "val", "2");
    assert_eq!(w.selected, 2);
    assert_eq!(get_one(&mut w, "txt"), ReportEvent::Str("txt".into(), "blue".into()));
    assert_eq!(get_one(&mut w, "val"), ReportEvent::Int("val".into(), 2));
    assert_eq!(
        get_one(&mut w, "options"),
        ReportEvent::Str("options".into(), "red\ngreen\nblue".into())
    );
}

#[test]
fn txt_on_a_slider_is_rejected() {
    let mut w = MockWidget::new(WidgetTypeTag::Slider);
    set(&mut w, "txt", "nope");
    assert_eq!(w.text, "");
    assert!(get(&mut w, "txt").is_empty());
}

#[test]
fn slider_value_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Slider);
    set(&mut w, "val", "42");
    assert_eq!(w.value, 42);
    assert_eq!(get_one(&mut w, "val"), ReportEvent::Int("val".into(), 42));
}

#[test]
fn range_rejects_inverted_bounds() {
    let mut w = MockWidget::new(WidgetTypeTag::Slider);
    // min >= current max is refused, the old range stays.
    set(&mut w, "min", "200");
    assert_eq!(w.range, (0, 100));
    set(&mut w, "max", "500");
    assert_eq!(w.range, (0, 500));
    set(&mut w, "min", "200");
    assert_eq!(w.range, (200, 500));
    set(&mut w, "max", "200");
    assert_eq!(w.range, (200, 500));
    assert_eq!(get_one(&mut w, "min"), ReportEvent::Int("min".into(), 200));
    assert_eq!(get_one(&mut w, "max"), ReportEvent::Int("max".into(), 500));
}

#[test]
fn range_on_a_label_is_rejected() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "min", "10");
    assert_eq!(w.range, (0, 100));
    assert!(get(&mut w, "max").is_empty());
}

#[test]
fn checkbox_and_switch_truthy_values() {
    for tag in [WidgetTypeTag::Checkbox, WidgetTypeTag::Switch] {
        let mut w = MockWidget::new(tag);
        set(&mut w, "val", "on");
        assert!(w.checked);
        assert_eq!(get_one(&mut w, "val"), ReportEvent::Int("val".into(), 1));
        set(&mut w, "val", "garbage");
        assert!(!w.checked);
    }
}

#[test]
fn checkable_button_value_maps_to_states() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    w.checkable = true;
    let cases = [
        ("0", ButtonState::Released, 0),
        ("1", ButtonState::CheckedReleased, 1),
        ("2", ButtonState::Disabled, 2),
        ("3", ButtonState::CheckedDisabled, 3),
        ("9", ButtonState::Disabled, 2),
    ];
    for (payload, state, reported) in cases {
        set(&mut w, "val", payload);
        assert_eq!(w.button_state, state, "payload {payload}");
        assert_eq!(
            get_one(&mut w, "val"),
            ReportEvent::Int("val".into(), reported),
            "payload {payload}"
        );
    }
}

#[test]
fn plain_button_has_no_value() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "val", "1");
    assert_eq!(w.button_state, ButtonState::Released);
    assert!(get(&mut w, "val").is_empty());
}

#[test]
fn led_brightness_is_a_byte() {
    let mut w = MockWidget::new(WidgetTypeTag::Led);
    set(&mut w, "val", "300");
    assert_eq!(w.value, 44);
    set(&mut w, "val", "255");
    assert_eq!(w.value, 255);
}

#[test]
fn picker_value_is_a_color() {
    let mut w = MockWidget::new(WidgetTypeTag::ColorPicker);
    set(&mut w, "val", "silver");
    assert_eq!(w.color, Rgb::new(192, 192, 192));
    assert_eq!(
        get_one(&mut w, "val"),
        ReportEvent::Color("val".into(), Rgb::new(192, 192, 192))
    );
    // Unparseable payloads degrade to black.
    set(&mut w, "val", "chartreuse");
    assert_eq!(w.color, Rgb::BLACK);
}

#[test]
fn toggle_controls_checkable() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "toggle", "true");
    assert!(w.checkable);
    assert_eq!(get_one(&mut w, "toggle"), ReportEvent::Int("toggle".into(), 1));
    set(&mut w, "toggle", "0");
    assert!(!w.checkable);
}

#[test]
fn long_mode_tokens_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "mode", "dots");
    assert_eq!(get_one(&mut w, "mode"), ReportEvent::Str("mode".into(), "dots".into()));
    // Unknown tokens keep the current mode.
    set(&mut w, "mode", "marquee");
    assert_eq!(get_one(&mut w, "mode"), ReportEvent::Str("mode".into(), "dots".into()));
}

#[test]
fn enabled_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "enabled", "0");
    assert!(!w.click_enabled);
    assert_eq!(get_one(&mut w, "enabled"), ReportEvent::Int("enabled".into(), 0));
}

#[test]
fn opacity_reports_fully_opaque_until_set() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    assert_eq!(get_one(&mut w, "opacity"), ReportEvent::Int("opacity".into(), 255));
    set(&mut w, "opacity", "128");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::OpaScale),
        Some(&(WidgetState::Default, StyleValue::Opacity(128)))
    );
    assert_eq!(get_one(&mut w, "opacity"), ReportEvent::Int("opacity".into(), 128));
}

#[test]
fn opacity_takes_the_low_byte() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "opacity", "300");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::OpaScale),
        Some(&(WidgetState::Default, StyleValue::Opacity(44)))
    );
    assert_eq!(get_one(&mut w, "opacity"), ReportEvent::Int("opacity".into(), 44));
}

#[test]
fn rows_and_cols_are_type_conditional() {
    let mut roller = MockWidget::new(WidgetTypeTag::Roller);
    set(&mut roller, "rows", "5");
    assert_eq!(roller.rows, 5);
    assert_eq!(get_one(&mut roller, "rows"), ReportEvent::Int("rows".into(), 5));

    let mut table = MockWidget::new(WidgetTypeTag::Table);
    set(&mut table, "rows", "4");
    set(&mut table, "cols", "2");
    assert_eq!((table.rows, table.cols), (4, 2));

    // cols on a roller is not an object attribute and not a style either.
    set(&mut roller, "cols", "9");
    assert_eq!(roller.cols, 1);
}

#[test]
fn image_src_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Image);
    assert!(get(&mut w, "src").is_empty());
    set(&mut w, "src", "L:/logo.png");
    assert_eq!(w.image_src.as_deref(), Some("L:/logo.png"));
    assert_eq!(
        get_one(&mut w, "src"),
        ReportEvent::Str("src".into(), "L:/logo.png".into())
    );
}

#[test]
fn gauge_scale_fields_update_jointly() {
    let mut w = MockWidget::new(WidgetTypeTag::Gauge);
    set(&mut w, "angle", "180");
    assert_eq!(w.gauge_scale.angle, 180);
    assert_eq!(w.gauge_scale.line_count, 31);
    set(&mut w, "line_count", "21");
    set(&mut w, "label_count", "4");
    assert_eq!((w.gauge_scale.angle, w.gauge_scale.line_count, w.gauge_scale.label_count), (180, 21, 4));
    assert_eq!(get_one(&mut w, "angle"), ReportEvent::Int("angle".into(), 180));
    assert_eq!(get_one(&mut w, "line_count"), ReportEvent::Int("line_count".into(), 21));
    assert_eq!(get_one(&mut w, "label_count"), ReportEvent::Int("label_count".into(), 4));
}

#[test]
fn gauge_critical_value_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Gauge);
    set(&mut w, "critical_value", "90");
    assert_eq!(w.critical_value, 90);
    assert_eq!(
        get_one(&mut w, "critical_value"),
        ReportEvent::Int("critical_value".into(), 90)
    );
}

#[test]
fn gauge_attributes_do_nothing_elsewhere() {
    let mut w = MockWidget::new(WidgetTypeTag::Slider);
    let before = w.gauge_scale;
    set(&mut w, "angle", "180");
    assert_eq!(w.gauge_scale, before);
    assert!(!w.delete_scheduled);
    assert_eq!(w.style_count(), 0);
}

#[test]
fn delete_schedules_deferred_destroy() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "delete", "");
    assert!(w.delete_scheduled);
}

#[test]
fn button_map_install_and_read_back() {
    let mut w = MockWidget::new(WidgetTypeTag::ButtonMatrix);
    set(&mut w, "map", r#"["on","off","\n","auto"]"#);
    assert_eq!(w.label_map.len(), 4);
    assert_eq!(w.label_map.get(3), Some("auto"));
    assert_eq!(get_one(&mut w, "map"), ReportEvent::Str("map".into(), "on".into()));

    // A bad payload keeps the installed map.
    set(&mut w, "map", "not json");
    assert_eq!(w.label_map.len(), 4);
}

#[test]
fn style_color_round_trip() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "bg_color", "#FF8800");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::BgColor),
        Some(&(WidgetState::Default, StyleValue::Color(Rgb::new(255, 136, 0))))
    );
    assert_eq!(
        get_one(&mut w, "bg_color"),
        ReportEvent::Color("bg_color".into(), Rgb::new(255, 136, 0))
    );
}

#[test]
fn bad_style_color_substitutes_black() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "bg_color", "nonsense");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::BgColor),
        Some(&(WidgetState::Default, StyleValue::Color(Rgb::BLACK)))
    );
}

#[test]
fn suffixed_style_targets_button_state() {
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "bg_color1", "red");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::BgColor),
        Some(&(WidgetState::Pressed, StyleValue::Color(Rgb::new(255, 0, 0))))
    );
}

#[test]
fn suffixed_style_reads_answer_under_the_sent_name() {
    // The subscriber must be able to tell which state/part was read, so the
    // report carries the suffixed name, not the canonical one.
    let mut w = MockWidget::new(WidgetTypeTag::Button);
    set(&mut w, "bg_color1", "red");
    assert_eq!(
        get_one(&mut w, "bg_color1"),
        ReportEvent::Color("bg_color1".into(), Rgb::new(255, 0, 0))
    );
    assert_eq!(
        get_one(&mut w, ".bg_color1"),
        ReportEvent::Color("bg_color1".into(), Rgb::new(255, 0, 0))
    );
}

#[test]
fn suffixed_style_targets_bar_indicator() {
    let mut w = MockWidget::new(WidgetTypeTag::Bar);
    set(&mut w, "bg_color1", "green");
    assert_eq!(
        w.style_entry(Part::Indicator, StyleProp::BgColor),
        Some(&(WidgetState::Default, StyleValue::Color(Rgb::new(0, 255, 0))))
    );
    assert!(w.style_entry(Part::Main, StyleProp::BgColor).is_none());
}

#[test]
fn unknown_font_id_keeps_the_current_font() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    set(&mut w, "text_font", "9");
    assert!(w.style_entry(Part::Main, StyleProp::TextFont).is_none());
    set(&mut w, "text_font", "22");
    assert!(w.style_entry(Part::Main, StyleProp::TextFont).is_some());
}

#[test]
fn value_str_skips_empty_writes() {
    let mut w = MockWidget::new(WidgetTypeTag::Object);
    set(&mut w, "value_str", "72°F");
    assert_eq!(
        get_one(&mut w, "value_str"),
        ReportEvent::Str("value_str".into(), "72°F".into())
    );
    set(&mut w, "value_str", "");
    assert_eq!(
        get_one(&mut w, "value_str"),
        ReportEvent::Str("value_str".into(), "72°F".into())
    );
}

#[test]
fn unset_style_reads_report_nothing() {
    let mut w = MockWidget::new(WidgetTypeTag::Label);
    assert!(get(&mut w, "border_width").is_empty());
}

#[test]
fn pad_props_store_integers() {
    let mut w = MockWidget::new(WidgetTypeTag::Object);
    set(&mut w, "pad_top", "12px");
    assert_eq!(
        w.style_entry(Part::Main, StyleProp::PadTop),
        Some(&(WidgetState::Default, StyleValue::Int(12)))
    );
    assert_eq!(
        get_one(&mut w, "pad_top"),
        ReportEvent::Int("pad_top".into(), 12)
    );
}
