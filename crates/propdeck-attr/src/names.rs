#![forbid(unsafe_code)]

//! The recognized attribute key table.
//!
//! Hash values are part of the wire protocol: they are the exact numbers
//! the dispatch tables have always keyed on, so they are fixed constants
//! rather than runtime computations. The tests prove each constant equals
//! `sdbm16(name)` and that the whole set is collision-free; a collision is
//! a build-time defect surfaced here, never a runtime condition.

use propdeck_style::StyleProp;

// Object-level attributes.
pub const ATTR_X: u16 = 120;
pub const ATTR_Y: u16 = 121;
pub const ATTR_W: u16 = 119;
pub const ATTR_H: u16 = 104;
pub const ATTR_ID: u16 = 6715;
pub const ATTR_VIS: u16 = 16320;
pub const ATTR_TXT: u16 = 9328;
pub const ATTR_VAL: u16 = 15809;
pub const ATTR_MIN: u16 = 46130;
pub const ATTR_MAX: u16 = 45636;
pub const ATTR_HIDDEN: u16 = 11082;
pub const ATTR_SRC: u16 = 4964;
pub const ATTR_ROWS: u16 = 52153;
pub const ATTR_COLS: u16 = 36307;
pub const ATTR_MODE: u16 = 45891;
pub const ATTR_TOGGLE: u16 = 38580;
pub const ATTR_OPACITY: u16 = 10155;
pub const ATTR_ENABLED: u16 = 28193;
pub const ATTR_OPTIONS: u16 = 29886;
pub const ATTR_DELETE: u16 = 50027;
pub const ATTR_MAP: u16 = 45628;
pub const ATTR_CRITICAL_VALUE: u16 = 39281;
pub const ATTR_ANGLE: u16 = 2387;
pub const ATTR_LABEL_COUNT: u16 = 20356;
pub const ATTR_LINE_COUNT: u16 = 57860;
pub const ATTR_FORMAT: u16 = 38871;

// Generic style attributes (canonical, suffix-stripped names).
pub const ATTR_SIZE: u16 = 16417;
pub const ATTR_RADIUS: u16 = 20786;
pub const ATTR_CLIP_CORNER: u16 = 9188;
pub const ATTR_OPA_SCALE: u16 = 64875;
pub const ATTR_TRANSFORM_WIDTH: u16 = 48627;
pub const ATTR_TRANSFORM_HEIGHT: u16 = 55994;
pub const ATTR_BG_OPA: u16 = 48966;
pub const ATTR_BG_COLOR: u16 = 64969;
pub const ATTR_BG_GRAD_COLOR: u16 = 44140;
pub const ATTR_BG_GRAD_DIR: u16 = 41782;
pub const ATTR_BG_GRAD_STOP: u16 = 4025;
pub const ATTR_BG_MAIN_STOP: u16 = 63118;
pub const ATTR_BG_BLEND_MODE: u16 = 31147;
pub const ATTR_PAD_TOP: u16 = 59081;
pub const ATTR_PAD_BOTTOM: u16 = 3767;
pub const ATTR_PAD_LEFT: u16 = 43123;
pub const ATTR_PAD_RIGHT: u16 = 65104;
pub const ATTR_TEXT_OPA: u16 = 37166;
pub const ATTR_TEXT_FONT: u16 = 22465;
pub const ATTR_TEXT_COLOR: u16 = 23473;
pub const ATTR_TEXT_SEL_COLOR: u16 = 32076;
pub const ATTR_TEXT_DECOR: u16 = 1971;
pub const ATTR_TEXT_LETTER_SPACE: u16 = 62079;
pub const ATTR_TEXT_LINE_SPACE: u16 = 54829;
pub const ATTR_TEXT_BLEND_MODE: u16 = 32195;
pub const ATTR_BORDER_OPA: u16 = 2061;
pub const ATTR_BORDER_SIDE: u16 = 53962;
pub const ATTR_BORDER_POST: u16 = 49491;
pub const ATTR_BORDER_WIDTH: u16 = 24531;
pub const ATTR_BORDER_COLOR: u16 = 21264;
pub const ATTR_BORDER_BLEND_MODE: u16 = 23844;
pub const ATTR_OUTLINE_OPA: u16 = 23011;
pub const ATTR_OUTLINE_PAD: u16 = 26038;
pub const ATTR_OUTLINE_WIDTH: u16 = 9897;
pub const ATTR_OUTLINE_COLOR: u16 = 6630;
pub const ATTR_OUTLINE_BLEND_MODE: u16 = 25038;
pub const ATTR_SHADOW_OPA: u16 = 38401;
pub const ATTR_SHADOW_WIDTH: u16 = 13255;
pub const ATTR_SHADOW_OFS_X: u16 = 44278;
pub const ATTR_SHADOW_OFS_Y: u16 = 44279;
pub const ATTR_SHADOW_SPREAD: u16 = 21138;
pub const ATTR_SHADOW_COLOR: u16 = 9988;
pub const ATTR_SHADOW_BLEND_MODE: u16 = 64048;
pub const ATTR_LINE_OPA: u16 = 24501;
pub const ATTR_LINE_WIDTH: u16 = 25467;
pub const ATTR_LINE_DASH_WIDTH: u16 = 32676;
pub const ATTR_LINE_DASH_GAP: u16 = 49332;
pub const ATTR_LINE_ROUNDED: u16 = 15042;
pub const ATTR_LINE_COLOR: u16 = 22200;
pub const ATTR_LINE_BLEND_MODE: u16 = 60284;
pub const ATTR_VALUE_OPA: u16 = 50482;
pub const ATTR_VALUE_STR: u16 = 1091;
pub const ATTR_VALUE_FONT: u16 = 9405;
pub const ATTR_VALUE_ALIGN: u16 = 27895;
pub const ATTR_VALUE_COLOR: u16 = 52661;
pub const ATTR_VALUE_OFS_X: u16 = 21415;
pub const ATTR_VALUE_OFS_Y: u16 = 21416;
pub const ATTR_VALUE_LINE_SPACE: u16 = 26921;
pub const ATTR_VALUE_LETTER_SPACE: u16 = 51067;
pub const ATTR_VALUE_BLEND_MODE: u16 = 4287;
pub const ATTR_PATTERN_REPEAT: u16 = 31338;
pub const ATTR_PATTERN_OPA: u16 = 43633;
pub const ATTR_PATTERN_RECOLOR: u16 = 7745;
pub const ATTR_PATTERN_RECOLOR_OPA: u16 = 35074;
pub const ATTR_PATTERN_BLEND_MODE: u16 = 43456;

/// Every recognized attribute name with its hash. Backs the collision and
/// consistency checks and diagnostic tooling.
pub const KEYS: &[(&str, u16)] = &[
    ("x", ATTR_X),
    ("y", ATTR_Y),
    ("w", ATTR_W),
    ("h", ATTR_H),
    ("id", ATTR_ID),
    ("vis", ATTR_VIS),
    ("txt", ATTR_TXT),
    ("val", ATTR_VAL),
    ("min", ATTR_MIN),
    ("max", ATTR_MAX),
    ("hidden", ATTR_HIDDEN),
    ("src", ATTR_SRC),
    ("rows", ATTR_ROWS),
    ("cols", ATTR_COLS),
    ("mode", ATTR_MODE),
    ("toggle", ATTR_TOGGLE),
    ("opacity", ATTR_OPACITY),
    ("enabled", ATTR_ENABLED),
    ("options", ATTR_OPTIONS),
    ("delete", ATTR_DELETE),
    ("map", ATTR_MAP),
    ("critical_value", ATTR_CRITICAL_VALUE),
    ("angle", ATTR_ANGLE),
    ("label_count", ATTR_LABEL_COUNT),
    ("line_count", ATTR_LINE_COUNT),
    ("format", ATTR_FORMAT),
    ("size", ATTR_SIZE),
    ("radius", ATTR_RADIUS),
    ("clip_corner", ATTR_CLIP_CORNER),
    ("opa_scale", ATTR_OPA_SCALE),
    ("transform_width", ATTR_TRANSFORM_WIDTH),
    ("transform_height", ATTR_TRANSFORM_HEIGHT),
    ("bg_opa", ATTR_BG_OPA),
    ("bg_color", ATTR_BG_COLOR),
    ("bg_grad_color", ATTR_BG_GRAD_COLOR),
    ("bg_grad_dir", ATTR_BG_GRAD_DIR),
    ("bg_grad_stop", ATTR_BG_GRAD_STOP),
    ("bg_main_stop", ATTR_BG_MAIN_STOP),
    ("bg_blend_mode", ATTR_BG_BLEND_MODE),
    ("pad_top", ATTR_PAD_TOP),
    ("pad_bottom", ATTR_PAD_BOTTOM),
    ("pad_left", ATTR_PAD_LEFT),
    ("pad_right", ATTR_PAD_RIGHT),
    ("text_opa", ATTR_TEXT_OPA),
    ("text_font", ATTR_TEXT_FONT),
    ("text_color", ATTR_TEXT_COLOR),
    ("text_sel_color", ATTR_TEXT_SEL_COLOR),
    ("text_decor", ATTR_TEXT_DECOR),
    ("text_letter_space", ATTR_TEXT_LETTER_SPACE),
    ("text_line_space", ATTR_TEXT_LINE_SPACE),
    ("text_blend_mode", ATTR_TEXT_BLEND_MODE),
    ("border_opa", ATTR_BORDER_OPA),
    ("border_side", ATTR_BORDER_SIDE),
    ("border_post", ATTR_BORDER_POST),
    ("border_width", ATTR_BORDER_WIDTH),
    ("border_color", ATTR_BORDER_COLOR),
    ("border_blend_mode", ATTR_BORDER_BLEND_MODE),
    ("outline_opa", ATTR_OUTLINE_OPA),
    ("outline_pad", ATTR_OUTLINE_PAD),
    ("outline_width", ATTR_OUTLINE_WIDTH),
    ("outline_color", ATTR_OUTLINE_COLOR),
    ("outline_blend_mode", ATTR_OUTLINE_BLEND_MODE),
    ("shadow_opa", ATTR_SHADOW_OPA),
    ("shadow_width", ATTR_SHADOW_WIDTH),
    ("shadow_ofs_x", ATTR_SHADOW_OFS_X),
    ("shadow_ofs_y", ATTR_SHADOW_OFS_Y),
    ("shadow_spread", ATTR_SHADOW_SPREAD),
    ("shadow_color", ATTR_SHADOW_COLOR),
    ("shadow_blend_mode", ATTR_SHADOW_BLEND_MODE),
    ("line_opa", ATTR_LINE_OPA),
    ("line_width", ATTR_LINE_WIDTH),
    ("line_dash_width", ATTR_LINE_DASH_WIDTH),
    ("line_dash_gap", ATTR_LINE_DASH_GAP),
    ("line_rounded", ATTR_LINE_ROUNDED),
    ("line_color", ATTR_LINE_COLOR),
    ("line_blend_mode", ATTR_LINE_BLEND_MODE),
    ("value_opa", ATTR_VALUE_OPA),
    ("value_str", ATTR_VALUE_STR),
    ("value_font", ATTR_VALUE_FONT),
    ("value_align", ATTR_VALUE_ALIGN),
    ("value_color", ATTR_VALUE_COLOR),
    ("value_ofs_x", ATTR_VALUE_OFS_X),
    ("value_ofs_y", ATTR_VALUE_OFS_Y),
    ("value_line_space", ATTR_VALUE_LINE_SPACE),
    ("value_letter_space", ATTR_VALUE_LETTER_SPACE),
    ("value_blend_mode", ATTR_VALUE_BLEND_MODE),
    ("pattern_repeat", ATTR_PATTERN_REPEAT),
    ("pattern_opa", ATTR_PATTERN_OPA),
    ("pattern_recolor", ATTR_PATTERN_RECOLOR),
    ("pattern_recolor_opa", ATTR_PATTERN_RECOLOR_OPA),
    ("pattern_blend_mode", ATTR_PATTERN_BLEND_MODE),
];

/// Map a canonical-name hash to its generic style property, if any.
#[must_use]
pub const fn style_prop_for(hash: u16) -> Option<StyleProp> {
    match hash {
        ATTR_SIZE => Some(StyleProp::Size),
        ATTR_RADIUS => Some(StyleProp::Radius),
        ATTR_CLIP_CORNER => Some(StyleProp::ClipCorner),
        ATTR_OPA_SCALE => Some(StyleProp::OpaScale),
        ATTR_TRANSFORM_WIDTH => Some(StyleProp::TransformWidth),
        ATTR_TRANSFORM_HEIGHT => Some(StyleProp::TransformHeight),
        ATTR_BG_OPA => Some(StyleProp::BgOpa),
        ATTR_BG_COLOR => Some(StyleProp::BgColor),
        ATTR_BG_GRAD_COLOR => Some(StyleProp::BgGradColor),
        ATTR_BG_GRAD_DIR => Some(StyleProp::BgGradDir),
        ATTR_BG_GRAD_STOP => Some(StyleProp::BgGradStop),
        ATTR_BG_MAIN_STOP => Some(StyleProp::BgMainStop),
        ATTR_BG_BLEND_MODE => Some(StyleProp::BgBlendMode),
        ATTR_PAD_TOP => Some(StyleProp::PadTop),
        ATTR_PAD_BOTTOM => Some(StyleProp::PadBottom),
        ATTR_PAD_LEFT => Some(StyleProp::PadLeft),
        ATTR_PAD_RIGHT => Some(StyleProp::PadRight),
        ATTR_TEXT_OPA => Some(StyleProp::TextOpa),
        ATTR_TEXT_FONT => Some(StyleProp::TextFont),
        ATTR_TEXT_COLOR => Some(StyleProp::TextColor),
        ATTR_TEXT_SEL_COLOR => Some(StyleProp::TextSelColor),
        ATTR_TEXT_DECOR => Some(StyleProp::TextDecor),
        ATTR_TEXT_LETTER_SPACE => Some(StyleProp::TextLetterSpace),
        ATTR_TEXT_LINE_SPACE => Some(StyleProp::TextLineSpace),
        ATTR_TEXT_BLEND_MODE => Some(StyleProp::TextBlendMode),
        ATTR_BORDER_OPA => Some(StyleProp::BorderOpa),
        ATTR_BORDER_SIDE => Some(StyleProp::BorderSide),
        ATTR_BORDER_POST => Some(StyleProp::BorderPost),
        ATTR_BORDER_WIDTH => Some(StyleProp::BorderWidth),
        ATTR_BORDER_COLOR => Some(StyleProp::BorderColor),
        ATTR_BORDER_BLEND_MODE => Some(StyleProp::BorderBlendMode),
        ATTR_OUTLINE_OPA => Some(StyleProp::OutlineOpa),
        ATTR_OUTLINE_PAD => Some(StyleProp::OutlinePad),
        ATTR_OUTLINE_WIDTH => Some(StyleProp::OutlineWidth),
        ATTR_OUTLINE_COLOR => Some(StyleProp::OutlineColor),
        ATTR_OUTLINE_BLEND_MODE => Some(StyleProp::OutlineBlendMode),
        ATTR_SHADOW_OPA => Some(StyleProp::ShadowOpa),
        ATTR_SHADOW_WIDTH => Some(StyleProp::ShadowWidth),
        ATTR_SHADOW_OFS_X => Some(StyleProp::ShadowOfsX),
        ATTR_SHADOW_OFS_Y => Some(StyleProp::ShadowOfsY),
        ATTR_SHADOW_SPREAD => Some(StyleProp::ShadowSpread),
        ATTR_SHADOW_COLOR => Some(StyleProp::ShadowColor),
        ATTR_SHADOW_BLEND_MODE => Some(StyleProp::ShadowBlendMode),
        ATTR_LINE_OPA => Some(StyleProp::LineOpa),
        ATTR_LINE_WIDTH => Some(StyleProp::LineWidth),
        ATTR_LINE_DASH_WIDTH => Some(StyleProp::LineDashWidth),
        ATTR_LINE_DASH_GAP => Some(StyleProp::LineDashGap),
        ATTR_LINE_ROUNDED => Some(StyleProp::LineRounded),
        ATTR_LINE_COLOR => Some(StyleProp::LineColor),
        ATTR_LINE_BLEND_MODE => Some(StyleProp::LineBlendMode),
        ATTR_VALUE_OPA => Some(StyleProp::ValueOpa),
        ATTR_VALUE_STR => Some(StyleProp::ValueStr),
        ATTR_VALUE_FONT => Some(StyleProp::ValueFont),
        ATTR_VALUE_ALIGN => Some(StyleProp::ValueAlign),
        ATTR_VALUE_COLOR => Some(StyleProp::ValueColor),
        ATTR_VALUE_OFS_X => Some(StyleProp::ValueOfsX),
        ATTR_VALUE_OFS_Y => Some(StyleProp::ValueOfsY),
        ATTR_VALUE_LINE_SPACE => Some(StyleProp::ValueLineSpace),
        ATTR_VALUE_LETTER_SPACE => Some(StyleProp::ValueLetterSpace),
        ATTR_VALUE_BLEND_MODE => Some(StyleProp::ValueBlendMode),
        ATTR_PATTERN_REPEAT => Some(StyleProp::PatternRepeat),
        ATTR_PATTERN_OPA => Some(StyleProp::PatternOpa),
        ATTR_PATTERN_RECOLOR => Some(StyleProp::PatternRecolor),
        ATTR_PATTERN_RECOLOR_OPA => Some(StyleProp::PatternRecolorOpa),
        ATTR_PATTERN_BLEND_MODE => Some(StyleProp::PatternBlendMode),
        _ => None,
    }
}
