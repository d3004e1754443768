//! Border tokens and the per-side style-property escape hatch.
//!
//! The "all sides" border stays class-based (`border-2`, `border-dashed`,
//! `border-[#333]`). The moment a single side is styled, that side's width,
//! style, and color become explicit style properties (`borderTopWidth`, ...)
//! so they can coexist with the class-based whole-border values. Radius is
//! class-based for every side.

/// Logical border side a panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    All,
    Top,
    Right,
    Bottom,
    Left,
}

/// Pixel width of a recognized border-width token.
pub fn width_from_token(token: &str) -> Option<&'static str> {
    match token {
        "border" => Some("1px"),
        "border-2" => Some("2px"),
        "border-4" => Some("4px"),
        "border-8" => Some("8px"),
        _ => None,
    }
}

/// The token for a recognized pixel width, the inverse of
/// [`width_from_token`].
pub fn token_from_width(width: &str) -> Option<&'static str> {
    match width {
        "1px" => Some("border"),
        "2px" => Some("border-2"),
        "4px" => Some("border-4"),
        "8px" => Some("border-8"),
        _ => None,
    }
}

/// CSS border-style keyword of a recognized style token.
pub fn style_from_token(token: &str) -> Option<&'static str> {
    match token {
        "border-solid" => Some("solid"),
        "border-dashed" => Some("dashed"),
        "border-dotted" => Some("dotted"),
        "border-double" => Some("double"),
        "border-none" => Some("none"),
        _ => None,
    }
}

pub fn token_from_style(style: &str) -> Option<&'static str> {
    match style {
        "solid" => Some("border-solid"),
        "dashed" => Some("border-dashed"),
        "dotted" => Some("border-dotted"),
        "double" => Some("border-double"),
        "none" => Some("border-none"),
        _ => None,
    }
}

/// Wrap an arbitrary color value into a class token.
pub fn color_token(value: &str) -> String {
    format!("border-[{}]", value)
}

/// Unwrap a bracketed color token back to its raw value. Named palette
/// tokens (`border-red-500`) have no standalone value and yield `None`.
pub fn color_value(token: &str) -> Option<&str> {
    token.strip_prefix("border-[")?.strip_suffix(']')
}

pub fn width_key(side: BorderSide) -> &'static str {
    match side {
        BorderSide::All => "borderWidth",
        BorderSide::Top => "borderTopWidth",
        BorderSide::Right => "borderRightWidth",
        BorderSide::Bottom => "borderBottomWidth",
        BorderSide::Left => "borderLeftWidth",
    }
}

pub fn style_key(side: BorderSide) -> &'static str {
    match side {
        BorderSide::All => "borderStyle",
        BorderSide::Top => "borderTopStyle",
        BorderSide::Right => "borderRightStyle",
        BorderSide::Bottom => "borderBottomStyle",
        BorderSide::Left => "borderLeftStyle",
    }
}

pub fn color_key(side: BorderSide) -> &'static str {
    match side {
        BorderSide::All => "borderColor",
        BorderSide::Top => "borderTopColor",
        BorderSide::Right => "borderRightColor",
        BorderSide::Bottom => "borderBottomColor",
        BorderSide::Left => "borderLeftColor",
    }
}
