//! Border projection: class-based for the whole border, style-property
//! based per side, radius always class-based.

use crate::dispatch;
use pagewright_dom::ComponentNode;
use pagewright_editor::EditorStore;
use pagewright_style::{
    border::{self, BorderSide},
    classes, spacing, Category,
};

/// Width/style/color of one logical side, as display-ready CSS values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderFields {
    /// Pixel width (`"2px"`), empty when unset.
    pub width: String,
    /// CSS border-style keyword, empty when unset.
    pub style: String,
    /// Color value (raw for `border-[…]` tokens and side properties, the
    /// bare token text for palette tokens), empty when unset.
    pub color: String,
}

pub fn border_fields(node: &ComponentNode, side: BorderSide) -> BorderFields {
    match side {
        BorderSide::All => {
            let class = node.class_name();
            BorderFields {
                width: classes::extract(class, Category::BorderWidth)
                    .and_then(border::width_from_token)
                    .unwrap_or_default()
                    .to_string(),
                style: classes::extract(class, Category::BorderStyle)
                    .and_then(border::style_from_token)
                    .unwrap_or_default()
                    .to_string(),
                color: classes::extract(class, Category::BorderColor)
                    .map(|token| border::color_value(token).unwrap_or(token))
                    .unwrap_or_default()
                    .to_string(),
            }
        }
        side => BorderFields {
            width: dispatch::style_value(node, border::width_key(side))
                .unwrap_or_default()
                .to_string(),
            style: dispatch::style_value(node, border::style_key(side))
                .unwrap_or_default()
                .to_string(),
            color: dispatch::style_value(node, border::color_key(side))
                .unwrap_or_default()
                .to_string(),
        },
    }
}

/// Current radius token (`rounded-lg`), empty when unset.
pub fn radius_field(node: &ComponentNode) -> String {
    classes::extract_radius(node.class_name())
        .unwrap_or_default()
        .to_string()
}

/// Set a side's width from a pixel value. The whole border accepts only the
/// recognized widths (1/2/4/8px, matching the width tokens); single sides
/// take any pixel value as a style property. Empty clears.
pub fn set_border_width(
    store: &mut EditorStore,
    node_id: &str,
    side: BorderSide,
    width: &str,
) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    match side {
        BorderSide::All => {
            let token = if width.is_empty() {
                ""
            } else {
                match border::token_from_width(width) {
                    Some(token) => token,
                    None => return false,
                }
            };
            let class = classes::replace(node.class_name(), Category::BorderWidth, token);
            dispatch::update_class(store, node_id, class)
        }
        side => {
            let value = if width.is_empty() {
                None
            } else {
                Some(width.to_string())
            };
            dispatch::update_style(store, &node, border::width_key(side), value)
        }
    }
}

/// Set a side's border style from a CSS keyword. Empty clears; unknown
/// keywords are refused.
pub fn set_border_style(
    store: &mut EditorStore,
    node_id: &str,
    side: BorderSide,
    keyword: &str,
) -> bool {
    if !keyword.is_empty() && border::token_from_style(keyword).is_none() {
        return false;
    }
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    match side {
        BorderSide::All => {
            let token = border::token_from_style(keyword).unwrap_or("");
            let class = classes::replace(node.class_name(), Category::BorderStyle, token);
            dispatch::update_class(store, node_id, class)
        }
        side => {
            let value = if keyword.is_empty() {
                None
            } else {
                Some(keyword.to_string())
            };
            dispatch::update_style(store, &node, border::style_key(side), value)
        }
    }
}

/// Set a side's border color from a raw color value. Empty clears.
pub fn set_border_color(
    store: &mut EditorStore,
    node_id: &str,
    side: BorderSide,
    color: &str,
) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    match side {
        BorderSide::All => {
            let token = if color.is_empty() {
                String::new()
            } else {
                border::color_token(color)
            };
            let class = classes::replace(node.class_name(), Category::BorderColor, &token);
            dispatch::update_class(store, node_id, class)
        }
        side => {
            let value = if color.is_empty() {
                None
            } else {
                Some(color.to_string())
            };
            dispatch::update_style(store, &node, border::color_key(side), value)
        }
    }
}

/// Set the radius. A bare number becomes a bracketed pixel token, a keyword
/// (`lg`, `full`) joins the `rounded-` prefix, a ready token passes through.
/// Empty clears. Radius stays class-based for every side.
pub fn set_radius(store: &mut EditorStore, node_id: &str, input: &str) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let input = input.trim();
    let token = if input.is_empty() {
        String::new()
    } else if input.chars().all(|c| c.is_ascii_digit() || c == '.') {
        match spacing::sanitize_numeric(input) {
            Some(value) => format!("rounded-[{}]", spacing::format_px(value)),
            None => return false,
        }
    } else if input == "rounded" || input.starts_with("rounded-") {
        input.to_string()
    } else {
        format!("rounded-{}", input)
    };
    let class = classes::replace(node.class_name(), Category::BorderRadius, &token);
    dispatch::update_class(store, node_id, class)
}
