//! Width/height and per-side padding/margin projection.

use crate::dispatch;
use pagewright_dom::ComponentNode;
use pagewright_editor::EditorStore;
use pagewright_style::{
    classes,
    spacing::{self, BoxSpacing, SpacingKind},
    Category, Side,
};
use serde_json::Value;
use std::collections::HashMap;

/// Display-ready box-model values for the property panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxModelFields {
    /// Current `w-*` token, empty when unset.
    pub width: String,
    /// Current `h-*` token, empty when unset.
    pub height: String,
    pub padding: BoxSpacing,
    pub margin: BoxSpacing,
}

pub fn box_model_fields(node: &ComponentNode) -> BoxModelFields {
    let class = node.class_name();
    BoxModelFields {
        width: classes::extract_width(class).unwrap_or_default().to_string(),
        height: classes::extract_height(class)
            .unwrap_or_default()
            .to_string(),
        padding: spacing::spacing_record(class, SpacingKind::Padding),
        margin: spacing::spacing_record(class, SpacingKind::Margin),
    }
}

pub fn set_width(store: &mut EditorStore, node_id: &str, input: &str) -> bool {
    set_size(store, node_id, Category::Width, "w", input)
}

pub fn set_height(store: &mut EditorStore, node_id: &str, input: &str) -> bool {
    set_size(store, node_id, Category::Height, "h", input)
}

/// Accepts a bare number (becomes a bracketed pixel token), a keyword
/// (`full`, `auto`), or a ready token (`w-1/2`). Empty input clears.
fn set_size(
    store: &mut EditorStore,
    node_id: &str,
    category: Category,
    prefix: &str,
    input: &str,
) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let input = input.trim();
    let token = if input.is_empty() {
        String::new()
    } else if input.chars().all(|c| c.is_ascii_digit() || c == '.') {
        match spacing::sanitize_numeric(input) {
            Some(value) => format!("{}-[{}]", prefix, spacing::format_px(value)),
            None => return false,
        }
    } else if input.starts_with(&format!("{}-", prefix)) {
        input.to_string()
    } else {
        format!("{}-{}", prefix, input)
    };
    let class = classes::replace(node.class_name(), category, &token);
    dispatch::update_class(store, node_id, class)
}

/// Set one side's padding/margin from a numeric panel input. The class token
/// and the structured `style` record update together so derived state stays
/// consistent; unparsable input aborts without touching anything.
pub fn set_spacing(
    store: &mut EditorStore,
    node_id: &str,
    kind: SpacingKind,
    side: Side,
    input: &str,
) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let category = match kind {
        SpacingKind::Padding => Category::Padding(side),
        SpacingKind::Margin => Category::Margin(side),
    };
    let token = if input.trim().is_empty() {
        String::new()
    } else {
        let Some(value) = spacing::sanitize_numeric(input) else {
            return false;
        };
        format!(
            "{}{}-[{}]",
            kind.prefix(),
            spacing::side_suffix(side),
            spacing::format_px(value)
        )
    };
    let class = classes::replace(node.class_name(), category, &token);

    // Re-derive the whole per-side record from the updated class string.
    let record = spacing::spacing_record(&class, kind);
    let mut style = node.style().cloned().unwrap_or_default();
    for key in spacing::style_keys(kind) {
        style.remove(key);
    }
    for (key, value) in spacing::style_entries(&record, kind) {
        style.insert(key, Value::String(value));
    }

    let mut props = HashMap::new();
    props.insert("className".to_string(), Value::String(class));
    props.insert("style".to_string(), Value::Object(style));
    dispatch::update_props(store, node_id, props)
}
