//! Font-size and text-alignment projection.

use crate::dispatch;
use pagewright_dom::ComponentNode;
use pagewright_editor::EditorStore;
use pagewright_style::{classes, classify, Category};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyFields {
    /// Current `text-{size}` token, empty when unset.
    pub font_size: String,
    /// Current `text-{align}` token, empty when unset.
    pub text_align: String,
}

pub fn typography_fields(node: &ComponentNode) -> TypographyFields {
    let class = node.class_name();
    TypographyFields {
        font_size: classes::extract_font_size(class)
            .unwrap_or_default()
            .to_string(),
        text_align: classes::extract_text_align(class)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Swap the font-size token. Empty clears; a token that is not a font size
/// is refused.
pub fn set_font_size(store: &mut EditorStore, node_id: &str, token: &str) -> bool {
    set_token(store, node_id, Category::FontSize, token)
}

pub fn set_text_align(store: &mut EditorStore, node_id: &str, token: &str) -> bool {
    set_token(store, node_id, Category::TextAlign, token)
}

fn set_token(store: &mut EditorStore, node_id: &str, category: Category, token: &str) -> bool {
    if !token.is_empty() && classify(token) != category {
        return false;
    }
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let class = classes::replace(node.class_name(), category, token);
    dispatch::update_class(store, node_id, class)
}
