//! Extraction and replacement over whole class strings.

use crate::token::{classify, Category};

/// The authoritative token of a category, rightmost match winning when a
/// class string carries conflicting tokens.
pub fn extract(class: &str, category: Category) -> Option<&str> {
    class
        .split_whitespace()
        .filter(|token| classify(token) == category)
        .last()
}

/// All padding tokens, any side, in source order.
pub fn extract_padding(class: &str) -> Vec<&str> {
    class
        .split_whitespace()
        .filter(|token| matches!(classify(token), Category::Padding(_)))
        .collect()
}

/// All margin tokens, any side, in source order.
pub fn extract_margin(class: &str) -> Vec<&str> {
    class
        .split_whitespace()
        .filter(|token| matches!(classify(token), Category::Margin(_)))
        .collect()
}

pub fn extract_width(class: &str) -> Option<&str> {
    extract(class, Category::Width)
}

pub fn extract_height(class: &str) -> Option<&str> {
    extract(class, Category::Height)
}

pub fn extract_font_size(class: &str) -> Option<&str> {
    extract(class, Category::FontSize)
}

pub fn extract_text_align(class: &str) -> Option<&str> {
    extract(class, Category::TextAlign)
}

pub fn extract_object_fit(class: &str) -> Option<&str> {
    extract(class, Category::ObjectFit)
}

pub fn extract_radius(class: &str) -> Option<&str> {
    extract(class, Category::BorderRadius)
}

pub fn extract_shadow(class: &str) -> Option<&str> {
    extract(class, Category::Shadow)
}

pub fn extract_opacity(class: &str) -> Option<&str> {
    extract(class, Category::Opacity)
}

/// Remove every token of `category` and append `next`. An empty `next`
/// clears the category; the result carries single spaces only.
pub fn replace(class: &str, category: Category, next: &str) -> String {
    let mut kept: Vec<&str> = class
        .split_whitespace()
        .filter(|token| classify(token) != category)
        .collect();
    if !next.is_empty() {
        kept.push(next);
    }
    kept.join(" ")
}

/// Merge two class strings with last-write-wins per category. Tokens the
/// codec does not manage are de-duplicated by exact text.
pub fn merge_classes(base: &str, overlay: &str) -> String {
    let mut out: Vec<(Category, &str)> = Vec::new();
    for token in base.split_whitespace().chain(overlay.split_whitespace()) {
        let category = classify(token);
        let duplicate = out.iter().position(|(seen, text)| {
            if category == Category::Other {
                *text == token
            } else {
                *seen == category
            }
        });
        if let Some(at) = duplicate {
            out.remove(at);
        }
        out.push((category, token));
    }
    out.iter()
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `opacity-N` percentage, when present and numeric.
pub fn opacity_percent(token: &str) -> Option<u32> {
    token.strip_prefix("opacity-")?.parse().ok()
}

pub fn opacity_token(percent: u32) -> String {
    format!("opacity-{}", percent.min(100))
}
