//! Spacing tokens ⇄ structured per-side style records.
//!
//! The numeric scale follows the utility convention: `N` steps are
//! `N * 0.25rem`, the literal `px` step is `1px`, bracketed values pass
//! through verbatim, and `auto` passes through verbatim. Axis tokens (`x`,
//! `y`) expand to both of their sides; later tokens override earlier ones per
//! side.

use crate::token::{classify, Category, Side};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingKind {
    Padding,
    Margin,
}

impl SpacingKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            SpacingKind::Padding => "p",
            SpacingKind::Margin => "m",
        }
    }
}

/// Explicit per-side spacing values; `None` means unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxSpacing {
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
}

impl BoxSpacing {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    fn set(&mut self, side: Side, value: &str) {
        match side {
            Side::All => {
                self.top = Some(value.to_string());
                self.right = Some(value.to_string());
                self.bottom = Some(value.to_string());
                self.left = Some(value.to_string());
            }
            Side::X => {
                self.left = Some(value.to_string());
                self.right = Some(value.to_string());
            }
            Side::Y => {
                self.top = Some(value.to_string());
                self.bottom = Some(value.to_string());
            }
            Side::Top => self.top = Some(value.to_string()),
            Side::Right => self.right = Some(value.to_string()),
            Side::Bottom => self.bottom = Some(value.to_string()),
            Side::Left => self.left = Some(value.to_string()),
        }
    }
}

/// Convert one token value part (`4`, `px`, `[10px]`, `auto`) to a CSS
/// length. Unparsable values yield `None`, never an error.
pub fn spacing_value(raw: &str) -> Option<String> {
    if raw == "px" {
        return Some("1px".to_string());
    }
    if raw == "auto" {
        return Some("auto".to_string());
    }
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        if inner.is_empty() {
            return None;
        }
        return Some(inner.to_string());
    }
    let steps: f64 = raw.parse().ok()?;
    if !steps.is_finite() {
        return None;
    }
    Some(format_rem(steps * 0.25))
}

/// Walk a class string and build the per-side record for one spacing kind.
/// Later tokens override earlier ones on the sides they cover.
pub fn spacing_record(class: &str, kind: SpacingKind) -> BoxSpacing {
    let mut record = BoxSpacing::default();
    for token in class.split_whitespace() {
        let side = match (classify(token), kind) {
            (Category::Padding(side), SpacingKind::Padding) => side,
            (Category::Margin(side), SpacingKind::Margin) => side,
            _ => continue,
        };
        let value = token.split_once('-').and_then(|(_, raw)| spacing_value(raw));
        if let Some(value) = value {
            record.set(side, &value);
        }
    }
    record
}

/// Style-object entries for a record. Collapses to the single shorthand key
/// when all four sides carry the same value.
pub fn style_entries(record: &BoxSpacing, kind: SpacingKind) -> Vec<(String, String)> {
    let shorthand = match kind {
        SpacingKind::Padding => "padding",
        SpacingKind::Margin => "margin",
    };
    if let (Some(top), Some(right), Some(bottom), Some(left)) =
        (&record.top, &record.right, &record.bottom, &record.left)
    {
        if top == right && top == bottom && top == left {
            return vec![(shorthand.to_string(), top.clone())];
        }
    }
    let mut out = Vec::new();
    let sides = [
        ("Top", &record.top),
        ("Right", &record.right),
        ("Bottom", &record.bottom),
        ("Left", &record.left),
    ];
    for (suffix, value) in sides {
        if let Some(value) = value {
            out.push((format!("{}{}", shorthand, suffix), value.clone()));
        }
    }
    out
}

/// Every style key a spacing kind may occupy, shorthand included. Setters
/// clear these before writing the fresh entries back.
pub fn style_keys(kind: SpacingKind) -> [&'static str; 5] {
    match kind {
        SpacingKind::Padding => [
            "padding",
            "paddingTop",
            "paddingRight",
            "paddingBottom",
            "paddingLeft",
        ],
        SpacingKind::Margin => [
            "margin",
            "marginTop",
            "marginRight",
            "marginBottom",
            "marginLeft",
        ],
    }
}

/// The token infix for a side (`pt-…`, `mx-…`). `All` has none.
pub fn side_suffix(side: Side) -> &'static str {
    match side {
        Side::All => "",
        Side::Top => "t",
        Side::Right => "r",
        Side::Bottom => "b",
        Side::Left => "l",
        Side::X => "x",
        Side::Y => "y",
    }
}

/// Sanitize free-text numeric input down to digits, sign, and decimal point,
/// then parse. Non-finite or unparsable input yields `None` and the caller
/// aborts that one field update.
pub fn sanitize_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Format a pixel length without a trailing `.0` on whole numbers.
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

fn format_rem(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}rem", value as i64)
    } else {
        format!("{}rem", value)
    }
}
