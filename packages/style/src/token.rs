//! Utility-class tokenizer: one token in, one typed category out.

/// Logical side a spacing token applies to. `X`/`Y` are the axis shorthands
/// and expand to both corresponding sides during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    All,
    Top,
    Right,
    Bottom,
    Left,
    X,
    Y,
}

/// The style fact a single utility-class token encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Width,
    Height,
    Padding(Side),
    Margin(Side),
    FontSize,
    TextAlign,
    ObjectFit,
    BorderRadius,
    BorderWidth,
    BorderStyle,
    BorderColor,
    Shadow,
    Opacity,
    /// Anything this codec does not manage (colors, display, flex, ...).
    Other,
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const OBJECT_FITS: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];

/// Classify one whitespace-free token. Unrecognized shapes are `Other`.
pub fn classify(token: &str) -> Category {
    if let Some(rest) = token.strip_prefix("w-") {
        if !rest.is_empty() {
            return Category::Width;
        }
    }
    if let Some(rest) = token.strip_prefix("h-") {
        if !rest.is_empty() {
            return Category::Height;
        }
    }
    if let Some(category) = classify_spacing(token) {
        return category;
    }
    if let Some(rest) = token.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return Category::FontSize;
        }
        if TEXT_ALIGNS.contains(&rest) {
            return Category::TextAlign;
        }
        return Category::Other; // text color and friends
    }
    if let Some(rest) = token.strip_prefix("object-") {
        if OBJECT_FITS.contains(&rest) {
            return Category::ObjectFit;
        }
        return Category::Other;
    }
    if token == "rounded" || token.starts_with("rounded-") {
        return Category::BorderRadius;
    }
    if token == "border" {
        return Category::BorderWidth;
    }
    if let Some(rest) = token.strip_prefix("border-") {
        if matches!(rest, "2" | "4" | "8") {
            return Category::BorderWidth;
        }
        if BORDER_STYLES.contains(&rest) {
            return Category::BorderStyle;
        }
        // Sided border classes are not part of this codec; sides other than
        // "all" live as explicit style properties.
        if matches!(rest.get(..2), Some("t-" | "r-" | "b-" | "l-" | "x-" | "y-")) {
            return Category::Other;
        }
        if rest.is_empty() {
            return Category::Other;
        }
        return Category::BorderColor;
    }
    if token == "shadow" || token.starts_with("shadow-") {
        return Category::Shadow;
    }
    if let Some(rest) = token.strip_prefix("opacity-") {
        if !rest.is_empty() {
            return Category::Opacity;
        }
    }
    Category::Other
}

fn classify_spacing(token: &str) -> Option<Category> {
    let (head, value) = token.split_once('-')?;
    if value.is_empty() {
        return None;
    }
    let (margin, side) = match head {
        "p" => (false, Side::All),
        "pt" => (false, Side::Top),
        "pr" => (false, Side::Right),
        "pb" => (false, Side::Bottom),
        "pl" => (false, Side::Left),
        "px" => (false, Side::X),
        "py" => (false, Side::Y),
        "m" => (true, Side::All),
        "mt" => (true, Side::Top),
        "mr" => (true, Side::Right),
        "mb" => (true, Side::Bottom),
        "ml" => (true, Side::Left),
        "mx" => (true, Side::X),
        "my" => (true, Side::Y),
        _ => return None,
    };
    Some(if margin {
        Category::Margin(side)
    } else {
        Category::Padding(side)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_sizing_tokens() {
        assert_eq!(classify("w-full"), Category::Width);
        assert_eq!(classify("w-[320px]"), Category::Width);
        assert_eq!(classify("h-12"), Category::Height);
        assert_eq!(classify("w-"), Category::Other);
    }

    #[test]
    fn test_classifies_spacing_tokens_with_sides() {
        assert_eq!(classify("p-4"), Category::Padding(Side::All));
        assert_eq!(classify("pt-2"), Category::Padding(Side::Top));
        assert_eq!(classify("px-[3px]"), Category::Padding(Side::X));
        assert_eq!(classify("m-auto"), Category::Margin(Side::All));
        assert_eq!(classify("my-8"), Category::Margin(Side::Y));
        assert_eq!(classify("p-"), Category::Other);
    }

    #[test]
    fn test_splits_text_tokens_by_meaning() {
        assert_eq!(classify("text-lg"), Category::FontSize);
        assert_eq!(classify("text-center"), Category::TextAlign);
        // Text color is not managed here.
        assert_eq!(classify("text-red-500"), Category::Other);
    }

    #[test]
    fn test_classifies_border_tokens() {
        assert_eq!(classify("border"), Category::BorderWidth);
        assert_eq!(classify("border-2"), Category::BorderWidth);
        assert_eq!(classify("border-dashed"), Category::BorderStyle);
        assert_eq!(classify("border-red-500"), Category::BorderColor);
        assert_eq!(classify("border-[#333]"), Category::BorderColor);
        assert_eq!(classify("border-t-2"), Category::Other);
        assert_eq!(classify("rounded-lg"), Category::BorderRadius);
        assert_eq!(classify("rounded"), Category::BorderRadius);
    }

    #[test]
    fn test_classifies_effect_tokens() {
        assert_eq!(classify("shadow"), Category::Shadow);
        assert_eq!(classify("shadow-lg"), Category::Shadow);
        assert_eq!(classify("opacity-50"), Category::Opacity);
        assert_eq!(classify("opacity-"), Category::Other);
    }

    #[test]
    fn test_object_fit_tokens() {
        assert_eq!(classify("object-cover"), Category::ObjectFit);
        assert_eq!(classify("object-scale-down"), Category::ObjectFit);
        assert_eq!(classify("object-top"), Category::Other);
    }

    #[test]
    fn test_unknown_tokens_are_other() {
        assert_eq!(classify("flex"), Category::Other);
        assert_eq!(classify("items-center"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }
}
