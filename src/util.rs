//! Helpers for working with utility-class strings.

/// Splits a class string into its individual utility classes.
///
/// # Example
///
/// ```rust
/// use cactus_styles::class_tokens;
///
/// let classes: Vec<&str> = class_tokens("  title   mb-2 ").collect();
/// assert_eq!(classes, vec!["title", "mb-2"]);
/// ```
pub fn class_tokens(classes: &str) -> std::str::SplitWhitespace<'_> {
    classes.split_whitespace()
}

/// Joins class strings with single spaces.
///
/// Each part is trimmed and empty parts are skipped, so combining with an
/// empty token never leaves stray whitespace in the attribute.
///
/// # Example
///
/// ```rust
/// use cactus_styles::{combine_classes, COVER_PREVIEW_IMAGE, POST_TITLE};
///
/// assert_eq!(combine_classes([POST_TITLE, COVER_PREVIEW_IMAGE, "mt-2"]), "title mb-2 mt-2");
/// ```
pub fn combine_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_empty() {
        assert_eq!(class_tokens("").count(), 0);
        assert_eq!(class_tokens("   ").count(), 0);
    }

    #[test]
    fn test_class_tokens_keeps_variants_intact() {
        let classes: Vec<&str> = class_tokens("sm:grid sm:grid-cols-[3fr_1fr]").collect();
        assert_eq!(classes, vec!["sm:grid", "sm:grid-cols-[3fr_1fr]"]);
    }

    #[test]
    fn test_combine_classes_skips_empty() {
        assert_eq!(combine_classes(["", "a", "  ", "b"]), "a b");
    }

    #[test]
    fn test_combine_classes_trims_parts() {
        assert_eq!(combine_classes([" a b ", "c "]), "a b c");
    }

    #[test]
    fn test_combine_classes_nothing() {
        assert_eq!(combine_classes(std::iter::empty()), "");
        assert_eq!(combine_classes([""]), "");
    }
}
