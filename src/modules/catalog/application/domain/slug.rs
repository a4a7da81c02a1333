/// Maximum length of a derived slug base. Collision suffixes (`-1`, `-2`, …)
/// come on top of this.
pub const SLUG_BASE_MAX: usize = 200;

/// URL-safe slug from a product name: lowercase, ASCII alphanumerics kept,
/// everything else collapsed into single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    let slug: String = slug.chars().take(SLUG_BASE_MAX).collect();

    if slug.is_empty() {
        // A name with no usable characters still needs a slug base; the
        // collision loop disambiguates duplicates.
        return "product".to_string();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_name() {
        assert_eq!(slugify("Widget"), "widget");
    }

    #[test]
    fn spaces_become_single_hyphens() {
        assert_eq!(slugify("Blue  Steel   Widget"), "blue-steel-widget");
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(slugify("Widget (Deluxe), v2!"), "widget-deluxe-v2");
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(slugify("  -- Widget -- "), "widget");
    }

    #[test]
    fn unusable_name_gets_fallback_base() {
        assert_eq!(slugify("!!!"), "product");
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "x".repeat(500);
        assert_eq!(slugify(&name).len(), SLUG_BASE_MAX);
    }
}
