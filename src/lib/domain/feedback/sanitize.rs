//! HTML stripping for free-text submission fields

use std::collections::HashSet;

use ammonia::Builder;

/// Strips all HTML tags from `input`, keeping their text content.
///
/// Used on the helpfulness answer before it is compared against `"Yes"`, and
/// on the selected free-text comment before it is placed in the email body.
/// The output is entity-encoded and safe to embed in HTML unescaped.
pub fn strip_html(input: &str) -> String {
    Builder::default()
        .tags(HashSet::new())
        .generic_attributes(HashSet::new())
        .clean_content_tags(HashSet::new())
        .clean(input)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(strip_html("Yes"), "Yes");
    }

    #[test]
    fn test_tags_are_stripped_but_text_kept() {
        assert_eq!(strip_html("<b>very</b> helpful"), "very helpful");
    }

    #[test]
    fn test_script_markup_does_not_collapse_to_yes() {
        let sanitized = strip_html("<script>x</script>Yes");

        assert_ne!(sanitized, "Yes");
        assert_eq!(sanitized, "xYes");
    }

    #[test]
    fn test_event_handler_attributes_are_dropped() {
        assert_eq!(strip_html(r#"<img src=x onerror="alert(1)">ok"#), "ok");
    }
}
