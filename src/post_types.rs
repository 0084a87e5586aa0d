use std::sync::Arc;

use crate::export::RawItem;

/// Item types that never carry content of their own.
pub const EXCLUDED_POST_TYPES: [&str; 7] = [
    "attachment",
    "revision",
    "nav_menu_item",
    "custom_css",
    "customize_changeset",
    "wp_global_styles",
    "wp_navigation",
];

/// Distinct content types of the export, in the order they first appear.
pub fn discover_post_types(items: &[Arc<RawItem>]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for item in items {
        let post_type = item.post_type.as_str();
        if EXCLUDED_POST_TYPES.contains(&post_type) || types.iter().any(|t| t == post_type) {
            continue;
        }
        types.push(post_type.to_string());
    }
    types
}

pub fn items_of_type<'a>(items: &'a [Arc<RawItem>], post_type: &'a str) -> impl Iterator<Item = &'a Arc<RawItem>> + 'a {
    items.iter().filter(move |item| item.is_of_type(post_type))
}

#[cfg(test)]
mod tests {
    use crate::export::parse_export;
    use crate::test_data::EXPORT_XML;

    use super::*;

    fn item(post_type: &str) -> Arc<RawItem> {
        Arc::new(RawItem {
            post_type: post_type.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_discover_from_export() {
        let items = parse_export(EXPORT_XML).unwrap();
        assert_eq!(discover_post_types(&items), ["post", "page", "recipe"]);
    }

    #[test]
    fn test_structural_types_are_excluded() {
        let items: Vec<_> = EXCLUDED_POST_TYPES.iter().map(|t| item(t)).collect();
        assert!(discover_post_types(&items).is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let items = vec![item("page"), item("revision"), item("post"), item("page"), item("book"), item("post")];
        assert_eq!(discover_post_types(&items), ["page", "post", "book"]);
    }

    #[test]
    fn test_empty_export() {
        assert!(discover_post_types(&[]).is_empty());
    }

    #[test]
    fn test_items_of_type() {
        let items = vec![item("page"), item("post"), item("page")];
        assert_eq!(items_of_type(&items, "page").count(), 2);
        assert_eq!(items_of_type(&items, "book").count(), 0);
    }
}
