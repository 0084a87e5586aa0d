use std::fs;
use std::path::Path;
use std::sync::Arc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ImportError;
use crate::export::{Category, PostId, PostMeta, RawItem};

/// Reads the whole export file and parses every channel item.
pub fn load_export(path: &Path) -> Result<Vec<Arc<RawItem>>, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_export(&content)
}

/// Parses an export document. Only `rss/channel/item` elements are collected,
/// with namespace prefixes stripped from the tag names.
pub fn parse_export(xml: &str) -> Result<Vec<Arc<RawItem>>, ImportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut text = String::new();

    let mut item: Option<RawItem> = None;
    let mut category: Option<Category> = None;
    let mut meta: Option<PostMeta> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = local_name(e);
                text.clear();

                match item_path(&stack, &name).as_slice() {
                    [] if name == "item" && is_channel(&stack) => item = Some(RawItem::default()),
                    ["category"] => category = Some(read_category(e)?),
                    ["postmeta"] => meta = Some(PostMeta::default()),
                    _ => {}
                }

                stack.push(name);
            }
            Event::Empty(ref e) => {
                let name = local_name(e);
                let path = item_path(&stack, &name);
                if let (Some(current), ["category"]) = (item.as_mut(), path.as_slice()) {
                    current.categories.push(read_category(e)?);
                }
                // Any other empty element keeps its default value
            }
            Event::Text(ref e) => {
                text.push_str(&e.unescape()?);
            }
            Event::CData(ref e) => {
                text.push_str(&String::from_utf8_lossy(e));
            }
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                let qualified = String::from_utf8_lossy(e.name().as_ref()).to_string();
                stack.pop();
                let value = text.trim().to_string();
                let path = item_path(&stack, &name);

                match path.as_slice() {
                    [] if name == "item" && is_channel(&stack) => {
                        if let Some(done) = item.take() {
                            items.push(Arc::new(done));
                        }
                    }
                    ["category"] => {
                        if let (Some(current), Some(mut done)) = (item.as_mut(), category.take()) {
                            done.name = value;
                            current.categories.push(done);
                        }
                    }
                    ["postmeta"] => {
                        if let (Some(current), Some(done)) = (item.as_mut(), meta.take()) {
                            current.postmeta.push(done);
                        }
                    }
                    ["postmeta", "meta_key"] => {
                        if let Some(ref mut m) = meta {
                            m.key = value;
                        }
                    }
                    ["postmeta", "meta_value"] => {
                        if let Some(ref mut m) = meta {
                            m.value = value;
                        }
                    }
                    [field] => {
                        if let Some(current) = item.as_mut() {
                            assign_field(current, field, &qualified, value);
                        }
                    }
                    _ => {}
                }

                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ImportError::Malformed(format!("unclosed element <{}>", stack.join("/"))));
    }

    Ok(items)
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

fn is_channel(stack: &[String]) -> bool {
    matches!(stack, [rss, channel] if rss == "rss" && channel == "channel")
}

/// Path of `name` relative to the current item, empty when outside of an item
/// or when `name` is the item itself.
fn item_path<'a>(stack: &'a [String], name: &'a str) -> Vec<&'a str> {
    if stack.len() < 3 || !is_channel(&stack[..2]) || stack[2] != "item" {
        return vec![];
    }

    stack[3..].iter()
        .map(|s| s.as_str())
        .chain(std::iter::once(name))
        .collect()
}

fn read_category(e: &BytesStart) -> Result<Category, ImportError> {
    let mut category = Category::default();
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.to_string();
        match attr.key.local_name().as_ref() {
            b"domain" => category.domain = value,
            b"nicename" => category.nicename = value,
            _ => {}
        }
    }
    Ok(category)
}

fn assign_field(item: &mut RawItem, field: &str, qualified: &str, value: String) {
    match field {
        "title" => item.title = value,
        "link" => item.link = value,
        "pubDate" => item.pub_date = Some(value),
        "creator" => item.creator = value,
        "encoded" if qualified.starts_with("excerpt:") => item.excerpt = value,
        "encoded" => item.content = value,
        "post_id" => item.post_id = PostId(value),
        "post_name" => item.post_name = value,
        "status" => item.status = value,
        "post_type" => item.post_type = value,
        "post_parent" => item.post_parent = PostId(value),
        "attachment_url" => item.attachment_url = Some(value),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::test_data::EXPORT_XML;

    use super::*;

    #[test]
    fn test_parse_items() {
        let items = parse_export(EXPORT_XML).unwrap();
        assert_eq!(items.len(), 9);

        let post = &items[1];
        assert_eq!(post.post_id, PostId::from("5"));
        assert_eq!(post.post_type, "post");
        assert_eq!(post.post_name, "hello-world");
        assert_eq!(post.status, "publish");
        assert_eq!(post.creator, "admin");
        assert_eq!(post.title, "Hello world & friends");
        assert_eq!(post.link, "https://example.com/blog/hello-world/");
        assert_eq!(post.pub_date.as_deref(), Some("Mon, 02 Jan 2023 10:30:00 +0000"));
        assert!(post.content.starts_with("<!-- wp:paragraph -->"));
        assert_eq!(post.excerpt, "A short\nexcerpt");
        assert_eq!(post.meta_value("_thumbnail_id"), Some("6"));
        assert_eq!(post.categories.len(), 3);
        assert_eq!(post.categories[0], Category {
            domain: "category".to_string(),
            nicename: "News".to_string(),
            name: "News".to_string(),
        });
    }

    #[test]
    fn test_parse_attachment() {
        let items = parse_export(EXPORT_XML).unwrap();
        let attachment = &items[0];
        assert_eq!(attachment.post_type, "attachment");
        assert_eq!(attachment.post_parent, PostId::from("5"));
        assert_eq!(attachment.attachment_url.as_deref(), Some("https://example.com/wp-content/uploads/2023/01/cat.png"));
    }

    #[test]
    fn test_comment_meta_is_not_post_meta() {
        let items = parse_export(EXPORT_XML).unwrap();
        let post = &items[1];
        assert_eq!(post.postmeta.len(), 2);
        assert!(post.meta_value("akismet_result").is_none());
    }

    #[test]
    fn test_channel_fields_are_ignored() {
        let xml = r#"<rss><channel><title>Site</title><link>https://example.com</link></channel></rss>"#;
        let items = parse_export(xml).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_elements() {
        let xml = r#"<rss xmlns:wp="wp"><channel><item><wp:post_name/><category domain="post_tag" nicename="x"/></item></channel></rss>"#;
        let items = parse_export(xml).unwrap();
        assert_eq!(items[0].post_name, "");
        assert_eq!(items[0].categories[0].domain, "post_tag");
        assert!(items[0].pub_date.is_none());
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_export("<rss><channel><item></channel></rss>").is_err());
        assert!(parse_export("<rss><channel><item>").is_err());
    }

    #[test]
    fn test_load_export_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPORT_XML.as_bytes()).unwrap();
        let items = load_export(file.path()).unwrap();
        assert_eq!(items.len(), 9);
    }

    #[test]
    fn test_load_missing_file() {
        let res = load_export(Path::new("/does/not/exist/export.xml"));
        assert!(matches!(res, Err(ImportError::Read { .. })));
    }
}
