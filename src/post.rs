use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use spdlog::{debug, info};

use crate::body_renderer::BodyRenderer;
use crate::config::Config;
use crate::error::ImportError;
use crate::export::{PostId, RawItem};
use crate::frontmatter::Frontmatter;
use crate::post_types::items_of_type;
use crate::text_utils::{decode_component, parse_pub_date};

/// Meta key holding the attachment id of the featured image.
pub const THUMBNAIL_META_KEY: &str = "_thumbnail_id";

const SAMPLE_PAGE_SLUG: &str = "sample-page";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Raw export item, read by some of the frontmatter fields
    #[serde(skip)]
    pub data: Arc<RawItem>,
    pub content: String,

    #[serde(rename = "type")]
    pub post_type: String,
    pub id: PostId,
    pub slug: String,
    pub date: DateTime<Tz>,
    #[serde(skip)]
    pub cover_image_id: Option<PostId>,

    // Filled by merge_images_into_posts()
    pub cover_image: Option<String>,
    pub image_urls: Vec<String>,

    // Filled by populate_frontmatter(), once everything above is final
    pub frontmatter: Frontmatter,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, type={}, slug={}, date={}, images={}",
               self.id,
               self.post_type,
               self.slug,
               self.date.to_rfc3339(),
               self.image_urls.len(),
        )
    }
}

impl Post {
    pub fn build(data: &Arc<RawItem>, renderer: &dyn BodyRenderer, config: &Config, tz: &Tz) -> Result<Post, ImportError> {
        let id = data.post_id.clone();

        let slug = match decode_component(&data.post_name) {
            Some(slug) => slug,
            None => return Err(ImportError::InvalidSlug { post_id: id, slug: data.post_name.clone() }),
        };

        let date = match data.pub_date {
            Some(ref pub_date) => parse_pub_date(pub_date, tz).map_err(|source| ImportError::InvalidDate {
                post_id: id.clone(),
                value: pub_date.clone(),
                source,
            })?,
            None => return Err(ImportError::MissingDate { post_id: id }),
        };

        let content = renderer.render(data, config)?;

        Ok(Post {
            data: Arc::clone(data),
            content,
            post_type: data.post_type.clone(),
            id,
            slug,
            date,
            cover_image_id: data.meta_value(THUMBNAIL_META_KEY).map(PostId::from),
            cover_image: None,
            image_urls: vec![],
            frontmatter: Frontmatter::default(),
        })
    }

    pub fn add_image_url(&mut self, url: &str) {
        if !self.image_urls.iter().any(|u| u == url) {
            self.image_urls.push(url.to_string());
        }
    }
}

fn is_published(item: &RawItem) -> bool {
    item.status != "trash" && item.status != "draft"
}

fn is_sample_page(item: &RawItem) -> bool {
    item.post_type == "page" && item.post_name == SAMPLE_PAGE_SLUG
}

/// Builds one post per published item of each type, keeping the export order within a type.
pub fn collect_posts(
    items: &[Arc<RawItem>],
    post_types: &[String],
    renderer: &dyn BodyRenderer,
    config: &Config,
) -> Result<Vec<Post>, ImportError> {
    let tz = config.timezone()?;

    let mut all_posts = Vec::new();
    for post_type in post_types {
        let posts = items_of_type(items, post_type)
            .filter(|item| is_published(item))
            .filter(|item| !is_sample_page(item))
            .map(|item| Post::build(item, renderer, config, &tz))
            .collect::<Result<Vec<_>, _>>()?;

        for post in &posts {
            debug!("Built post {}", post);
        }

        if post_types.len() > 1 {
            info!("{} \"{}\" posts found.", posts.len(), post_type);
        }

        all_posts.extend(posts);
    }

    if post_types.len() == 1 {
        info!("{} posts found.", all_posts.len());
    }

    Ok(all_posts)
}

#[cfg(test)]
mod tests {
    use crate::body_renderer::HtmlPassthroughRenderer;
    use crate::export::parse_export;
    use crate::post_types::discover_post_types;
    use crate::test_data::EXPORT_XML;

    use super::*;

    fn build_all(config: &Config) -> Result<Vec<Post>, ImportError> {
        let items = parse_export(EXPORT_XML).unwrap();
        let post_types = discover_post_types(&items);
        collect_posts(&items, &post_types, &HtmlPassthroughRenderer {}, config)
    }

    fn raw(post_type: &str, status: &str, post_name: &str) -> Arc<RawItem> {
        Arc::new(RawItem {
            post_id: PostId::from("1"),
            post_type: post_type.to_string(),
            status: status.to_string(),
            post_name: post_name.to_string(),
            pub_date: Some("Mon, 02 Jan 2023 10:30:00 +0000".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_collect_posts() {
        let posts = build_all(&Config::default()).unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.0.as_str()).collect();
        // Grouped by type in discovery order: post, page, recipe
        assert_eq!(ids, ["5", "8", "13"]);
    }

    #[test]
    fn test_post_fields() {
        let posts = build_all(&Config::default()).unwrap();
        let post = &posts[0];
        assert_eq!(post.post_type, "post");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.date.to_rfc3339(), "2023-01-02T10:30:00+00:00");
        assert_eq!(post.cover_image_id, Some(PostId::from("6")));
        assert!(post.cover_image.is_none());
        assert!(post.image_urls.is_empty());
        assert!(post.frontmatter.is_empty());
        assert!(post.content.starts_with("<p>Welcome to the blog.</p>"));
        assert_eq!(post.data.title, "Hello world & friends");

        let page = &posts[1];
        assert_eq!(page.slug, "你好-about");
        assert!(page.cover_image_id.is_none());
    }

    #[test]
    fn test_configured_timezone() {
        let config = Config { custom_date_timezone: "Europe/Paris".to_string(), ..Default::default() };
        let posts = build_all(&config).unwrap();
        let recipe = posts.iter().find(|p| p.post_type == "recipe").unwrap();
        assert_eq!(recipe.date.to_rfc3339(), "2023-01-05T00:15:00+01:00");
    }

    #[test]
    fn test_unknown_timezone() {
        let config = Config { custom_date_timezone: "Nowhere/City".to_string(), ..Default::default() };
        assert!(matches!(build_all(&config), Err(ImportError::UnknownTimezone(_))));
    }

    #[test]
    fn test_trash_draft_and_sample_page_are_skipped() {
        let items = vec![
            raw("post", "trash", "gone"),
            raw("post", "draft", "later"),
            raw("page", "publish", "sample-page"),
            raw("post", "publish", "sample-page"),
            raw("page", "private", "team"),
        ];
        let post_types = vec!["post".to_string(), "page".to_string()];
        let posts = collect_posts(&items, &post_types, &HtmlPassthroughRenderer {}, &Config::default()).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["sample-page", "team"]);
    }

    #[test]
    fn test_missing_date_is_an_error() {
        let item = Arc::new(RawItem {
            pub_date: None,
            ..(*raw("post", "publish", "no-date")).clone()
        });
        let res = Post::build(&item, &HtmlPassthroughRenderer {}, &Config::default(), &Tz::UTC);
        assert!(matches!(res, Err(ImportError::MissingDate { .. })));
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let item = Arc::new(RawItem {
            pub_date: Some("yesterday".to_string()),
            ..(*raw("post", "publish", "bad-date")).clone()
        });
        let res = Post::build(&item, &HtmlPassthroughRenderer {}, &Config::default(), &Tz::UTC);
        assert!(matches!(res, Err(ImportError::InvalidDate { .. })));
    }

    #[test]
    fn test_undecodable_slug_is_an_error() {
        let item = raw("post", "publish", "%ff%fe");
        let res = Post::build(&item, &HtmlPassthroughRenderer {}, &Config::default(), &Tz::UTC);
        assert!(matches!(res, Err(ImportError::InvalidSlug { .. })));
    }

    #[test]
    fn test_malformed_slug_escape_is_an_error() {
        let item = raw("post", "publish", "100%-real");
        let res = Post::build(&item, &HtmlPassthroughRenderer {}, &Config::default(), &Tz::UTC);
        assert!(matches!(res, Err(ImportError::InvalidSlug { slug, .. }) if slug == "100%-real"));
    }

    #[test]
    fn test_add_image_url_dedupes() {
        let item = raw("post", "publish", "images");
        let mut post = Post::build(&item, &HtmlPassthroughRenderer {}, &Config::default(), &Tz::UTC).unwrap();
        post.add_image_url("https://example.com/a.png");
        post.add_image_url("https://example.com/b.png");
        post.add_image_url("https://example.com/a.png");
        assert_eq!(post.image_urls, ["https://example.com/a.png", "https://example.com/b.png"]);
    }
}
