use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use spdlog::info;
use url::Url;

use crate::error::ImportError;
use crate::export::{PostId, RawItem};
use crate::post::Post;
use crate::post_types::items_of_type;
use crate::text_utils::filename_from_url;

/// Where an image was discovered. Scraped images have no attachment behind them.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageId {
    Attachment(PostId),
    Scraped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: ImageId,
    /// Post the image belongs to: the attachment parent, or the post it was scraped from
    pub post_id: PostId,
    pub url: String,
}

impl Image {
    fn is_cover_of(&self, post: &Post) -> bool {
        match (&self.id, &post.cover_image_id) {
            (ImageId::Attachment(id), Some(cover_id)) => id == cover_id,
            _ => false,
        }
    }
}

pub fn collect_attached_images(items: &[Arc<RawItem>]) -> Vec<Image> {
    lazy_static! {
        static ref IMAGE_FILE_REGEX: Regex = Regex::new(r"(?i)\.(gif|jpe?g|png|webp)$").unwrap();
    }

    let images: Vec<Image> = items_of_type(items, "attachment")
        .filter_map(|attachment| {
            let url = attachment.attachment_url.as_ref()?;
            if !IMAGE_FILE_REGEX.is_match(url) {
                return None;
            }
            Some(Image {
                id: ImageId::Attachment(attachment.post_id.clone()),
                post_id: attachment.post_parent.clone(),
                url: url.clone(),
            })
        })
        .collect();

    info!("{} attached images found.", images.len());
    images
}

/// Scans the raw body of every item of `post_types`, whatever its status, for `<img>` tags.
/// Sources are resolved against the item link.
pub fn collect_scraped_images(items: &[Arc<RawItem>], post_types: &[String]) -> Result<Vec<Image>, ImportError> {
    let mut images = Vec::new();
    for post_type in post_types {
        for item in items_of_type(items, post_type) {
            images.extend(scrape_images(item)?);
        }
    }

    info!("{} images scraped from post body content.", images.len());
    Ok(images)
}

fn scrape_images(item: &RawItem) -> Result<Vec<Image>, ImportError> {
    lazy_static! {
        static ref IMG_TAG_REGEX: Regex = Regex::new(
            r#"(?i)<img[^>]*src="(.+?\.(?:gif|jpe?g|png|webp))"[^>]*>"#
        ).unwrap();
    }

    let mut images = Vec::new();
    for captures in IMG_TAG_REGEX.captures_iter(&item.content) {
        let src = &captures[1];
        let url = resolve_url(src, &item.link)?;
        images.push(Image {
            id: ImageId::Scraped,
            post_id: item.post_id.clone(),
            url,
        });
    }

    Ok(images)
}

fn resolve_url(src: &str, base: &str) -> Result<String, ImportError> {
    let to_error = |source: url::ParseError| ImportError::InvalidImageUrl {
        src: src.to_string(),
        base: base.to_string(),
        source,
    };

    let base_url = Url::parse(base).map_err(to_error)?;
    let url = base_url.join(src).map_err(to_error)?;
    Ok(url.to_string())
}

/// Attaches every image to each post it belongs to or is the cover of.
/// A post never gets the same url twice, and keeps the order of `images`.
pub fn merge_images_into_posts(images: &[Image], posts: &mut [Post]) {
    for image in images {
        for post in posts.iter_mut() {
            let mut should_attach = image.post_id == post.id;

            if image.is_cover_of(post) {
                should_attach = true;
                post.cover_image = Some(filename_from_url(&image.url));
            }

            if should_attach {
                post.add_image_url(&image.url);
            }
        }
    }
}
