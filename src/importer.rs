use std::sync::Arc;

use spdlog::info;

use crate::body_renderer::BodyRenderer;
use crate::config::Config;
use crate::error::ImportError;
use crate::export::{load_export, RawItem};
use crate::frontmatter::populate_frontmatter;
use crate::images::{collect_attached_images, collect_scraped_images, merge_images_into_posts};
use crate::post::{collect_posts, Post};
use crate::post_types::discover_post_types;

/// Loads `config.input` and turns it into posts with images and frontmatter resolved.
pub fn import_posts(config: &Config, renderer: &dyn BodyRenderer) -> Result<Vec<Post>, ImportError> {
    info!("Parsing {}", config.input.display());
    let items = load_export(&config.input)?;
    import_items(&items, config, renderer)
}

pub fn import_items(items: &[Arc<RawItem>], config: &Config, renderer: &dyn BodyRenderer) -> Result<Vec<Post>, ImportError> {
    let post_types = discover_post_types(items);
    let mut posts = collect_posts(items, &post_types, renderer, config)?;

    // Attached first, the order ends up in each post image list
    let mut images = Vec::new();
    if config.save_images.includes_attached() {
        images.extend(collect_attached_images(items));
    }
    if config.save_images.includes_scraped() {
        images.extend(collect_scraped_images(items, &post_types)?);
    }

    merge_images_into_posts(&images, &mut posts);
    populate_frontmatter(&mut posts, config)?;

    Ok(posts)
}
