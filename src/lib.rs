pub mod config;
pub mod logger;
pub mod error;
pub mod export;
pub mod post_types;
pub mod post;
pub mod images;
pub mod frontmatter;
pub mod body_renderer;
pub mod importer;
mod text_utils;
mod test_data;

pub use body_renderer::{BodyRenderer, HtmlPassthroughRenderer};
pub use config::{read_config, Config, SaveImages};
pub use error::ImportError;
pub use importer::{import_items, import_posts};
pub use post::Post;
