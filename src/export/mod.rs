use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod loader;

pub use loader::{load_export, parse_export};

#[derive(Debug, Clone, Default, Eq, Hash, PartialEq, Serialize)]
pub struct PostId(pub String);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId(value.to_string())
    }
}

/// A `<category>` entry of an item. `domain` is either `category` or `post_tag`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub domain: String,
    pub nicename: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostMeta {
    pub key: String,
    pub value: String,
}

/// One `<item>` of the export channel, read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub pub_date: Option<String>,
    pub creator: String,
    pub content: String,
    pub excerpt: String,
    pub post_id: PostId,
    pub post_name: String,
    pub status: String,
    pub post_type: String,
    pub post_parent: PostId,
    pub attachment_url: Option<String>,
    pub categories: Vec<Category>,
    pub postmeta: Vec<PostMeta>,
}

impl RawItem {
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.postmeta.iter()
            .find(|meta| meta.key == key)
            .map(|meta| meta.value.as_str())
    }

    pub fn is_of_type(&self, post_type: &str) -> bool {
        self.post_type == post_type
    }
}
