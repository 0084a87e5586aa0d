use std::str::FromStr;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::Config;
use crate::error::ImportError;
use crate::post::Post;
use crate::text_utils::{collapse_newlines, decode_component_lossy};

const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(i64),
    Date(DateTime<Tz>),
    Missing,
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::List(list) => list.serialize(serializer),
            FieldValue::Number(num) => serializer.serialize_i64(*num),
            FieldValue::Date(date) => serializer.serialize_str(&date.to_rfc3339()),
            FieldValue::Missing => serializer.serialize_none(),
        }
    }
}

/// Frontmatter of a post, in the order the fields were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Vec<(String, FieldValue)>);

impl Frontmatter {
    /// Sets `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: String, value: FieldValue) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Frontmatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAccessor {
    Author,
    Categories,
    CoverImage,
    Date,
    Excerpt,
    Id,
    Slug,
    Tags,
    Title,
    Type,
}

impl FromStr for FieldAccessor {
    type Err = ImportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let accessor = match name {
            "author" => FieldAccessor::Author,
            "categories" => FieldAccessor::Categories,
            "coverImage" => FieldAccessor::CoverImage,
            "date" => FieldAccessor::Date,
            "excerpt" => FieldAccessor::Excerpt,
            "id" => FieldAccessor::Id,
            "slug" => FieldAccessor::Slug,
            "tags" => FieldAccessor::Tags,
            "title" => FieldAccessor::Title,
            "type" => FieldAccessor::Type,
            _ => return Err(ImportError::UnknownField(name.to_string())),
        };
        Ok(accessor)
    }
}

impl FieldAccessor {
    /// Reads the field from a fully built post. Never changes the post.
    pub fn read(&self, post: &Post, _config: &Config) -> FieldValue {
        let data = &post.data;
        match self {
            // Not decoded, usernames are plain already
            FieldAccessor::Author => FieldValue::Text(data.creator.clone()),
            FieldAccessor::Categories => FieldValue::List(
                category_names(post, "category")
                    .into_iter()
                    .filter(|name| name != UNCATEGORIZED)
                    .collect()
            ),
            FieldAccessor::CoverImage => match post.cover_image {
                Some(ref file_name) => FieldValue::Text(file_name.clone()),
                None => FieldValue::Missing,
            },
            FieldAccessor::Date => FieldValue::Date(post.date),
            FieldAccessor::Excerpt => FieldValue::Text(collapse_newlines(&data.excerpt)),
            FieldAccessor::Id => match post.id.0.parse::<i64>() {
                Ok(id) => FieldValue::Number(id),
                Err(_) => FieldValue::Text(post.id.0.clone()),
            },
            FieldAccessor::Slug => FieldValue::Text(post.slug.clone()),
            FieldAccessor::Tags => FieldValue::List(category_names(post, "post_tag")),
            FieldAccessor::Title => FieldValue::Text(data.title.clone()),
            FieldAccessor::Type => FieldValue::Text(post.post_type.clone()),
        }
    }
}

fn category_names(post: &Post, domain: &str) -> Vec<String> {
    post.data.categories.iter()
        .filter(|category| category.domain == domain)
        .map(|category| decode_component_lossy(&category.nicename))
        .collect()
}

/// `name` or `name:alias`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub accessor: FieldAccessor,
    pub key: String,
}

impl FromStr for FieldDescriptor {
    type Err = ImportError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        let mut parts = field.split(':');
        let name = parts.next().unwrap_or_default();
        let alias = parts.next().filter(|alias| !alias.is_empty());

        let accessor = name.parse::<FieldAccessor>()?;
        Ok(FieldDescriptor {
            accessor,
            key: alias.unwrap_or(name).to_string(),
        })
    }
}

/// Fills the frontmatter of every post from the configured fields.
/// All field names are checked before any post is touched.
pub fn populate_frontmatter(posts: &mut [Post], config: &Config) -> Result<(), ImportError> {
    let descriptors = config.frontmatter_fields.iter()
        .map(|field| field.parse::<FieldDescriptor>())
        .collect::<Result<Vec<_>, _>>()?;

    for post in posts.iter_mut() {
        let mut frontmatter = Frontmatter::default();
        for descriptor in &descriptors {
            frontmatter.insert(descriptor.key.clone(), descriptor.accessor.read(post, config));
        }
        post.frontmatter = frontmatter;
    }

    Ok(())
}
