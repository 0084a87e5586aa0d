use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

use crate::export::PostId;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error reading export file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing export document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Error parsing export document attribute: {0}")]
    XmlAttribute(#[from] AttrError),

    #[error("Malformed export document: {0}")]
    Malformed(String),

    #[error("Post {post_id} has no publication date")]
    MissingDate { post_id: PostId },

    #[error("Post {post_id} has an invalid publication date {value:?}: {source}")]
    InvalidDate {
        post_id: PostId,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unknown timezone {0:?}")]
    UnknownTimezone(String),

    #[error("Post {post_id} has a slug that cannot be decoded: {slug:?}")]
    InvalidSlug { post_id: PostId, slug: String },

    #[error("Could not resolve image {src:?} against post link {base:?}: {source}")]
    InvalidImageUrl {
        src: String,
        base: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Could not find a frontmatter getter named \"{0}\".")]
    UnknownField(String),

    #[error("Error rendering post {post_id}: {reason}")]
    Render { post_id: PostId, reason: String },
}
