use crate::config::Config;
use crate::error::ImportError;
use crate::export::RawItem;

/// Turns the raw HTML body of an item into the content written out for a post.
pub trait BodyRenderer {
    fn render(&self, item: &RawItem, config: &Config) -> Result<String, ImportError>;
}

impl<F> BodyRenderer for F
where
    F: Fn(&RawItem, &Config) -> Result<String, ImportError>,
{
    fn render(&self, item: &RawItem, config: &Config) -> Result<String, ImportError> {
        self(item, config)
    }
}

/// Keeps the HTML as it is, minus comments such as the block editor markers
/// (`<!-- wp:paragraph -->`).
pub struct HtmlPassthroughRenderer {}

impl BodyRenderer for HtmlPassthroughRenderer {
    fn render(&self, item: &RawItem, _config: &Config) -> Result<String, ImportError> {
        match remove_comments(&item.content) {
            Some(html) => Ok(html.trim().to_string()),
            None => Err(ImportError::Render {
                post_id: item.post_id.clone(),
                reason: "Error finding end of comment".to_string(),
            }),
        }
    }
}

fn remove_comments(html: &str) -> Option<String> {
    let start_comment = "<!--";
    let end_comment = "-->";

    let mut res = String::new();
    let mut block = html;

    while let Some(start) = block.find(start_comment) {
        res.push_str(&block[0..start]);

        let next = &block[(start + start_comment.len())..];
        let end = next.find(end_comment)?;
        block = &next[(end + end_comment.len())..];
    }
    res.push_str(block);

    Some(res)
}
