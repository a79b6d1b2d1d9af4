//! Output rendering.
//!
//! `html` produces what the page shows: either bare table rows (the payload
//! a page script swaps into the container on each filter change) or a full
//! standalone snapshot with checkbox groups. `text` produces the plain line
//! format the CLI prints. Both take the already-filtered visible list; the
//! renderers never filter.

pub mod html;
pub mod text;

/// Presentation settings shared by the renderers. Usually built from
/// [`crate::config::PublistConfig`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// The site owner: this author renders in `<strong>` instead of a link,
    /// matched exactly or with a trailing `*`.
    pub highlight_author: Option<String>,
    /// Appended after the author line when a record sets `cofirst`.
    pub cofirst_note: String,
    /// Heading and `<title>` of the standalone page.
    pub page_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_author: None,
            cofirst_note: " (* co-first author)".to_string(),
            page_title: "Publications".to_string(),
        }
    }
}
