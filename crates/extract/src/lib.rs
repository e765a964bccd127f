//! Isolates the raw text of the preformatted (`<pre>`) blocks that meet
//! result documents embed their results in.
//!
//! Parsing the lines inside a block is left to the caller.

pub mod error;
mod extract;
mod mode;

use tracing::instrument;

pub use crate::extract::Extractor;
pub use crate::mode::CaptureMode;

/// Easy, top-level entrypoint: the text of the first `<pre>` block in `html`.
///
/// Returns `None` when the document has no `<pre>` block with text in it.
///
/// # Examples
///
/// ```rust
/// use swimr_extract::extract;
/// let html = "<html><body><pre>10:23.4 Alice</pre></body></html>";
/// assert_eq!(extract(html).as_deref(), Some("10:23.4 Alice"));
/// assert_eq!(extract("<p>No results</p>"), None);
/// ```
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract(html: &str) -> Option<String> {
    Extractor::default().first(html)
}

/// Same as [`extract`], but accepts raw bytes instead of requiring the
/// document to be valid UTF-8. Invalid byte sequences are replaced with U+FFFD.
pub fn extract_bytes(html: impl AsRef<[u8]>) -> Option<String> {
    extract(&String::from_utf8_lossy(html.as_ref()))
}
