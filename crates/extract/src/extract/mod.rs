//! Main extraction logic for HTML meet result documents.

mod sink;

use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use tendril::StrTendril;
use tracing::instrument;

use self::sink::PreSink;
use crate::CaptureMode;

/// Scans HTML for preformatted result blocks.
///
/// A single left-to-right pass over the tag/text stream; a block opens on a
/// `<pre>` start tag and closes on the matching end tag (or at the end of the
/// input, for unterminated blocks). Blocks that never received any text are
/// not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    mode: CaptureMode,
}
impl Extractor {
    pub fn new(mode: CaptureMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Returns the text of every `<pre>` block, in document order.
    #[instrument(skip(self, html), fields(html_size = html.len(), mode = %self.mode, blocks))]
    pub fn blocks(&self, html: &str) -> Vec<String> {
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));
        let tokenizer = Tokenizer::new(PreSink::new(self.mode), TokenizerOpts::default());
        // The sink never hands back a script handle, so feeding always runs to completion.
        let _ = tokenizer.feed(&input);
        tokenizer.end();
        let blocks = tokenizer.sink.take_blocks();
        tracing::Span::current().record("blocks", blocks.len());
        blocks
    }

    /// Same as [`blocks`](Self::blocks), but accepts raw bytes. Invalid byte
    /// sequences are replaced with U+FFFD.
    pub fn blocks_from_bytes(&self, html: impl AsRef<[u8]>) -> Vec<String> {
        self.blocks(&String::from_utf8_lossy(html.as_ref()))
    }

    /// Returns the text of the first `<pre>` block, if there is one.
    pub fn first(&self, html: &str) -> Option<String> {
        self.blocks(html).into_iter().next()
    }

    /// Returns the text of the last-seen `<pre>` block, if there is one.
    pub fn last(&self, html: &str) -> Option<String> {
        self.blocks(html).pop()
    }
}
impl From<CaptureMode> for Extractor {
    fn from(mode: CaptureMode) -> Self {
        Self::new(mode)
    }
}
