//! Token sink tracking whether the tokenizer is inside a `<pre>` element.

use std::cell::{Cell, RefCell};

use html5ever::local_name;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult};

use crate::CaptureMode;

/// Where the scan currently is, relative to a `<pre>` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Position {
    #[default]
    Outside,
    Inside,
}

/// Collects the text of every `<pre>` block seen by the tokenizer.
///
/// The tokenizer only lends out `&self`, so state lives behind cells.
#[derive(Debug, Default)]
pub(crate) struct PreSink {
    mode: CaptureMode,
    position: Cell<Position>,
    current: RefCell<Option<String>>,
    blocks: RefCell<Vec<String>>,
}
impl PreSink {
    pub(crate) fn new(mode: CaptureMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Hands over every finished block, closing a block left open at the end of the input.
    pub(crate) fn take_blocks(&self) -> Vec<String> {
        self.flush();
        self.blocks.take()
    }

    fn tag(&self, tag: &Tag) {
        if tag.name != local_name!("pre") {
            return;
        }
        match (tag.kind, self.position.get()) {
            (TagKind::StartTag, Position::Outside) => self.position.set(Position::Inside),
            (TagKind::EndTag, Position::Inside) => {
                self.flush();
                self.position.set(Position::Outside);
            },
            // A nested start tag keeps filling the open block, a stray end tag is ignored.
            _ => {},
        }
    }

    fn text(&self, chunk: &str) {
        if self.position.get() != Position::Inside {
            return;
        }
        let mut current = self.current.borrow_mut();
        match self.mode {
            CaptureMode::Append => current.get_or_insert_with(String::new).push_str(chunk),
            CaptureMode::Replace => *current = Some(chunk.to_string()),
        }
    }

    /// Moves the open block (if it captured any text) into the finished list.
    fn flush(&self) {
        if let Some(block) = self.current.borrow_mut().take() {
            tracing::trace!(block_size = block.len(), "captured pre block");
            self.blocks.borrow_mut().push(block);
        }
    }
}
impl TokenSink for PreSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<Self::Handle> {
        match token {
            Token::TagToken(tag) => self.tag(&tag),
            Token::CharacterTokens(chunk) => self.text(&chunk),
            Token::NullCharacterToken => self.text("\0"),
            Token::EOFToken => self.flush(),
            _ => {},
        }
        TokenSinkResult::Continue
    }
}
